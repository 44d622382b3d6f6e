#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use bizcard_core::ViewMode;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Launch settings, set once from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    pub downloads_dir: PathBuf,
    pub initial_view: ViewMode,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the launch settings (parsed arguments or defaults)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        downloads_dir: default_downloads_dir(),
        initial_view: ViewMode::default(),
    })
}

fn default_downloads_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// bizcard - Digital business card editor
#[derive(Parser, Debug)]
#[command(name = "bizcard-desktop")]
#[command(about = "Edit a digital business card and share it as a vCard or standalone page")]
struct Args {
    /// Where saved vCard files go (defaults to the system downloads folder)
    #[arg(short, long)]
    downloads_dir: Option<PathBuf>,

    /// Start with the horizontal card layout
    #[arg(long)]
    horizontal: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let settings = Settings {
        downloads_dir: args.downloads_dir.unwrap_or_else(default_downloads_dir),
        initial_view: if args.horizontal {
            ViewMode::Horizontal
        } else {
            ViewMode::Vertical
        },
    };
    tracing::info!(
        downloads_dir = %settings.downloads_dir.display(),
        view = ?settings.initial_view,
        "Starting bizcard"
    );
    let actions = match app::build_actions(&settings) {
        Ok(actions) => actions,
        Err(e) => {
            tracing::error!("Failed to start bizcard: {}", e);
            std::process::exit(1);
        }
    };
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("bizcard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(actions)
        .launch(app::App);
}
