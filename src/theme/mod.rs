//! Desktop theme: palette and global stylesheet.

mod colors;
mod styles;

use bizcard_core::CodeStyle;

use colors::{CSS_VARIABLES, QR_DARK, QR_LIGHT};
pub use styles::GLOBAL_STYLES;

/// `:root { ... }` block declaring the palette as CSS custom properties.
pub fn css_variables() -> String {
    let body: String = CSS_VARIABLES
        .iter()
        .map(|(name, value)| format!("  {}: {};\n", name, value))
        .collect();
    format!(":root {{\n{}}}\n", body)
}

/// QR rendering style for the preview and the exported document.
pub fn code_style() -> CodeStyle {
    CodeStyle {
        dark: QR_DARK.to_string(),
        light: QR_LIGHT.to_string(),
        ..CodeStyle::default()
    }
}
