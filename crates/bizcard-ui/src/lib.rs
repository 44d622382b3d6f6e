//! bizcard UI Components
//!
//! Dioxus building blocks for the business card editor: buttons, form
//! fields, the toast area and the layout toggle. Styling lives in the
//! desktop app's global stylesheet; components only attach class names.
//!
//! ## Palette
//!
//! - **Gold (#d4af37)**: card border, headings, primary actions
//! - **Ink (#0d0d0d)**: card background
//! - **Ivory (#f5f0e1)**: body text on the card

pub mod components;

pub use components::*;
