//! Desktop components for the card editor.

mod action_bar;
mod business_card;
mod card_editor;
mod code_display;
mod photo_picker;

pub use action_bar::ActionBar;
pub use business_card::BusinessCard;
pub use card_editor::CardEditor;
pub use code_display::CodeDisplay;
pub use photo_picker::PhotoPicker;
