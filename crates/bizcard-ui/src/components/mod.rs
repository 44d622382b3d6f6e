//! Reusable UI components
//!
//! Every component renders plain elements with stable class names so the
//! stylesheet can target them.

mod button;
mod input;
mod toast;
mod view_toggle;

pub use button::*;
pub use input::*;
pub use toast::*;
pub use view_toggle::*;
