//! Card context for the desktop app.
//!
//! `CardActions` is handed to the root as launch context. The reactive
//! mirror of the store (`CardSignals`) is provided by `App`.
//!
//! ## Usage
//!
//! ```ignore
//! let actions = use_card_actions();
//! let signals = use_card_signals();
//!
//! // Apply an edit to the store and refresh the preview
//! signals.edit(&actions, ProfileEdit::Name("Jane Doe".into()));
//! ```

use std::sync::Arc;

use bizcard_core::{CardActions, CardProfile, CardStore, ProfileEdit, ViewMode};
use dioxus::prelude::*;

use crate::Settings;

/// Reactive copies of the store contents.
///
/// The store stays the source of truth; these signals are refreshed after
/// every mutation so components re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct CardSignals {
    pub profile: Signal<Arc<CardProfile>>,
    pub view_mode: Signal<ViewMode>,
}

impl CardSignals {
    /// Pull the current store contents into the signals.
    pub fn sync(mut self, store: &CardStore) {
        self.profile.set(store.snapshot());
        self.view_mode.set(store.view_mode());
    }

    pub fn edit(self, actions: &CardActions, edit: ProfileEdit) {
        actions.store().apply(edit);
        self.sync(actions.store());
    }
}

/// Launch settings from the command line.
pub fn get_settings() -> Settings {
    crate::get_settings()
}

/// Hook to access the action boundary.
pub fn use_card_actions() -> CardActions {
    use_context::<CardActions>()
}

pub fn use_card_signals() -> CardSignals {
    use_context::<CardSignals>()
}
