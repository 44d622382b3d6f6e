//! Card Store - in-memory state for one editing session.
//!
//! The profile is kept behind an `Arc` and replaced wholesale on every edit,
//! so a snapshot taken by an export action can never observe a half-applied
//! change.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::profile::{CardProfile, ProfileEdit, ViewMode};

#[derive(Debug)]
struct StoreState {
    profile: Arc<CardProfile>,
    view_mode: ViewMode,
    revision: u64,
}

/// Shared holder of the current card profile and view mode.
#[derive(Debug, Clone)]
pub struct CardStore {
    inner: Arc<RwLock<StoreState>>,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new(CardProfile::default())
    }
}

impl CardStore {
    pub fn new(profile: CardProfile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState {
                profile: Arc::new(profile),
                view_mode: ViewMode::default(),
                revision: 0,
            })),
        }
    }

    pub fn with_view_mode(self, view_mode: ViewMode) -> Self {
        self.inner.write().view_mode = view_mode;
        self
    }

    /// Current profile. Later edits do not affect the returned value.
    pub fn snapshot(&self) -> Arc<CardProfile> {
        Arc::clone(&self.inner.read().profile)
    }

    /// Apply one field edit and return the new snapshot.
    pub fn apply(&self, edit: ProfileEdit) -> Arc<CardProfile> {
        self.update(|profile| profile.apply(edit))
    }

    /// Clone the profile, mutate the clone, then swap it in.
    pub fn update(&self, f: impl FnOnce(&mut CardProfile)) -> Arc<CardProfile> {
        let mut state = self.inner.write();
        let mut next = CardProfile::clone(&state.profile);
        f(&mut next);
        let next = Arc::new(next);
        state.profile = Arc::clone(&next);
        state.revision += 1;
        next
    }

    /// Replace the whole profile.
    pub fn replace(&self, profile: CardProfile) -> Arc<CardProfile> {
        self.update(|current| *current = profile)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.inner.read().view_mode
    }

    pub fn set_view_mode(&self, view_mode: ViewMode) {
        let mut state = self.inner.write();
        if state.view_mode != view_mode {
            state.view_mode = view_mode;
            state.revision += 1;
        }
    }

    pub fn toggle_view_mode(&self) -> ViewMode {
        let mut state = self.inner.write();
        state.view_mode = state.view_mode.toggled();
        state.revision += 1;
        state.view_mode
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }
}
