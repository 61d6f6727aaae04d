use serde::{Deserialize, Serialize};

use super::entities::DraftInput;

/// UI-wide state shared through a Dioxus signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    /// The listing currently being edited on the calculator.
    pub draft: DraftInput,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.draft = persisted.draft;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState { draft: self.draft }
    }
}

/// On-disk snapshot of the parts of [`AppState`] worth keeping between
/// sessions. Only the working draft is saved; finished calculations are
/// never recorded anywhere.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub draft: DraftInput,
}
