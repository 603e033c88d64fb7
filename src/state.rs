// Shared state types.
// Loading lifecycle for async data and the messages fetch tasks deliver.

use crate::github::Languages;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

/// Result of a background language fetch, delivered over the app channel.
#[derive(Debug)]
pub struct LanguagesFetched {
    pub repo: String,
    pub result: std::result::Result<Languages, String>,
}
