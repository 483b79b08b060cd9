//! Application state shared across all handlers.

use pz_translator::Translator;
use std::sync::Arc;

/// Shared server state. The translator is stateless behind `&self`, so one
/// instance serves every request without locking.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new() -> Self {
        Self { translator: Arc::new(Translator::default()) }
    }

    pub fn with_translator(translator: Translator) -> Self {
        Self { translator: Arc::new(translator) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
