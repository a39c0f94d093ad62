use std::sync::Arc;

use crate::services::Recommender;

/// Shared application state
///
/// The recommender and everything under it are loaded once at startup and
/// read-only afterwards, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }
}
