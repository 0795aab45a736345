use std::time::{Duration, Instant};

use crate::auth::{Account, SessionStore};
use crate::stories::repository::StoryRepository;

/// The application state
#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    #[from_ref(skip)]
    started_at: Instant,
    repository: StoryRepository,
    sessions: SessionStore,
}

impl AppState {
    /// Create an empty store accepting `accounts`
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            started_at: Instant::now(),
            repository: StoryRepository::default(),
            sessions: SessionStore::new(accounts),
        }
    }
}

impl AppState {
    pub(crate) fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn sessions(&self) -> SessionStore {
        self.sessions.clone()
    }
}
