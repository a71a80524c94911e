use std::sync::Arc;

use vidrack_core::Repository;

/// Shared context handed to every handler.
///
/// Constructed explicitly in `main` (or in a test) so each process and
/// each test owns its repository instance.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn Repository {
        self.repository.as_ref()
    }
}
