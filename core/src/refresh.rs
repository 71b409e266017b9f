//! Focus-driven refresh trigger.
//!
//! # Design
//! Navigation is an external collaborator: it knows when the list screen
//! regains focus and whether the user just came back from the add screen.
//! This adapter turns those two signals into `refresh()` calls without the
//! store knowing anything about screens. Coalescing of overlapping refreshes
//! lives in the store itself, so a burst of focus events still yields at
//! most one in-flight fetch.

use std::sync::Arc;

use crate::http::Transport;
use crate::store::{EmployeeStore, RefreshOutcome};

/// Binds navigation focus signals to the store's refresh.
pub struct RefreshTrigger<T: Transport> {
    store: Arc<EmployeeStore<T>>,
}

impl<T: Transport> RefreshTrigger<T> {
    pub fn new(store: Arc<EmployeeStore<T>>) -> Self {
        Self { store }
    }

    /// The list screen regained focus. Always requests a refresh; the store
    /// turns it into a no-op when a fetch is already in flight.
    pub async fn focus_gained(&self) -> RefreshOutcome {
        self.store.refresh().await
    }

    /// The add screen navigated back, carrying its refresh flag.
    pub async fn returned_from_create(&self, refresh: bool) -> Option<RefreshOutcome> {
        if refresh {
            Some(self.store.refresh().await)
        } else {
            None
        }
    }
}
