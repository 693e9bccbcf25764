//! Application state shared across handlers

use std::sync::Arc;

use crate::db::UnitOfWorkFactory;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    units_of_work: UnitOfWorkFactory,
}

impl AppState {
    pub fn new(units_of_work: UnitOfWorkFactory) -> Self {
        Self {
            inner: Arc::new(AppStateInner { units_of_work }),
        }
    }

    /// Factory every request opens its unit of work from.
    pub fn units_of_work(&self) -> &UnitOfWorkFactory {
        &self.inner.units_of_work
    }
}
