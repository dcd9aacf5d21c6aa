//! Shared application state.

use std::sync::{Arc, Mutex};

use crate::config::Limits;
use crate::registry::Registry;
use crate::utils::error::AppError;

/// State shared across all request handlers.
///
/// Every registry operation runs under one lock, so concurrent requests see
/// each operation either fully applied or not at all.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<Mutex<Registry>>,
    pub limits: Limits,
}

impl AppState {
    pub fn new(registry: Registry, limits: Limits) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            limits,
        }
    }

    /// Runs `f` with exclusive access to the registry.
    ///
    /// The guard is dropped before returning, so callers never hold it across
    /// an await point.
    pub fn with_registry<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> Result<T, AppError> {
        let mut registry = self
            .registry
            .lock()
            .map_err(|e| AppError::InternalServerError(format!("registry mutex poisoned: {e}")))?;
        Ok(f(&mut registry))
    }
}
