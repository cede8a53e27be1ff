// Filter state store - the single owner of the active filter
use crate::domain::filter::{FilterError, FilterState};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct FilterStore {
    state: Mutex<FilterState>,
}

impl FilterStore {
    /// Snapshot of the current filter
    pub fn get_state(&self) -> FilterState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole filter. An inverted date range leaves the previous state in place.
    pub fn apply(&self, next: FilterState) -> Result<(), FilterError> {
        next.validate()?;
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        Ok(())
    }

    pub fn clear(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = FilterState::default();
    }
}
