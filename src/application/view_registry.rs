// View registry - which refresh operations make up each page
use crate::application::refresh_operation::RefreshOperation;
use crate::domain::view::ViewId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    operations: HashMap<ViewId, Vec<RefreshOperation>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation to `view`. Registration order is invocation order.
    pub fn register(&mut self, view: ViewId, operation: RefreshOperation) {
        self.operations.entry(view).or_default().push(operation);
    }

    pub fn operations_for(&self, view: ViewId) -> &[RefreshOperation] {
        self.operations
            .get(&view)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
