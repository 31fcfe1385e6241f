use std::collections::HashMap;

use crate::pagination::ItemSource;

/// Named in-memory item collections.
#[derive(Debug, Clone)]
pub struct MemorySource<I> {
    collections: HashMap<String, Vec<I>>,
}

impl<I> Default for MemorySource<I> {
    fn default() -> Self {
        Self {
            collections: HashMap::new(),
        }
    }
}

impl<I> MemorySource<I> {
    /// Create a source with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `items` under `id`.
    pub fn with_collection(mut self, id: impl Into<String>, items: Vec<I>) -> Self {
        self.collections.insert(id.into(), items);
        self
    }
}

impl<I: Clone> ItemSource<I> for MemorySource<I> {
    fn resolve(&self, id: &str) -> Option<Vec<I>> {
        self.collections.get(id).cloned()
    }
}
