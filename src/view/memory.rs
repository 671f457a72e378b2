//! In-memory view loader.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::view::loader::ViewLoader;
use crate::view::types::{content_type_for, LoadError, View};

/// Serves views registered up front. Handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewLoader {
    modules: HashMap<String, View>,
}

impl MemoryViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module; the content type is guessed from its name.
    pub fn with_module(mut self, module: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        let module = module.into();
        let view = View::new(module.clone(), content_type_for(&module), body);
        self.modules.insert(module, view);
        self
    }
}

#[async_trait]
impl ViewLoader for MemoryViewLoader {
    async fn load(&self, module: &str) -> Result<View, LoadError> {
        self.modules
            .get(module)
            .cloned()
            .ok_or_else(|| LoadError::Missing(module.to_string()))
    }
}
