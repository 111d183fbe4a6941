//! The `ResourceProvider` abstraction and its in-memory implementation.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("No resource at '{0}'")]
    NotFound(String),

    #[error("Could not read '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Malformed resource: {0}")]
    InvalidFormat(String),
}

/// Encoded image bytes, shared between the cache and every page using them.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads the bytes behind an image source such as `tokens/rin.png`.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Whether `load` would succeed, without reading the bytes.
    fn exists(&self, path: &str) -> bool;

    /// Shown in log lines when a lookup misses.
    fn name(&self) -> &'static str;
}

/// Image sources held in memory, typically uploaded alongside the actor.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    entries: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `path`, replacing any previous entry.
    ///
    /// Fails only when another thread panicked while holding the store.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        self.add_shared(path, Arc::new(data))
    }

    pub fn add_shared(&self, path: impl Into<String>, data: SharedResourceData) -> Result<(), ResourceError> {
        let path = path.into();
        self.entries
            .write()
            .map_err(|_| poisoned(&path))?
            .insert(path, data);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(path: &str) -> ResourceError {
    ResourceError::LoadFailed {
        path: path.to_string(),
        message: "in-memory store poisoned".to_string(),
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let entries = self.entries.read().map_err(|_| poisoned(path))?;
        match entries.get(path) {
            Some(data) => Ok(Arc::clone(data)),
            None => Err(ResourceError::NotFound(path.to_string())),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.entries.read().is_ok_and(|entries| entries.contains_key(path))
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
