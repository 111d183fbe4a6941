use crate::provider::{ResourceError, ResourceProvider, SharedResourceData};
use log::trace;

/// Consults a list of providers in order; the first hit wins.
#[derive(Debug, Default)]
pub struct ChainedResourceProvider {
    providers: Vec<Box<dyn ResourceProvider>>,
}

impl ChainedResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn push(&mut self, provider: Box<dyn ResourceProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ResourceProvider for ChainedResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.load(path) {
                Ok(data) => return Ok(data),
                Err(ResourceError::NotFound(_)) => {
                    trace!("{} has no '{}'", provider.name(), path);
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| ResourceError::NotFound(path.to_string())))
    }

    fn exists(&self, path: &str) -> bool {
        self.providers.iter().any(|p| p.exists(path))
    }

    fn name(&self) -> &'static str {
        "chained"
    }
}
