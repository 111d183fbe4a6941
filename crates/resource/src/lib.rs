//! Resource providers for sheet rendering.
//!
//! Renderers never touch the filesystem or the network directly: every
//! image source a template produces is handed to a [`ResourceProvider`].
//!
//! ## Available Providers
//!
//! - [`InMemoryResourceProvider`]: pre-populated in-memory storage
//! - [`FilesystemResourceProvider`]: files under a base directory
//! - [`ChainedResourceProvider`]: tries several providers in order
//!
//! `data:` URIs are decoded inline by [`load_source`] and never reach a
//! provider.

mod chained;
pub mod data_uri;
mod filesystem;
mod provider;

pub use chained::ChainedResourceProvider;
pub use data_uri::DataUri;
pub use filesystem::FilesystemResourceProvider;
pub use provider::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};

use std::sync::Arc;

/// Loads an image source as produced by template resolution.
///
/// `data:` URIs are decoded in place; anything else is looked up through
/// `provider`.
pub fn load_source(
    provider: &dyn ResourceProvider,
    src: &str,
) -> Result<SharedResourceData, ResourceError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ResourceError::NotFound("<empty source>".to_string()));
    }
    if DataUri::is_data_uri(src) {
        return DataUri::parse(src)?.decode().map(Arc::new);
    }
    provider.load(src)
}
