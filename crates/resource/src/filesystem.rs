//! Filesystem-backed resource provider.
//!
//! Paths are resolved relative to an asset root. Absolute paths, `..`
//! components and anything that canonicalizes outside the root are refused.

use crate::provider::{ResourceError, ResourceProvider, SharedResourceData};
use log::debug;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    /// `None` while the root does not exist.
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a source string to a file under the root, or `None` if the
    /// source must not be read from disk.
    fn locate(&self, src: &str) -> Option<PathBuf> {
        if has_url_scheme(src) {
            return None;
        }
        let relative = Path::new(src);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            return None;
        }

        let candidate = self.root.join(relative);
        match (candidate.canonicalize(), &self.canonical_root) {
            // Symlinks may still point elsewhere.
            (Ok(real), Some(root)) => real.starts_with(root).then_some(real),
            _ => Some(candidate),
        }
    }
}

fn has_url_scheme(src: &str) -> bool {
    src.split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'))
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let file = self.locate(path).ok_or_else(|| {
            debug!("Refusing to read '{}' outside {}", path, self.root.display());
            ResourceError::NotFound(format!("{} (outside asset root)", path))
        })?;

        std::fs::read(&file).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.locate(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_nested_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("tokens")).unwrap();
        fs::write(dir.path().join("tokens/rin.png"), b"img").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("tokens/rin.png"));
        assert_eq!(&*provider.load("tokens/rin.png").unwrap(), b"img");
        assert_eq!(&*provider.load("./tokens/rin.png").unwrap(), b"img");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(matches!(provider.load("nope.png"), Err(ResourceError::NotFound(_))));
        assert!(!provider.exists("nope.png"));
    }

    #[test]
    fn test_directories_do_not_exist_as_resources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("icons"));
    }

    #[test]
    fn test_blocks_traversal_and_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        for src in ["../../../etc/passwd", "/etc/passwd", "icons/../../secret", ".."] {
            assert!(provider.load(src).is_err(), "{} should be refused", src);
            assert!(!provider.exists(src));
        }
    }

    #[test]
    fn test_remote_urls_are_not_read() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(matches!(
            provider.load("https://example.com/token.png"),
            Err(ResourceError::NotFound(_))
        ));
    }
}
