use crate::ast::TemplateDefinition;
use crate::error::TemplateError;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("character-card.json", include_str!("../templates/character-card.json")),
    ("character-sheet.json", include_str!("../templates/character-sheet.json")),
];

/// Templates keyed by `meta.id`.
///
/// Lookups return `None` for unknown ids; turning that into an error is the
/// caller's decision.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Arc<TemplateDefinition>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the templates shipped with the crate.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        for (name, source) in BUILTIN_SOURCES {
            let id = registry.register_json(source)?;
            debug!("Registered built-in template '{}' from {}", id, name);
        }
        Ok(registry)
    }

    /// Adds a template, replacing any previous template with the same id.
    pub fn register(&mut self, template: TemplateDefinition) -> Option<Arc<TemplateDefinition>> {
        let id = template.meta.id.clone();
        let previous = self.templates.insert(id.clone(), Arc::new(template));
        if previous.is_some() {
            warn!("Template '{}' replaced an existing registration", id);
        }
        previous
    }

    /// Parses and registers a template, returning its id.
    pub fn register_json(&mut self, source: &str) -> Result<String, TemplateError> {
        let template = TemplateDefinition::from_json(source)?;
        let id = template.meta.id.clone();
        self.register(template);
        Ok(id)
    }

    /// Registers every `*.json` file in `dir`. Returns how many were loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, TemplateError> {
        let io_err = |source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
                path: path.clone(),
                source,
            })?;
            let id = self.register_json(&source)?;
            debug!("Registered template '{}' from {}", id, path.display());
        }
        Ok(paths.len())
    }

    pub fn get(&self, id: &str) -> Option<Arc<TemplateDefinition>> {
        self.templates.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.templates.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
