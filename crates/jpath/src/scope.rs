use crate::binding::Binding;
use crate::path::resolve_path;
use log::trace;
use serde_json::Value;

const ITEM: &str = "item";
const INDEX: &str = "index";
const LENGTH: &str = "length";

/// Resolves `path` under `data`. A final `length` segment that names no key
/// binds to the element count of the array before it.
fn bind_path<'a>(data: &'a Value, path: &str) -> Binding<'a> {
    if let Some(value) = resolve_path(data, path) {
        return Binding::Value(value);
    }
    let parent = match path.rsplit_once('.') {
        Some((prefix, LENGTH)) => resolve_path(data, prefix),
        None if path == LENGTH => Some(data),
        _ => None,
    };
    match parent {
        Some(Value::Array(items)) => Binding::Length(items.len()),
        _ => Binding::Absent,
    }
}

/// The data visible to a template element.
///
/// Inside a repeat the current element is reachable as `item` and its
/// position as `index`; both shadow root keys of the same name. Nested
/// repeats shadow the outer frame entirely.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    root: &'a Value,
    frame: Option<(&'a Value, usize)>,
}

impl<'a> Scope<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root, frame: None }
    }

    /// A child scope for one repeat instance.
    pub fn with_item(&self, item: &'a Value, index: usize) -> Self {
        Self {
            root: self.root,
            frame: Some((item, index)),
        }
    }

    pub fn root(&self) -> &'a Value {
        self.root
    }

    pub fn item(&self) -> Option<&'a Value> {
        self.frame.map(|(item, _)| item)
    }

    pub fn index(&self) -> Option<usize> {
        self.frame.map(|(_, index)| index)
    }

    /// Resolves a dotted path against this scope.
    pub fn lookup(&self, path: &str) -> Binding<'a> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let binding = match (self.frame, head, rest) {
            (Some((item, _)), ITEM, None) => Binding::Value(item),
            (Some((item, _)), ITEM, Some(rest)) => bind_path(item, rest),
            (Some((_, index)), INDEX, None) => Binding::Index(index),
            // A number has no members.
            (Some(_), INDEX, Some(_)) => Binding::Absent,
            _ => bind_path(self.root, path),
        };

        if binding.is_absent() {
            trace!("Binding '{}' did not resolve", path);
        }
        binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_lookup() {
        let data = json!({ "actor": { "name": "Rin" } });
        let scope = Scope::new(&data);
        assert_eq!(scope.lookup("actor.name").to_display_string(), "Rin");
        assert!(scope.lookup("item").is_absent());
    }

    #[test]
    fn test_item_and_index_shadow_root() {
        let data = json!({ "item": "root item", "index": 99, "actor": { "name": "Rin" } });
        let item = json!({ "name": "Sword" });
        let scope = Scope::new(&data).with_item(&item, 2);

        assert_eq!(scope.lookup("item.name").to_display_string(), "Sword");
        assert_eq!(scope.lookup("index").to_display_string(), "2");
        assert_eq!(scope.lookup("actor.name").to_display_string(), "Rin");
        assert!(scope.lookup("index.value").is_absent());
    }

    #[test]
    fn test_nested_frames_shadow_outer() {
        let data = json!({});
        let outer = json!({ "children": [ "a" ] });
        let inner = json!("a");
        let outer_scope = Scope::new(&data).with_item(&outer, 4);
        let inner_scope = outer_scope.with_item(&inner, 0);

        assert_eq!(inner_scope.lookup("item").to_display_string(), "a");
        assert_eq!(inner_scope.index(), Some(0));
        assert!(inner_scope.lookup("item.children").is_absent());
    }

    #[test]
    fn test_length_of_arrays() {
        let data = json!({
            "actor": { "items": [1, 2, 3], "name": "Rin", "effects": [], "stats": { "length": 7 } }
        });
        let item = json!([["a", "b"]]);
        let scope = Scope::new(&data).with_item(&item, 0);

        assert_eq!(scope.lookup("actor.items.length"), Binding::Length(3));
        assert_eq!(scope.lookup("actor.items.length").to_display_string(), "3");
        assert!(!scope.lookup("actor.effects.length").is_truthy());
        assert_eq!(scope.lookup("actor.stats.length").to_display_string(), "7");
        assert_eq!(scope.lookup("item.length").to_display_string(), "1");
        assert_eq!(scope.lookup("item.0.length").to_display_string(), "2");
        // Strings are not arrays.
        assert!(scope.lookup("actor.name.length").is_absent());
        assert!(scope.lookup("actor.items.length.value").is_absent());
    }

    #[test]
    fn test_keys_that_only_start_with_item() {
        let data = json!({ "items": [1] });
        let item = json!(null);
        let scope = Scope::new(&data).with_item(&item, 0);
        assert!(scope.lookup("items").as_array().is_some());
    }
}
