use crate::parser::{Segment, parse_template};
use crate::scope::Scope;

/// Replaces every `{{path}}` marker with the display form of its binding.
///
/// Paths are trimmed before lookup. Unresolved or `null` bindings become
/// the empty string.
pub fn interpolate(template: &str, scope: &Scope<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(path) => {
                out.push_str(&scope.lookup(path.trim()).to_display_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_substitutes_value() {
        let data = json!({ "name": "Rin" });
        assert_eq!(interpolate("Hello {{name}}!", &Scope::new(&data)), "Hello Rin!");
    }

    #[test]
    fn test_missing_value_is_empty() {
        let data = json!({});
        assert_eq!(interpolate("Hello {{name}}!", &Scope::new(&data)), "Hello !");
    }

    #[test]
    fn test_null_is_empty() {
        let data = json!({ "name": null });
        assert_eq!(interpolate("[{{name}}]", &Scope::new(&data)), "[]");
    }

    #[test]
    fn test_path_is_trimmed() {
        let data = json!({ "actor": { "system": { "hp": { "value": 7, "max": 12 } } } });
        let scope = Scope::new(&data);
        assert_eq!(
            interpolate("{{ actor.system.hp.value }}/{{actor.system.hp.max}}", &scope),
            "7/12"
        );
    }

    #[test]
    fn test_no_markers_passes_through() {
        let data = json!({});
        assert_eq!(interpolate("Plain {text}", &Scope::new(&data)), "Plain {text}");
    }

    #[test]
    fn test_single_pass() {
        // Substituted values are not scanned again.
        let data = json!({ "a": "{{b}}", "b": "nope" });
        assert_eq!(interpolate("{{a}}", &Scope::new(&data)), "{{b}}");
    }
}
