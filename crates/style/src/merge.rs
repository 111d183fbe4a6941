use crate::element::{ElementStyle, ResolvedStyle};
use std::collections::HashMap;

/// Named style presets declared by a template.
pub type NamedStyles = HashMap<String, ElementStyle>;

/// Combines the default style with an element's override.
///
/// Shallow: each property set on the override wins, everything else keeps
/// its default. Named presets are accepted for forward compatibility and do
/// not participate in the merge.
pub fn merge_styles(style: Option<&ElementStyle>, _named: &NamedStyles) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::default();
    if let Some(style) = style {
        resolved.apply(style);
    }
    resolved
}
