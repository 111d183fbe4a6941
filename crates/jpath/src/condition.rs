use crate::binding::Binding;
use crate::scope::Scope;

/// Removes one optional `{{` prefix and one optional `}}` suffix, then trims.
pub fn strip_binding(expr: &str) -> &str {
    let expr = expr.strip_prefix("{{").unwrap_or(expr);
    let expr = expr.strip_suffix("}}").unwrap_or(expr);
    expr.trim()
}

/// Resolves a binding expression such as `{{actor.flags.hidden}}` or a bare
/// path. Used for both conditions and repeat sources.
pub fn resolve_binding<'a>(expr: &str, scope: &Scope<'a>) -> Binding<'a> {
    scope.lookup(strip_binding(expr))
}

/// True when an element guarded by `condition` should be shown.
///
/// A missing or empty condition always passes.
pub fn evaluate_condition(condition: Option<&str>, scope: &Scope<'_>) -> bool {
    match condition {
        None => true,
        Some(expr) if expr.is_empty() => true,
        Some(expr) => resolve_binding(expr, scope).is_truthy(),
    }
}
