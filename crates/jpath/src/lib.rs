//! Data binding for sheet templates.
//!
//! Templates reach into entity data through dotted paths such as
//! `actor.system.hp.value`. This crate resolves those paths, substitutes
//! `{{path}}` placeholders inside strings and evaluates visibility
//! conditions. Every lookup goes through [`Binding`], so "what prints" and
//! "what counts as true" follow one convention.

pub mod binding;
pub mod condition;
pub mod interpolate;
mod parser;
pub mod path;
pub mod scope;

// --- Public API ---
pub use binding::Binding;
pub use condition::{evaluate_condition, resolve_binding, strip_binding};
pub use interpolate::interpolate;
pub use parser::{Segment, parse_template};
pub use path::resolve_path;
pub use scope::Scope;
