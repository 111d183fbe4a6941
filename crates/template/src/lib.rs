//! Sheet templates and their resolution into flat, positioned layouts.
//!
//! A [`TemplateDefinition`] is a tree of [`RenderElement`]s authored in
//! millimeters. [`resolve`] binds it to entity data and produces a
//! [`ResolvedLayout`]: an ordered list of text, image, rect and line
//! primitives with absolute page coordinates, ready for any renderer.
//!
//! ## Key Abstractions
//!
//! - **`TemplateDefinition`**: authored template (meta, named styles, layout tree)
//! - **`ResolvedLayout`**: renderer-agnostic output of resolution
//! - **`TemplateRegistry`**: templates keyed by id, built-ins included

pub mod ast;
pub mod error;
pub mod format;
pub mod layout;
pub mod registry;
pub mod resolver;

pub use ast::{Direction, ElementKind, ImageFit, RenderElement, TemplateDefinition, TemplateMeta};
pub use error::TemplateError;
pub use format::ExportFormat;
pub use layout::{ResolvedElement, ResolvedKind, ResolvedLayout};
pub use registry::TemplateRegistry;
pub use resolver::resolve;
