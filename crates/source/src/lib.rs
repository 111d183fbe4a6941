//! Entity data fed into sheet exports.
//!
//! [`ActorData`] is the JSON contract served by the game-server module.
//! [`ActorSource`] feeds actors one at a time into a batch export.
//!
//! ## Example
//!
//! ```ignore
//! use sheetpress_source::{ActorSource, parse_actors, VecActorSource};
//!
//! let mut source = VecActorSource::new(parse_actors(json)?);
//! while let Some(actor) = source.next() {
//!     println!("Exporting: {}", actor.name);
//! }
//! ```

mod actor;
mod error;
mod source;

pub use actor::{ActorData, ActorMeta, load_actors, parse_actors};
pub use error::SourceError;
pub use source::{ActorSource, IteratorActorSource, VecActorSource};
