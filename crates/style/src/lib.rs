pub mod element;
pub mod font;
pub mod merge;
pub mod text;

pub use element::{ElementStyle, ResolvedStyle};
pub use font::{FontStyle, FontWeight};
pub use merge::{NamedStyles, merge_styles};
pub use text::{TextAlign, VerticalAlign};
