//! Input loading and row model.

mod loader;
mod source;

pub use loader::{Loader, LoaderConfig};
pub use source::{Dataset, RawRow, SourceMetadata};
