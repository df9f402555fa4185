pub mod metadata;
pub mod plane;
pub mod tags;

pub use metadata::{extract_metadata, extract_metadata_from};
pub use plane::{classify_file, classify_plane};
pub use tags::*;
