mod component_flattener;
mod deduplicator;
mod payload_builder;
mod snapshot_parser;

pub use component_flattener::ComponentFlattener;
pub use deduplicator::{DedupedSet, Deduplicator};
pub use payload_builder::{PayloadBuilder, CREATED_STATUS, DESCRIPTION_SUFFIX};
pub use snapshot_parser::SnapshotParser;
