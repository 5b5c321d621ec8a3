pub mod pools;
pub mod snapshot;
pub mod stats;
