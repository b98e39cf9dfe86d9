//! Content comparison - byte buffers, size tiers and sampled file reads

mod bytes;
mod policy;
mod sampled;

pub use bytes::bytes_equal;
pub use policy::{SamplingPolicy, Tier, DEFAULT_BLOCK_SIZE, DEFAULT_CHUNK_SIZE};
pub use sampled::{compare_files, files_equal, Comparison};
