//! Core type definitions for dirdiff

mod entry;
mod error;
mod verdict;

pub use entry::{DirEntry, FileEntry, Listing, Named};
pub use error::{DirDiffError, IoContext};
pub use verdict::Verdict;
