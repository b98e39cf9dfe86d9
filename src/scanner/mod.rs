//! Directory listing - the filesystem side of the tree differ

mod filter;
mod listing;

pub use filter::ExcludeFilter;
pub use listing::list_directory;
