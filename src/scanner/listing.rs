//! Single-level directory listing

use super::filter::ExcludeFilter;
use crate::types::{DirDiffError, DirEntry, FileEntry, IoContext, Listing};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

enum EntryKind {
    Dir,
    File(u64),
    Skip,
}

/// List the immediate subdirectories and files of `dir`
///
/// Both lists are sorted by name so that repeated runs over an unchanged
/// tree enumerate entries in the same order.
///
/// # Errors
/// * Missing or unreadable directories are propagated; nothing is skipped
///   silently except dangling symlinks and special files (sockets, fifos, devices)
pub fn list_directory(dir: &Path, filter: &ExcludeFilter) -> Result<Listing, DirDiffError> {
    let read_dir = fs::read_dir(dir).map_err(|e| DirDiffError::at(dir, e, IoContext::List))?;
    let mut listing = Listing::default();

    for entry in read_dir {
        let entry = entry.map_err(|e| DirDiffError::at(dir, e, IoContext::List))?;
        let name = entry.file_name();

        if filter.is_excluded(&name) {
            debug!("Excluded {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        match classify(&entry)? {
            EntryKind::Dir => listing.dirs.push(DirEntry::new(name, path)),
            EntryKind::File(size) => listing.files.push(FileEntry::new(name, path, size)),
            EntryKind::Skip => {}
        }
    }

    listing.dirs.sort_by(|a, b| a.name.cmp(&b.name));
    listing.files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}

fn classify(entry: &fs::DirEntry) -> Result<EntryKind, DirDiffError> {
    let path = entry.path();
    let file_type = entry
        .file_type()
        .map_err(|e| DirDiffError::at(&path, e, IoContext::List))?;

    if file_type.is_dir() {
        return Ok(EntryKind::Dir);
    }

    if file_type.is_symlink() {
        // Symlinks are classified by their target
        return match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(EntryKind::Dir),
            Ok(meta) if meta.is_file() => Ok(EntryKind::File(meta.len())),
            Ok(_) => Ok(EntryKind::Skip),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Skipping dangling symlink {}", path.display());
                Ok(EntryKind::Skip)
            }
            Err(e) => Err(DirDiffError::at(&path, e, IoContext::List)),
        };
    }

    if file_type.is_file() {
        let meta = entry
            .metadata()
            .map_err(|e| DirDiffError::at(&path, e, IoContext::List))?;
        return Ok(EntryKind::File(meta.len()));
    }

    debug!("Skipping special file {}", path.display());
    Ok(EntryKind::Skip)
}
