//! Directory and file entries produced by listing one directory level

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Something that can be matched against the other side by name
///
/// Names are kept as the OS returned them; two entries match only when
/// their raw names are equal, even if neither is valid UTF-8.
pub trait Named {
    fn name(&self) -> &OsStr;
}

/// An immediate subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the directory (matching key)
    pub name: OsString,

    /// Full path, rooted at the side it was listed from
    pub path: PathBuf,
}

impl DirEntry {
    pub fn new(name: impl Into<OsString>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

impl Named for DirEntry {
    fn name(&self) -> &OsStr {
        &self.name
    }
}

/// An immediate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name (matching key)
    pub name: OsString,

    /// Full path, rooted at the side it was listed from
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<OsString>, path: PathBuf, size: u64) -> Self {
        Self {
            name: name.into(),
            path,
            size,
        }
    }
}

impl Named for FileEntry {
    fn name(&self) -> &OsStr {
        &self.name
    }
}

/// Immediate children of one directory, each list sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<DirEntry>,
    pub files: Vec<FileEntry>,
}
