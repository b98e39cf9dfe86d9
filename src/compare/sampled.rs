//! Size-adaptive file content comparison
//!
//! Small files are compared byte for byte. Larger files are compared in
//! fixed-size blocks at a stride that grows with the file size, followed by
//! a check of the last block. Each chunk read is issued on both files at
//! once and compared only after both reads complete.

use super::bytes::bytes_equal;
use super::policy::{SamplingPolicy, Tier};
use crate::types::{DirDiffError, FileEntry, IoContext};
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Outcome of comparing one file pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Whether every visited region matched
    pub equal: bool,

    /// Tier used; `None` when sizes differed and nothing was read
    pub tier: Option<Tier>,

    /// Bytes read from each side
    pub bytes_read: u64,
}

/// Decide whether two files have equal content
///
/// Returns `Ok(false)` without opening either file when the sizes differ.
/// Above the full-compare threshold only sampled blocks and the last block
/// are read, so a difference confined to a skipped region is not detected.
pub async fn files_equal(
    left: &FileEntry,
    right: &FileEntry,
    policy: &SamplingPolicy,
) -> Result<bool, DirDiffError> {
    Ok(compare_files(left, right, policy).await?.equal)
}

/// Like [`files_equal`], also reporting the tier and bytes read
pub async fn compare_files(
    left: &FileEntry,
    right: &FileEntry,
    policy: &SamplingPolicy,
) -> Result<Comparison, DirDiffError> {
    if left.size != right.size {
        return Ok(Comparison {
            equal: false,
            tier: None,
            bytes_read: 0,
        });
    }

    let size = left.size;
    let tier = policy.tier_for(size);
    let mut pair = StreamPair::open(&left.path, &right.path, policy.chunk_size).await?;

    let equal = match tier {
        Tier::Full => pair.compare_range(0, size).await?,
        Tier::Sampled { .. } => {
            pair.compare_sampled(size, policy.block_size, tier.stride(policy.block_size))
                .await?
        }
    };

    Ok(Comparison {
        equal,
        tier: Some(tier),
        bytes_read: pair.bytes_read,
    })
}

/// Two read-only handles and their private buffers, owned by one comparison
struct StreamPair {
    left: File,
    right: File,
    left_path: PathBuf,
    right_path: PathBuf,
    left_buf: Vec<u8>,
    right_buf: Vec<u8>,
    bytes_read: u64,
}

impl StreamPair {
    async fn open(left: &Path, right: &Path, chunk_size: usize) -> Result<Self, DirDiffError> {
        let (left_file, right_file) = tokio::join!(File::open(left), File::open(right));
        Ok(Self {
            left: left_file.map_err(|e| DirDiffError::at(left, e, IoContext::Read))?,
            right: right_file.map_err(|e| DirDiffError::at(right, e, IoContext::Read))?,
            left_path: left.to_path_buf(),
            right_path: right.to_path_buf(),
            left_buf: vec![0u8; chunk_size],
            right_buf: vec![0u8; chunk_size],
            bytes_read: 0,
        })
    }

    /// Forward pass over every `stride`-th block, then the last block
    async fn compare_sampled(
        &mut self,
        size: u64,
        block_size: u64,
        stride: u64,
    ) -> Result<bool, DirDiffError> {
        let mut offset = 0u64;
        while offset < size {
            if !self.compare_range(offset, block_size).await? {
                return Ok(false);
            }
            offset = offset.saturating_add(stride);
        }

        // The tail is always checked, even when it overlaps a sampled block
        self.compare_range(size.saturating_sub(block_size), block_size)
            .await
    }

    /// Compare `len` bytes starting at `offset` on both sides
    ///
    /// Stops early and counts as equal once either side reaches end of file.
    async fn compare_range(&mut self, offset: u64, len: u64) -> Result<bool, DirDiffError> {
        self.seek(offset).await?;

        let chunk_size = self.left_buf.len() as u64;
        let mut remaining = len;
        while remaining > 0 {
            let want = remaining.min(chunk_size) as usize;
            let (left_read, right_read) = tokio::join!(
                read_full(&mut self.left, &mut self.left_buf[..want]),
                read_full(&mut self.right, &mut self.right_buf[..want]),
            );
            let left_read =
                left_read.map_err(|e| DirDiffError::at(&self.left_path, e, IoContext::Read))?;
            let right_read =
                right_read.map_err(|e| DirDiffError::at(&self.right_path, e, IoContext::Read))?;

            if left_read == 0 || right_read == 0 {
                break;
            }
            self.bytes_read += left_read.min(right_read) as u64;

            // Sizes matched when listed; a length change means the file changed under us
            if left_read != right_read {
                return Ok(false);
            }
            if !bytes_equal(&self.left_buf, &self.right_buf, left_read) {
                return Ok(false);
            }
            remaining -= left_read as u64;
        }

        Ok(true)
    }

    async fn seek(&mut self, offset: u64) -> Result<(), DirDiffError> {
        let (left, right) = tokio::join!(
            self.left.seek(SeekFrom::Start(offset)),
            self.right.seek(SeekFrom::Start(offset)),
        );
        left.map_err(|e| DirDiffError::at(&self.left_path, e, IoContext::Read))?;
        right.map_err(|e| DirDiffError::at(&self.right_path, e, IoContext::Read))?;
        Ok(())
    }
}

/// Read until `buf` is full or the file ends; returns the byte count
async fn read_full(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
