//! Byte-level buffer comparison

/// Compare the first `len` bytes of two buffers
///
/// Returns `false` on the first mismatching position, or when either
/// buffer holds fewer than `len` bytes.
///
/// # Example
/// ```
/// use dirdiff::compare::bytes_equal;
///
/// assert!(bytes_equal(b"abcX", b"abcY", 3));
/// assert!(!bytes_equal(b"abcX", b"abcY", 4));
/// ```
pub fn bytes_equal(left: &[u8], right: &[u8], len: usize) -> bool {
    if left.len() < len || right.len() < len {
        return false;
    }
    left[..len] == right[..len]
}
