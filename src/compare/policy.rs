//! Size tiers for content comparison

/// Sampling unit: 16 MiB
pub const DEFAULT_BLOCK_SIZE: u64 = 16 * 1024 * 1024;

/// Read granularity inside a block: 4 KiB per side
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024;

/// Block and chunk sizes driving tier selection and sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    /// Size of one sampled block in bytes
    pub block_size: u64,

    /// Size of each paired read inside a block
    pub chunk_size: usize,

    /// Read every byte regardless of file size
    pub force_full: bool,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            force_full: false,
        }
    }
}

impl SamplingPolicy {
    /// Policy with a custom block size and the default chunk size
    pub fn with_block_size(block_size: u64) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    pub fn force_full(mut self, enabled: bool) -> Self {
        self.force_full = enabled;
        self
    }

    /// Tier used for a file pair of `size` bytes under this policy
    pub fn tier_for(&self, size: u64) -> Tier {
        if self.force_full {
            return Tier::Full;
        }
        Tier::for_size(size, self.block_size)
    }
}

/// Comparison strategy chosen from the file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Read and compare everything
    Full,

    /// Compare one block, skip `skip_ratio` blocks, repeat; then the tail block
    Sampled { skip_ratio: u64 },
}

impl Tier {
    /// Pick the tier for `size` bytes measured in `block_size` units
    ///
    /// | size                         | tier        |
    /// |------------------------------|-------------|
    /// | `<= 1 block`                 | full        |
    /// | `<= 64 blocks`               | skip 3      |
    /// | `<= 256 blocks`              | skip 7      |
    /// | larger                       | skip 15     |
    pub fn for_size(size: u64, block_size: u64) -> Tier {
        if size <= block_size {
            Tier::Full
        } else if size <= block_size.saturating_mul(64) {
            Tier::Sampled { skip_ratio: 3 }
        } else if size <= block_size.saturating_mul(256) {
            Tier::Sampled { skip_ratio: 7 }
        } else {
            Tier::Sampled { skip_ratio: 15 }
        }
    }

    /// Blocks skipped between two sampled blocks (0 for full compare)
    pub fn skip_ratio(&self) -> u64 {
        match self {
            Tier::Full => 0,
            Tier::Sampled { skip_ratio } => *skip_ratio,
        }
    }

    /// Distance between the starts of two consecutively sampled blocks
    pub fn stride(&self, block_size: u64) -> u64 {
        block_size.saturating_mul(self.skip_ratio() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: u64 = DEFAULT_BLOCK_SIZE;

    #[test]
    fn test_exactly_one_block_is_full() {
        assert_eq!(Tier::for_size(BLOCK, BLOCK), Tier::Full);
    }

    #[test]
    fn test_one_byte_over_block_samples_with_skip_3() {
        assert_eq!(Tier::for_size(BLOCK + 1, BLOCK), Tier::Sampled { skip_ratio: 3 });
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_size(0, BLOCK), Tier::Full);
        assert_eq!(Tier::for_size(64 * BLOCK, BLOCK).skip_ratio(), 3);
        assert_eq!(Tier::for_size(64 * BLOCK + 1, BLOCK).skip_ratio(), 7);
        assert_eq!(Tier::for_size(100 * BLOCK, BLOCK).skip_ratio(), 7);
        assert_eq!(Tier::for_size(256 * BLOCK, BLOCK).skip_ratio(), 7);
        assert_eq!(Tier::for_size(256 * BLOCK + 1, BLOCK).skip_ratio(), 15);
        assert_eq!(Tier::for_size(u64::MAX, BLOCK).skip_ratio(), 15);
    }

    #[test]
    fn test_stride() {
        assert_eq!(Tier::Full.stride(10), 10);
        assert_eq!(Tier::Sampled { skip_ratio: 3 }.stride(10), 40);
        assert_eq!(Tier::Sampled { skip_ratio: 15 }.stride(BLOCK), 16 * BLOCK);
    }

    #[test]
    fn test_force_full_overrides_size() {
        let policy = SamplingPolicy::default().force_full(true);
        assert_eq!(policy.tier_for(1000 * BLOCK), Tier::Full);
        assert!(SamplingPolicy::default().tier_for(1000 * BLOCK) != Tier::Full);
    }

    #[test]
    fn test_custom_block_size() {
        let policy = SamplingPolicy::with_block_size(64);
        assert_eq!(policy.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(policy.tier_for(64), Tier::Full);
        assert_eq!(policy.tier_for(65), Tier::Sampled { skip_ratio: 3 });
    }
}
