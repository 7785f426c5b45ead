//! Test data and temporary file helpers shared by tests and benchmarks

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test data generation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDataPattern {
    /// All zeros - highly compressible
    Zeros,
    /// Repeated English text - typical compressible input
    Text,
    /// Pseudo random bytes - incompressible
    Random,
    /// Alternating runs of zeros and counter bytes
    Mixed,
}

impl TestDataPattern {
    /// Every pattern, for parameterized tests and benchmark groups
    pub const ALL: [Self; 4] = [Self::Zeros, Self::Text, Self::Random, Self::Mixed];

    /// Short label used in benchmark ids
    pub fn label(self) -> &'static str {
        match self {
            Self::Zeros => "zeros",
            Self::Text => "text",
            Self::Random => "random",
            Self::Mixed => "mixed",
        }
    }
}

/// Generate `size` bytes following `pattern`
///
/// Output is deterministic so benchmark runs stay comparable.
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Text => {
            const TEXT: &[u8] = b"The quick brown fox jumps over the lazy dog. ";
            TEXT.iter().copied().cycle().take(size).collect()
        }
        TestDataPattern::Random => {
            // xorshift64
            let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
            (0..size)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (state >> 24) as u8
                })
                .collect()
        }
        TestDataPattern::Mixed => (0..size)
            .map(|i| if i % 512 < 256 { 0 } else { (i % 251) as u8 })
            .collect(),
    }
}

/// Write `data` to `name` inside `temp_dir`
pub fn create_test_file(temp_dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let file_path = temp_dir.path().join(name);
    fs::write(&file_path, data).expect("Failed to write test file");
    file_path
}

/// Common input sizes for benchmarks
pub struct CommonFileSizes;

impl CommonFileSizes {
    /// 1 KiB
    pub const TINY: usize = 1024;
    /// 64 KiB
    pub const MEDIUM: usize = 64 * 1024;
    /// 1 MiB
    pub const LARGE: usize = 1024 * 1024;

    /// Sizes used by the codec benchmarks
    pub fn all() -> Vec<(&'static str, usize)> {
        vec![
            ("1KB", Self::TINY),
            ("64KB", Self::MEDIUM),
            ("1MB", Self::LARGE),
        ]
    }
}
