//! Algorithm registry
//!
//! A fixed, ordered catalog of benchmarkable algorithms. Registry order is
//! the canonical report order. The registry is built once per run and passed
//! by reference; it is never mutated afterwards.

use crate::algorithms::{
    Codec, CodecAdapter, LzoVariant, StandardCodecs, BROTLI_LEVELS, FLATE_LEVELS, ZSTD_LEVELS,
};
use compbench_types::{Error, LevelHint, Result};
use std::collections::HashMap;

/// Static description of one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    /// Unique lowercase identifier, as typed on the command line
    pub id: &'static str,
    /// Human readable name used in reports
    pub display_name: &'static str,
    /// File extension (with leading dot) used for derived output paths
    pub extension: String,
    /// Whether a codec is available on this platform
    pub platform_supported: bool,
    /// Codec binding
    pub codec: Codec,
}

impl AlgorithmDescriptor {
    /// Create a descriptor whose extension falls back to `.<id>`
    pub fn new(id: &'static str, display_name: &'static str, codec: Codec) -> Self {
        Self {
            id,
            display_name,
            extension: format!(".{}", id),
            platform_supported: codec.is_available(),
            codec,
        }
    }

    /// Override the file extension
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Check if the codec honors the level hint
    pub fn supports_level(&self) -> bool {
        self.codec.supports_level()
    }
}

/// Ordered, read-only algorithm catalog
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<AlgorithmDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry from descriptors, rejecting duplicate identifiers
    pub fn new(descriptors: Vec<AlgorithmDescriptor>) -> Result<Self> {
        let index = build_index(&descriptors);
        if index.len() != descriptors.len() {
            return Err(Error::config("duplicate algorithm identifier in registry"));
        }
        Ok(Self { descriptors, index })
    }

    /// The built-in catalog
    pub fn standard() -> Self {
        let descriptors = vec![
            AlgorithmDescriptor::new("gzip", "Gzip", Codec::Gzip(FLATE_LEVELS)).with_extension(".gz"),
            AlgorithmDescriptor::new("zlib", "Zlib", Codec::Zlib(FLATE_LEVELS)),
            AlgorithmDescriptor::new("deflate", "Deflate", Codec::Deflate(FLATE_LEVELS)),
            AlgorithmDescriptor::new("br", "Brotli", Codec::Brotli(BROTLI_LEVELS)),
            AlgorithmDescriptor::new("zstd", "Zstandard", Codec::Zstd(ZSTD_LEVELS))
                .with_extension(".zst"),
            AlgorithmDescriptor::new("lz4", "LZ4", Codec::Lz4),
            AlgorithmDescriptor::new("snappy", "Snappy", Codec::Snappy),
            AlgorithmDescriptor::new("lzw", "LZW", Codec::Lzw),
            lzo("lzo1", "LZO1", LzoVariant::Lzo1),
            lzo("lzo1a", "LZO1a", LzoVariant::Lzo1a),
            lzo("lzo1b", "LZO1b", LzoVariant::Lzo1b),
            lzo("lzo1c", "LZO1c", LzoVariant::Lzo1c),
            lzo("lzo1f", "LZO1f", LzoVariant::Lzo1f),
            lzo("lzo1x", "LZO1x", LzoVariant::Lzo1x),
        ];
        let index = build_index(&descriptors);
        Self { descriptors, index }
    }

    /// Find a descriptor by identifier
    pub fn lookup(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.index.get(id).map(|&i| &self.descriptors[i])
    }

    /// Registry position of an identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All descriptors in registry order
    pub fn descriptors(&self) -> &[AlgorithmDescriptor] {
        &self.descriptors
    }

    /// All identifiers in registry order
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.id).collect()
    }

    /// Identifiers with a codec on this platform, in registry order
    pub fn supported_identifiers(&self) -> Vec<&'static str> {
        self.descriptors
            .iter()
            .filter(|d| d.platform_supported)
            .map(|d| d.id)
            .collect()
    }

    /// Descriptors without a codec on this platform, in registry order
    pub fn unsupported(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.descriptors.iter().filter(|d| !d.platform_supported)
    }

    /// Number of registered algorithms
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Compress `data` with the algorithm registered as `id`
    pub fn compress(&self, id: &str, data: &[u8], level: LevelHint) -> Result<Vec<u8>> {
        let descriptor = self.lookup(id).ok_or_else(|| Error::unsupported(id))?;
        StandardCodecs.compress(descriptor, data, level)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

fn lzo(id: &'static str, display_name: &'static str, variant: LzoVariant) -> AlgorithmDescriptor {
    AlgorithmDescriptor::new(id, display_name, Codec::Lzo(variant)).with_extension(".lzo")
}

fn build_index(descriptors: &[AlgorithmDescriptor]) -> HashMap<&'static str, usize> {
    descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| (d.id, i))
        .collect()
}
