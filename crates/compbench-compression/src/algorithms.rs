//! Codec adapters
//!
//! Every external compressor is normalized to one call shape:
//! `(bytes, level hint) -> compressed bytes`. The codec family is a closed
//! enum resolved once when the registry is built, so dispatch is a match on
//! the variant rather than on an identifier string.

use crate::registry::AlgorithmDescriptor;
use compbench_types::{Error, LevelHint, Result};
use std::io::{Read, Write};

/// Accepted level bounds of a tunable codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    /// Lowest accepted level
    pub min: u32,
    /// Highest accepted level
    pub max: u32,
    /// Level used when the hint asks for the codec default
    pub default: u32,
}

impl LevelRange {
    /// Create a new level range
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    /// Turn a hint into a concrete level; out-of-range hints are clamped
    pub fn resolve(self, hint: LevelHint) -> u32 {
        if hint.is_default() {
            self.default
        } else {
            (hint.get() as u32).clamp(self.min, self.max)
        }
    }
}

/// Levels accepted by the flate2 encoders (gzip, zlib, deflate)
pub const FLATE_LEVELS: LevelRange = LevelRange::new(0, 9, 6);
/// Brotli quality range
pub const BROTLI_LEVELS: LevelRange = LevelRange::new(0, 11, 6);
/// Zstandard level range (0 selects the library default)
pub const ZSTD_LEVELS: LevelRange = LevelRange::new(0, 22, 3);

/// Brotli window size (log2)
const BROTLI_LGWIN: u32 = 22;
const BROTLI_BUFFER_SIZE: usize = 4096;
const LZW_LITERAL_WIDTH: u8 = 8;

/// LZO family members known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LzoVariant {
    /// LZO1
    Lzo1,
    /// LZO1A
    Lzo1a,
    /// LZO1B
    Lzo1b,
    /// LZO1C
    Lzo1c,
    /// LZO1F
    Lzo1f,
    /// LZO1X
    Lzo1x,
}

/// Codec family with its codec-specific configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// gzip container (RFC 1952) via flate2
    Gzip(LevelRange),
    /// zlib container (RFC 1950) via flate2
    Zlib(LevelRange),
    /// Raw deflate stream (RFC 1951) via flate2
    Deflate(LevelRange),
    /// Brotli stream
    Brotli(LevelRange),
    /// Zstandard frame
    Zstd(LevelRange),
    /// LZ4 frame format; no tunable level
    Lz4,
    /// Snappy raw block format; no tunable level
    Snappy,
    /// LZW with LSB bit order and 8-bit literals; no tunable level
    Lzw,
    /// LZO family; no encoder is linked
    Lzo(LzoVariant),
}

impl Codec {
    /// Short codec family name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gzip(_) => "gzip",
            Self::Zlib(_) => "zlib",
            Self::Deflate(_) => "deflate",
            Self::Brotli(_) => "brotli",
            Self::Zstd(_) => "zstd",
            Self::Lz4 => "lz4",
            Self::Snappy => "snappy",
            Self::Lzw => "lzw",
            Self::Lzo(_) => "lzo",
        }
    }

    /// Level bounds, if the codec honors a level
    pub fn level_range(&self) -> Option<LevelRange> {
        match self {
            Self::Gzip(range)
            | Self::Zlib(range)
            | Self::Deflate(range)
            | Self::Brotli(range)
            | Self::Zstd(range) => Some(*range),
            Self::Lz4 | Self::Snappy | Self::Lzw | Self::Lzo(_) => None,
        }
    }

    /// Check if the codec honors the level hint
    pub fn supports_level(&self) -> bool {
        self.level_range().is_some()
    }

    /// Check if an encoder for this codec is linked into the binary
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Lzo(_))
    }

    /// Compress `data`; fixed codecs ignore `hint`
    pub fn compress(&self, data: &[u8], hint: LevelHint) -> Result<Vec<u8>> {
        match self {
            Self::Gzip(range) => {
                let level = flate2::Compression::new(range.resolve(hint));
                let mut encoder = flate2::write::GzEncoder::new(Vec::new(), level);
                encoder.write_all(data).map_err(|e| self.error(e))?;
                encoder.finish().map_err(|e| self.error(e))
            }
            Self::Zlib(range) => {
                let level = flate2::Compression::new(range.resolve(hint));
                let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), level);
                encoder.write_all(data).map_err(|e| self.error(e))?;
                encoder.finish().map_err(|e| self.error(e))
            }
            Self::Deflate(range) => {
                let level = flate2::Compression::new(range.resolve(hint));
                let mut encoder = flate2::write::DeflateEncoder::new(Vec::new(), level);
                encoder.write_all(data).map_err(|e| self.error(e))?;
                encoder.finish().map_err(|e| self.error(e))
            }
            Self::Brotli(range) => {
                let quality = range.resolve(hint);
                let mut compressed = Vec::new();
                let mut compressor = brotli::CompressorWriter::new(
                    &mut compressed,
                    BROTLI_BUFFER_SIZE,
                    quality,
                    BROTLI_LGWIN,
                );
                compressor.write_all(data).map_err(|e| self.error(e))?;
                compressor.flush().map_err(|e| self.error(e))?;
                // Dropping the writer finishes the stream.
                drop(compressor);
                Ok(compressed)
            }
            Self::Zstd(range) => {
                zstd::bulk::compress(data, range.resolve(hint) as i32).map_err(|e| self.error(e))
            }
            Self::Lz4 => {
                let mut encoder = lz4_flex::frame::FrameEncoder::new(Vec::new());
                encoder.write_all(data).map_err(|e| self.error(e))?;
                encoder.finish().map_err(|e| self.error(e))
            }
            Self::Snappy => snap::raw::Encoder::new()
                .compress_vec(data)
                .map_err(|e| self.error(e)),
            Self::Lzw => weezl::encode::Encoder::new(weezl::BitOrder::Lsb, LZW_LITERAL_WIDTH)
                .encode(data)
                .map_err(|e| self.error(e)),
            Self::Lzo(variant) => Err(Error::unsupported(format!("{:?}", variant).to_lowercase())),
        }
    }

    /// Decompress data produced by [`Codec::compress`]
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decompressed = Vec::new();
        match self {
            Self::Gzip(_) => {
                flate2::read::GzDecoder::new(data)
                    .read_to_end(&mut decompressed)
                    .map_err(|e| self.error(e))?;
            }
            Self::Zlib(_) => {
                flate2::read::ZlibDecoder::new(data)
                    .read_to_end(&mut decompressed)
                    .map_err(|e| self.error(e))?;
            }
            Self::Deflate(_) => {
                flate2::read::DeflateDecoder::new(data)
                    .read_to_end(&mut decompressed)
                    .map_err(|e| self.error(e))?;
            }
            Self::Brotli(_) => {
                brotli::Decompressor::new(data, BROTLI_BUFFER_SIZE)
                    .read_to_end(&mut decompressed)
                    .map_err(|e| self.error(e))?;
            }
            Self::Zstd(_) => {
                decompressed = zstd::stream::decode_all(data).map_err(|e| self.error(e))?;
            }
            Self::Lz4 => {
                lz4_flex::frame::FrameDecoder::new(data)
                    .read_to_end(&mut decompressed)
                    .map_err(|e| self.error(e))?;
            }
            Self::Snappy => {
                decompressed = snap::raw::Decoder::new()
                    .decompress_vec(data)
                    .map_err(|e| self.error(e))?;
            }
            Self::Lzw => {
                decompressed = weezl::decode::Decoder::new(weezl::BitOrder::Lsb, LZW_LITERAL_WIDTH)
                    .decode(data)
                    .map_err(|e| self.error(e))?;
            }
            Self::Lzo(variant) => {
                return Err(Error::unsupported(format!("{:?}", variant).to_lowercase()));
            }
        }
        Ok(decompressed)
    }

    fn error(&self, error: impl std::fmt::Display) -> Error {
        Error::codec(self.name(), error.to_string())
    }
}

/// Uniform compression entry point used by the benchmark runner
pub trait CodecAdapter {
    /// Compress `data` with the codec bound to `descriptor`
    fn compress(
        &self,
        descriptor: &AlgorithmDescriptor,
        data: &[u8],
        level: LevelHint,
    ) -> Result<Vec<u8>>;

    /// Decompress a payload produced by [`CodecAdapter::compress`]
    fn decompress(&self, descriptor: &AlgorithmDescriptor, data: &[u8]) -> Result<Vec<u8>>;
}

/// Adapter backed by the linked codec libraries
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodecs;

impl CodecAdapter for StandardCodecs {
    fn compress(
        &self,
        descriptor: &AlgorithmDescriptor,
        data: &[u8],
        level: LevelHint,
    ) -> Result<Vec<u8>> {
        if !descriptor.platform_supported {
            return Err(Error::unsupported(descriptor.id));
        }
        descriptor.codec.compress(data, level)
    }

    fn decompress(&self, descriptor: &AlgorithmDescriptor, data: &[u8]) -> Result<Vec<u8>> {
        if !descriptor.platform_supported {
            return Err(Error::unsupported(descriptor.id));
        }
        descriptor.codec.decompress(data)
    }
}
