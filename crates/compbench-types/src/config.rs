//! Configuration value types for compbench
//!
//! Small validated wrappers shared by the compression engine, the
//! configuration loader and the CLI.

/// Algorithm-agnostic compression effort hint
///
/// Negative values mean "use the codec default". Codecs with tunable levels
/// clamp the hint into their own range; fixed codecs ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelHint(i32);

impl LevelHint {
    /// Sentinel used for "codec default"
    pub const DEFAULT: i32 = -1;

    /// Create a new level hint
    pub fn new(level: i32) -> Self {
        Self(level)
    }

    /// Get the raw hint value
    pub fn get(self) -> i32 {
        self.0
    }

    /// Check if the hint asks for the codec default
    pub fn is_default(self) -> bool {
        self.0 < 0
    }
}

impl Default for LevelHint {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i32> for LevelHint {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

/// Diagnostic verbosity tier
///
/// `0` prints only the final report, `1` adds progress lines and `2` adds
/// per-algorithm size and timing lines. Never changes computed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Verbosity(u8);

impl Verbosity {
    /// Report only
    pub const QUIET: u8 = 0;
    /// Progress and info lines
    pub const INFO: u8 = 1;
    /// Per-algorithm debug lines
    pub const DEBUG: u8 = 2;

    /// Create a new verbosity with validation
    pub fn new(level: u8) -> Result<Self, String> {
        if level > Self::DEBUG {
            Err(format!(
                "Verbosity {} exceeds maximum {}",
                level,
                Self::DEBUG
            ))
        } else {
            Ok(Self(level))
        }
    }

    /// Get the verbosity value
    pub fn get(self) -> u8 {
        self.0
    }

    /// Log filter directive matching this verbosity
    pub fn filter_directive(self) -> &'static str {
        match self.0 {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
