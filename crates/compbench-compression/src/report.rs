//! Benchmark report formatting
//!
//! Builds a registry-ordered table from a [`ResultSet`] and renders it as
//! aligned text. The same rows back the JSON output of the CLI.

use crate::benchmarks::ResultSet;
use crate::registry::Registry;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::Serialize;

const UNIT: u64 = 1024;
const PREFIXES: &[u8] = b"KMGTPE";
const COLUMN_PADDING: usize = 3;
const HEADERS: [&str; 5] = ["Algorithm", "Compressed", "Ratio", "Saved", "Time"];

/// Format a byte count with binary prefixes (`0 B`, `1.5 KiB`, `1.0 MiB`)
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!(
        "{:.1} {}iB",
        bytes as f64 / div as f64,
        PREFIXES[exp] as char
    )
}

/// Like [`format_size`], keeping a leading `-` for negative counts
pub fn format_signed_size(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", format_size(bytes.unsigned_abs()))
    } else {
        format_size(bytes.unsigned_abs())
    }
}

/// `original - compressed` as a percentage of `original`; 0 for empty input
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        0.0
    } else {
        (original as f64 - compressed as f64) / original as f64 * 100.0
    }
}

/// One tested algorithm in the report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReportRow {
    /// Algorithm identifier
    pub algorithm: String,
    /// Display name
    pub display_name: String,
    /// Compressed size in bytes
    pub compressed_size: u64,
    /// Compressed size as a percentage of the original
    pub compression_ratio: f64,
    /// Bytes saved; negative when the output grew
    pub saved_bytes: i64,
    /// Bytes saved as a percentage of the original
    pub saved_percent: f64,
    /// Compression time in milliseconds
    pub elapsed_ms: f64,
}

impl ReportRow {
    fn cells(&self) -> [String; 5] {
        [
            self.display_name.clone(),
            format_size(self.compressed_size),
            format!("{:.1}%", self.compression_ratio),
            format!(
                "{} ({:.1}%)",
                format_signed_size(self.saved_bytes),
                self.saved_percent
            ),
            format!("{:.1} ms", self.elapsed_ms),
        ]
    }
}

/// Registry algorithm without a codec on this platform
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UnsupportedEntry {
    /// Algorithm identifier
    pub algorithm: String,
    /// Display name
    pub display_name: String,
}

/// Comparison report for one input file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// Input file name (without directories)
    pub file_name: String,
    /// Input size in bytes
    pub original_size: u64,
    /// Tested algorithms, in registry order
    pub rows: Vec<ReportRow>,
    /// Algorithms without a codec on this platform, in registry order
    pub unsupported: Vec<UnsupportedEntry>,
}

impl Report {
    /// Build the report rows from a result set
    pub fn build(
        file_name: impl Into<String>,
        original_size: u64,
        results: &ResultSet,
        registry: &Registry,
    ) -> Self {
        let rows = results
            .ordered(registry)
            .map(|(descriptor, result)| ReportRow {
                algorithm: descriptor.id.to_string(),
                display_name: descriptor.display_name.to_string(),
                compressed_size: result.compressed_size,
                compression_ratio: result.compression_ratio,
                saved_bytes: original_size as i64 - result.compressed_size as i64,
                saved_percent: savings_percent(original_size, result.compressed_size),
                elapsed_ms: result.elapsed_ms(),
            })
            .collect();

        let unsupported = registry
            .unsupported()
            .map(|d| UnsupportedEntry {
                algorithm: d.id.to_string(),
                display_name: d.display_name.to_string(),
            })
            .collect();

        Self {
            file_name: file_name.into(),
            original_size,
            rows,
            unsupported,
        }
    }

    /// Title line naming the file and its size
    pub fn render_title(&self) -> String {
        format!(
            "Compression comparison - file: {} (original size: {})",
            self.file_name,
            format_size(self.original_size)
        )
    }

    /// Header, separator and one aligned line per row
    pub fn render_table(&self) -> String {
        let header = HEADERS.map(str::to_string);
        let body: Vec<[String; 5]> = self.rows.iter().map(ReportRow::cells).collect();

        let mut widths = HEADERS.map(str::len);
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let separator = widths.map(|w| "-".repeat(w));

        let mut out = String::new();
        for cells in std::iter::once(&header)
            .chain(std::iter::once(&separator))
            .chain(&body)
        {
            let mut line = String::new();
            for (cell, width) in cells.iter().zip(widths) {
                let pad = width - cell.chars().count() + COLUMN_PADDING;
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Section listing algorithms without a codec on this platform
    pub fn render_unsupported(&self) -> String {
        let mut out = String::from("Unsupported algorithms:\n");
        for entry in &self.unsupported {
            let _ = writeln!(out, "  - {} ({})", entry.algorithm, entry.display_name);
        }
        out
    }

    /// Full text report
    pub fn render(&self, show_unsupported: bool) -> String {
        let mut out = format!("{}\n{}", self.render_title(), self.render_table());
        if show_unsupported {
            out.push('\n');
            out.push_str(&self.render_unsupported());
        }
        out
    }
}
