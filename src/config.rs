use std::fmt;

use serde::{Deserialize, Serialize};

// ── MapConfig ────────────────────────────────────────────────────────────────

/// Geometry of one tiled map.
///
/// All five values are fixed properties of a specific map; there are no
/// built-in defaults. Maps of different sizes coexist by constructing one
/// converter per config.
///
/// Derives serde both ways so map geometry can live in data files next to
/// the tile assets it describes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Total number of block rows spanning the full map.
    pub rows: u32,
    /// Total number of block columns spanning the full map.
    pub cols: u32,
    /// Block rows between the map origin and the row of the grid's
    /// top-left visible block.
    pub top_offset_rows: u32,
    /// Block columns between the map origin and the column of the grid's
    /// top-left visible block.
    pub left_offset_cols: u32,
    /// Edge length of one block in world-coordinate units.
    pub block_size: f64,
}

impl MapConfig {
    /// Checks that the config describes a usable map.
    ///
    /// `block_size` must be finite and positive, and both offsets must fall
    /// strictly inside the declared grid extent. The offset checks also
    /// reject zero-row / zero-column grids, since `0 >= 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.block_size.is_finite() || self.block_size <= 0.0 {
            return Err(ConfigError::BlockSize(self.block_size));
        }
        if self.top_offset_rows >= self.rows {
            return Err(ConfigError::RowOffsetOutOfRange {
                top_offset_rows: self.top_offset_rows,
                rows: self.rows,
            });
        }
        if self.left_offset_cols >= self.cols {
            return Err(ConfigError::ColOffsetOutOfRange {
                left_offset_cols: self.left_offset_cols,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

// ── ConfigError ──────────────────────────────────────────────────────────────

/// Why a [`MapConfig`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Block size was non-finite, zero, or negative.
    BlockSize(f64),
    /// Top offset places the grid's first row at or past the map extent.
    RowOffsetOutOfRange { top_offset_rows: u32, rows: u32 },
    /// Left offset places the grid's first column at or past the map extent.
    ColOffsetOutOfRange { left_offset_cols: u32, cols: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlockSize(size) => {
                write!(f, "block size must be finite and positive, got {}", size)
            }
            ConfigError::RowOffsetOutOfRange { top_offset_rows, rows } => {
                write!(
                    f,
                    "top offset {} outside map extent of {} rows",
                    top_offset_rows, rows
                )
            }
            ConfigError::ColOffsetOutOfRange { left_offset_cols, cols } => {
                write!(
                    f,
                    "left offset {} outside map extent of {} columns",
                    left_offset_cols, cols
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ── Tests ──────────────────────────────────────────────────────────────────────
