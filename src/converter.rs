use glam::{DVec2, IVec2};

use crate::config::{ConfigError, MapConfig};

// ── MapConverter ─────────────────────────────────────────────────────────────

/// Converts points between world space and block space for one map.
///
/// The two spaces disagree on both axes: the grid's horizontal axis runs
/// opposite to the world's, and the grid counts rows downward from the
/// map's top edge while the world's vertical axis increases upward. Both
/// directions are the same translation from a fixed per-axis anchor, with
/// the vertical origin flip shared between them:
///
/// ```text
/// anchor_x = (left_offset_cols + 1) * block_size
/// anchor_y = (top_offset_rows  + 1) * block_size
///
/// block_x = anchor_x - world_x
/// block_y = flip(anchor_y - world_y)      flip(y) = rows * block_size - y
/// ```
///
/// `flip` is its own inverse, so `tile_to_game` undoes `game_to_tile`
/// exactly (one subtraction per axis, no rounding steps).
///
/// Configuration is captured at construction and never changes; a converter
/// is bound to exactly one map. The struct is plain immutable data, safe to
/// copy around or share between threads.
#[derive(Copy, Clone, Debug)]
pub struct MapConverter {
    config: MapConfig,
}

impl MapConverter {
    /// Builds a converter for one map, rejecting unusable geometry.
    ///
    /// See [`MapConfig::validate`] for the exact rules.
    pub fn new(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The geometry this converter was built with.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// World-space point to block-space point.
    ///
    /// Input is not range-checked: points outside the visible grid are
    /// meaningful (interpolation targets, off-map markers) and map to
    /// block coordinates outside `[0, cols * block_size)` etc. Non-finite
    /// input yields non-finite output.
    pub fn game_to_tile(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(
            self.anchor_x() - x,
            self.flip_vertical(self.anchor_y() - y),
        )
    }

    /// Block-space point back to world space. Exact inverse of
    /// [`game_to_tile`](Self::game_to_tile).
    pub fn tile_to_game(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(
            self.anchor_x() - x,
            self.anchor_y() - self.flip_vertical(y),
        )
    }

    /// Full map extent in coordinate units: `(cols, rows) * block_size`.
    pub fn map_size(&self) -> DVec2 {
        DVec2::new(
            self.config.cols as f64 * self.config.block_size,
            self.config.rows as f64 * self.config.block_size,
        )
    }

    /// The whole-block address a block-space point falls in.
    ///
    /// This is the discrete index a tile renderer fetches by: block (0, 0)
    /// covers `[0, block_size)` on each axis. Points left of or above the
    /// grid get negative indices.
    pub fn block_index(&self, x: f64, y: f64) -> IVec2 {
        IVec2::new(
            (x / self.config.block_size).floor() as i32,
            (y / self.config.block_size).floor() as i32,
        )
    }

    // World-space x of the column anchor the grid mirrors around.
    fn anchor_x(&self) -> f64 {
        (self.config.left_offset_cols + 1) as f64 * self.config.block_size
    }

    // World-space y of the row anchor, before the origin flip.
    fn anchor_y(&self) -> f64 {
        (self.config.top_offset_rows + 1) as f64 * self.config.block_size
    }

    /// Reflects a vertical coordinate across the map's horizontal midline,
    /// moving the origin between the top and bottom edge. Self-inverse.
    fn flip_vertical(&self, y: f64) -> f64 {
        self.config.rows as f64 * self.config.block_size - y
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
