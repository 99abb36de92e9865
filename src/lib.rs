//! Dummy Cat - a small tile-based action game
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (movement, collision, combat, animation)
//! - `scene`: Scene state machine sequencing start, play and pause
//! - `assets`: Asset, tile map and renderer contracts
//! - `settings`: Runtime configuration

pub mod assets;
pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use scene::{SceneController, SceneId};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Side of a map tile and of every entity box, in pixels
    pub const TILE_SIZE: i32 = 16;

    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    /// World size in tiles when the map has no tile layer
    pub const DEFAULT_WORLD_TILES: (i32, i32) = (100, 20);

    /// Player sprite sheet layout (frames per row, rows)
    pub const PLAYER_SHEET_COLUMNS: usize = 14;
    pub const PLAYER_SHEET_ROWS: usize = 8;
}
