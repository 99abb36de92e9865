//! Error types
//!
//! Load-time failures abort scene initialization; lookup failures are
//! returned to the caller instead of terminating the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::scene::SceneId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("asset error: {0}")]
    Asset(String),
    #[error("tile id {0} is not covered by any tileset")]
    UnknownTile(u32),
    #[error("tileset range starting at {firstgid} overflows with {tile_count} tiles")]
    TileRangeOverflow { firstgid: u32, tile_count: u32 },
    #[error("tile id {gid} has no image in tileset {tileset}")]
    TileOutOfRange { gid: u32, tileset: usize },
    #[error("animation frame range {first}..={last} is empty")]
    InvalidFrameRange { first: usize, last: usize },
    #[error("composite animation needs at least one step")]
    EmptyAnimation,
    #[error("scene {0:?} is not registered")]
    MissingScene(SceneId),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
