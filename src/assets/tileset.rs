//! Tile sets: where the pixels for a global tile id come from
//!
//! Two shapes exist. Uniform sets slice one sheet into a grid; dynamic sets
//! keep one image per tile. The shape is picked from the file path.

use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::Deserialize;

use super::{AssetProvider, ImageHandle, ImageInfo};
use crate::consts::TILE_SIZE;
use crate::error::{Error, Result};
use crate::sim::collision::Rect;

#[derive(Debug, Deserialize)]
struct UniformTilesetJson {
    image: String,
    tilecount: u32,
    columns: u32,
}

#[derive(Debug, Deserialize)]
struct TileJson {
    image: String,
}

#[derive(Debug, Deserialize)]
struct DynamicTilesetJson {
    tiles: Vec<TileJson>,
    tilecount: u32,
}

/// Image region to draw for one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileImage {
    pub image: ImageHandle,
    /// Sub-rectangle of `image`, whole image when `None`
    pub src: Option<Rect>,
    /// Pixel size of the drawn region
    pub size: UVec2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tileset {
    Uniform {
        image: ImageInfo,
        first_gid: u32,
        tile_count: u32,
        columns: u32,
    },
    Dynamic {
        images: Vec<ImageInfo>,
        first_gid: u32,
        tile_count: u32,
    },
}

impl Tileset {
    /// Load a tileset file; paths containing "buildings" are per-tile image sets
    pub fn load(
        assets: &mut dyn AssetProvider,
        path: &Path,
        first_gid: u32,
        asset_root: &Path,
    ) -> Result<Self> {
        let contents = assets.read_text(path)?;

        if path.to_string_lossy().contains("buildings") {
            let json: DynamicTilesetJson =
                serde_json::from_str(&contents).map_err(|e| Error::json(path, e))?;
            let images = json
                .tiles
                .iter()
                .map(|tile| assets.load_image(&clean_path(&tile.image, asset_root)))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Tileset::Dynamic {
                images,
                first_gid,
                tile_count: json.tilecount,
            });
        }

        let json: UniformTilesetJson =
            serde_json::from_str(&contents).map_err(|e| Error::json(path, e))?;
        if json.columns == 0 {
            return Err(Error::Asset(format!(
                "tileset {} has zero columns",
                path.display()
            )));
        }
        let image_path = clean_path(&json.image, asset_root);
        log::info!("Loading tileset image {}", image_path.display());
        let image = assets.load_image(&image_path)?;
        Ok(Tileset::Uniform {
            image,
            first_gid,
            tile_count: json.tilecount,
            columns: json.columns,
        })
    }

    pub fn first_gid(&self) -> u32 {
        match self {
            Tileset::Uniform { first_gid, .. } | Tileset::Dynamic { first_gid, .. } => *first_gid,
        }
    }

    pub fn tile_count(&self) -> u32 {
        match self {
            Tileset::Uniform { tile_count, .. } | Tileset::Dynamic { tile_count, .. } => {
                *tile_count
            }
        }
    }

    /// Region to draw for a global tile id belonging to this set
    pub fn img(&self, gid: u32, index: usize) -> Result<TileImage> {
        let local = gid
            .checked_sub(self.first_gid())
            .ok_or(Error::TileOutOfRange { gid, tileset: index })?;
        match self {
            Tileset::Uniform { image, columns, .. } => {
                let x = (local % columns) as i32 * TILE_SIZE;
                let y = (local / columns) as i32 * TILE_SIZE;
                Ok(TileImage {
                    image: image.handle,
                    src: Some(Rect::new(x, y, x + TILE_SIZE, y + TILE_SIZE)),
                    size: UVec2::splat(TILE_SIZE as u32),
                })
            }
            Tileset::Dynamic { images, .. } => images
                .get(local as usize)
                .map(|info| TileImage {
                    image: info.handle,
                    src: None,
                    size: info.size,
                })
                .ok_or(Error::TileOutOfRange { gid, tileset: index }),
        }
    }
}

/// Normalize an image path written by the map editor and root it at `root`
///
/// Backslashes become slashes, `.`/`..` segments are folded, and up to two
/// leading `../` are dropped.
pub fn clean_path(raw: &str, root: &Path) -> PathBuf {
    let unified = raw.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();
    for part in unified.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(p) if *p != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            p => parts.push(p),
        }
    }
    let skip = parts.iter().take(2).take_while(|p| **p == "..").count();
    root.join(parts[skip..].join("/"))
}
