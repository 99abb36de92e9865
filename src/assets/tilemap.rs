//! Tile map files exported by the map editor
//!
//! A map is a list of layers holding flat grids of global tile ids, plus
//! references to the tile sets that own each id range.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use super::AssetProvider;
use super::tileset::Tileset;
use crate::consts::TILE_SIZE;
use crate::error::{Error, Result};

/// One map layer. Only `tilelayer` layers carry tile data.
#[derive(Debug, Clone, Deserialize)]
pub struct TileLayer {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default)]
    pub width: usize,
    #[serde(default)]
    pub height: usize,
    #[serde(default)]
    pub name: String,
}

impl TileLayer {
    pub fn is_tile_layer(&self) -> bool {
        self.kind == "tilelayer"
    }

    /// Non-empty cells as (column, row, gid)
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .filter(|(_, gid)| **gid != 0)
            .map(move |(i, gid)| (i % width, i / width, *gid))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TilesetRef {
    pub firstgid: u32,
    pub source: String,
}

/// Half-open id range `[min, max)` owned by one tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileMap {
    pub layers: Vec<TileLayer>,
    #[serde(default)]
    pub tilesets: Vec<TilesetRef>,
    #[serde(skip)]
    ranges: Vec<TilesetRange>,
}

impl TileMap {
    pub fn from_json(path: &Path, contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| Error::json(path, e))
    }

    pub fn load(assets: &mut dyn AssetProvider, path: &Path) -> Result<Self> {
        let contents = assets.read_text(path)?;
        Self::from_json(path, &contents)
    }

    /// Load every referenced tileset and record the id range each one owns
    ///
    /// Tileset sources are resolved relative to `map_dir`.
    pub fn gen_tilesets(
        &mut self,
        assets: &mut dyn AssetProvider,
        map_dir: &Path,
        asset_root: &Path,
    ) -> Result<Vec<Tileset>> {
        let mut tilesets = Vec::with_capacity(self.tilesets.len());
        let mut ranges = Vec::with_capacity(self.tilesets.len());

        for reference in &self.tilesets {
            let path = map_dir.join(&reference.source);
            log::info!("Loading tileset {}", path.display());
            let tileset = Tileset::load(assets, &path, reference.firstgid, asset_root)?;
            let max = reference
                .firstgid
                .checked_add(tileset.tile_count())
                .ok_or(Error::TileRangeOverflow {
                    firstgid: reference.firstgid,
                    tile_count: tileset.tile_count(),
                })?;
            ranges.push(TilesetRange {
                min: reference.firstgid,
                max,
            });
            tilesets.push(tileset);
        }

        self.ranges = ranges;
        Ok(tilesets)
    }

    /// Index of the tileset owning a global tile id
    pub fn tileset_index(&self, gid: u32) -> Result<usize> {
        self.ranges
            .iter()
            .position(|r| gid >= r.min && gid < r.max)
            .ok_or(Error::UnknownTile(gid))
    }

    pub fn ranges(&self) -> &[TilesetRange] {
        &self.ranges
    }

    pub fn tile_layers(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter().filter(|l| l.is_tile_layer())
    }

    /// World size in pixels, taken from the first tile layer
    pub fn world_size(&self) -> Option<Vec2> {
        self.tile_layers().next().map(|layer| {
            Vec2::new(
                (layer.width as i32 * TILE_SIZE) as f32,
                (layer.height as i32 * TILE_SIZE) as f32,
            )
        })
    }
}
