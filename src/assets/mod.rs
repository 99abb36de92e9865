//! Asset and rendering contracts
//!
//! The simulation never decodes images or touches the screen. It asks an
//! `AssetProvider` for opaque image handles and text files, and hands a
//! `Frame` of draw requests to a `Renderer`.

pub mod tilemap;
pub mod tileset;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use glam::{UVec2, Vec2};

use crate::error::{Error, Result};
use crate::sim::collision::Rect;

pub use tilemap::{TileLayer, TileMap, TilesetRange, TilesetRef};
pub use tileset::{TileImage, Tileset};

/// Opaque reference to a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// A loaded image and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub handle: ImageHandle,
    pub size: UVec2,
}

/// Source of images and data files
pub trait AssetProvider {
    /// Load an image. Missing or undecodable files are an error.
    fn load_image(&mut self, path: &Path) -> Result<ImageInfo>;

    /// Read a text file (maps, tilesets)
    fn read_text(&mut self, path: &Path) -> Result<String>;
}

/// One image blit in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest {
    pub image: ImageHandle,
    pub pos: Vec2,
    /// Sub-rectangle of the image to draw, whole image when `None`
    pub src: Option<Rect>,
}

/// Everything a scene wants on screen for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Translation from world to screen space
    pub camera: Vec2,
    pub clear: [u8; 4],
    pub sprites: Vec<DrawRequest>,
    /// Debug outlines, world space
    pub outlines: Vec<Rect>,
    pub text: Vec<String>,
}

impl Frame {
    pub fn draw(&mut self, image: ImageHandle, pos: Vec2, src: Option<Rect>) {
        self.sprites.push(DrawRequest { image, pos, src });
    }
}

/// Consumer of finished frames
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}

/// Headless provider backed by the filesystem
///
/// Images are not decoded; only PNG headers are read for their size.
#[derive(Debug, Default)]
pub struct FsAssets {
    images: HashMap<PathBuf, ImageInfo>,
    next_handle: u32,
}

impl FsAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Width and height from the IHDR chunk of a PNG header
fn png_size(header: &[u8; 24]) -> Option<UVec2> {
    if header[..8] != PNG_SIGNATURE || &header[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([header[16], header[17], header[18], header[19]]);
    let height = u32::from_be_bytes([header[20], header[21], header[22], header[23]]);
    Some(UVec2::new(width, height))
}

impl AssetProvider for FsAssets {
    fn load_image(&mut self, path: &Path) -> Result<ImageInfo> {
        if let Some(info) = self.images.get(path) {
            return Ok(*info);
        }
        let mut header = [0u8; 24];
        File::open(path)
            .and_then(|mut f| f.read_exact(&mut header))
            .map_err(|e| Error::io(path, e))?;
        let size = png_size(&header)
            .ok_or_else(|| Error::Asset(format!("{} is not a png image", path.display())))?;

        let info = ImageInfo {
            handle: ImageHandle(self.next_handle),
            size,
        };
        self.next_handle += 1;
        log::info!("Loaded image {} ({}x{})", path.display(), size.x, size.y);
        self.images.insert(path.to_path_buf(), info);
        Ok(info)
    }

    fn read_text(&mut self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

/// In-memory provider for tests and tools
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    files: HashMap<PathBuf, String>,
    images: HashMap<PathBuf, UVec2>,
    handles: HashMap<PathBuf, ImageHandle>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.images.insert(path.into(), UVec2::new(width, height));
        self
    }
}

impl AssetProvider for MemoryAssets {
    fn load_image(&mut self, path: &Path) -> Result<ImageInfo> {
        let size = *self
            .images
            .get(path)
            .ok_or_else(|| Error::Asset(format!("missing image {}", path.display())))?;
        let next = self.handles.len() as u32;
        let handle = *self
            .handles
            .entry(path.to_path_buf())
            .or_insert(ImageHandle(next));
        Ok(ImageInfo { handle, size })
    }

    fn read_text(&mut self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory store"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_size() {
        let mut header = [0u8; 24];
        header[..8].copy_from_slice(&PNG_SIGNATURE);
        header[12..16].copy_from_slice(b"IHDR");
        header[16..20].copy_from_slice(&224u32.to_be_bytes());
        header[20..24].copy_from_slice(&128u32.to_be_bytes());
        assert_eq!(png_size(&header), Some(UVec2::new(224, 128)));

        header[1] = b'X';
        assert_eq!(png_size(&header), None);
    }

    #[test]
    fn test_fs_assets_missing_file() {
        let mut assets = FsAssets::new();
        let err = assets
            .load_image(Path::new("definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_memory_assets_stable_handles() {
        let mut assets = MemoryAssets::new()
            .with_image("a.png", 16, 16)
            .with_image("b.png", 32, 16);
        let a = assets.load_image(Path::new("a.png")).unwrap();
        let b = assets.load_image(Path::new("b.png")).unwrap();
        assert_ne!(a.handle, b.handle);
        assert_eq!(assets.load_image(Path::new("a.png")).unwrap(), a);
        assert!(assets.load_image(Path::new("c.png")).is_err());
    }
}
