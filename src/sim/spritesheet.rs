//! Uniform sprite sheet frame lookup

use super::collision::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Frames per row
    pub width: usize,
    /// Rows
    pub height: usize,
    pub tile_size: i32,
}

impl SpriteSheet {
    pub fn new(width: usize, height: usize, tile_size: i32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    /// Source rectangle of a frame, row-major
    pub fn rect(&self, frame: usize) -> Rect {
        let x = (frame % self.width) as i32 * self.tile_size;
        let y = (frame / self.width) as i32 * self.tile_size;
        Rect::new(x, y, x + self.tile_size, y + self.tile_size)
    }

    pub fn frame_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_row_major() {
        let sheet = SpriteSheet::new(14, 8, 16);
        assert_eq!(sheet.rect(0), Rect::new(0, 0, 16, 16));
        assert_eq!(sheet.rect(15), Rect::new(16, 16, 32, 32));
        assert_eq!(sheet.frame_count(), 112);
    }
}
