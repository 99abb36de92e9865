//! Axis-separated collision against static colliders
//!
//! Entities are tile-sized boxes anchored at their truncated position. After
//! moving along one axis, every overlapping collider pushes the entity back
//! out along that axis, in the direction opposite its velocity.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::Sprite;
use crate::consts::TILE_SIZE;

/// Integer axis-aligned rectangle, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: IVec2::new(x0.min(x1), y0.min(y1)),
            max: IVec2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Tile-sized box at a world position (truncated toward zero)
    pub fn tile_at(pos: Vec2) -> Self {
        let x = pos.x as i32;
        let y = pos.y as i32;
        Self::new(x, y, x + TILE_SIZE, y + TILE_SIZE)
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Non-empty intersection. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Strictly inside, excluding all four edges
    pub fn contains_strict(&self, point: IVec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

/// Push a sprite out of colliders along X after a horizontal move
///
/// Zero horizontal velocity leaves an overlapping sprite where it is.
pub fn resolve_horizontal(sprite: &mut Sprite, colliders: &[Rect]) {
    for collider in colliders {
        if !collider.overlaps(&Rect::tile_at(sprite.pos)) {
            continue;
        }
        if sprite.vel.x > 0.0 {
            sprite.pos.x = (collider.min.x - TILE_SIZE) as f32;
        } else if sprite.vel.x < 0.0 {
            sprite.pos.x = collider.max.x as f32;
        }
    }
}

/// Push a sprite out of colliders along Y after a vertical move
pub fn resolve_vertical(sprite: &mut Sprite, colliders: &[Rect]) {
    for collider in colliders {
        if !collider.overlaps(&Rect::tile_at(sprite.pos)) {
            continue;
        }
        if sprite.vel.y > 0.0 {
            sprite.pos.y = (collider.min.y - TILE_SIZE) as f32;
        } else if sprite.vel.y < 0.0 {
            sprite.pos.y = collider.max.y as f32;
        }
    }
}

/// Apply the sprite's velocity one axis at a time, resolving after each
pub fn move_and_resolve(sprite: &mut Sprite, colliders: &[Rect]) {
    sprite.pos.x += sprite.vel.x;
    resolve_horizontal(sprite, colliders);

    sprite.pos.y += sprite.vel.y;
    resolve_vertical(sprite, colliders);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(x: f32, y: f32, dx: f32, dy: f32) -> Sprite {
        let mut s = Sprite::new(Vec2::new(x, y));
        s.vel = Vec2::new(dx, dy);
        s
    }

    #[test]
    fn test_overlap_excludes_touching_edges() {
        let a = Rect::new(0, 0, 16, 16);
        assert!(!a.overlaps(&Rect::new(16, 0, 32, 16)));
        assert!(a.overlaps(&Rect::new(15, 15, 32, 32)));
        assert!(!a.overlaps(&Rect::new(4, 4, 4, 10)));
    }

    #[test]
    fn test_moving_right_clamps_to_near_edge() {
        let colliders = [Rect::new(20, 20, 36, 36)];
        let mut s = sprite(6.0, 20.0, 2.0, 0.0);
        resolve_horizontal(&mut s, &colliders);
        assert_eq!(s.pos.x, 4.0);
    }

    #[test]
    fn test_moving_left_clamps_to_far_edge() {
        let colliders = [Rect::new(20, 20, 36, 36)];
        let mut s = sprite(34.0, 22.0, -2.0, 0.0);
        resolve_horizontal(&mut s, &colliders);
        assert_eq!(s.pos.x, 36.0);
    }

    #[test]
    fn test_vertical_both_directions() {
        let colliders = [Rect::new(20, 20, 36, 36)];
        let mut down = sprite(20.0, 10.0, 0.0, 1.0);
        resolve_vertical(&mut down, &colliders);
        assert_eq!(down.pos.y, 4.0);

        let mut up = sprite(20.0, 30.0, 0.0, -1.0);
        resolve_vertical(&mut up, &colliders);
        assert_eq!(up.pos.y, 36.0);
    }

    #[test]
    fn test_stationary_overlap_not_ejected() {
        let colliders = [Rect::new(20, 20, 36, 36)];
        let mut s = sprite(22.0, 22.0, 0.0, 0.0);
        resolve_horizontal(&mut s, &colliders);
        resolve_vertical(&mut s, &colliders);
        assert_eq!(s.pos, Vec2::new(22.0, 22.0));
    }

    #[test]
    fn test_last_collider_wins() {
        let wall = Rect::new(20, 0, 30, 16);
        let post = Rect::new(0, 0, 8, 16);

        // The wall pushes the sprite into the post, which pushes again
        let mut s = sprite(10.0, 0.0, 1.0, 0.0);
        resolve_horizontal(&mut s, &[wall, post]);
        assert_eq!(s.pos.x, -16.0);

        // The post is checked first while not yet overlapping
        let mut s = sprite(10.0, 0.0, 1.0, 0.0);
        resolve_horizontal(&mut s, &[post, wall]);
        assert_eq!(s.pos.x, 4.0);
    }

    #[test]
    fn test_move_and_resolve_x_then_y() {
        let colliders = [Rect::new(20, 20, 36, 36)];
        let mut s = sprite(3.0, 3.0, 2.0, 2.0);
        move_and_resolve(&mut s, &colliders);
        assert_eq!(s.pos, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_contains_strict() {
        let r = Rect::new(0, 0, 16, 16);
        assert!(r.contains_strict(IVec2::new(8, 8)));
        assert!(!r.contains_strict(IVec2::new(0, 8)));
        assert!(!r.contains_strict(IVec2::new(8, 16)));
    }
}
