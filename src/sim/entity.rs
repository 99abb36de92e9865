//! Concrete entity kinds: player, enemy, potion

use std::collections::HashMap;

use glam::Vec2;

use super::animation::Animation;
use super::collision::Rect;
use super::combat::Combat;
use crate::assets::ImageHandle;
use crate::consts::TILE_SIZE;

/// Positional base shared by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// World position of the top-left corner
    pub pos: Vec2,
    /// Per-tick displacement, recomputed every tick
    pub vel: Vec2,
    /// Image to draw, opaque to the simulation
    pub image: Option<ImageHandle>,
}

impl Sprite {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// Tile-sized bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::tile_at(self.pos)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(TILE_SIZE as f32 / 2.0)
    }
}

/// Movement state used to pick the player's animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Rest,
    Left,
    Right,
}

impl PlayerState {
    /// Pick a state from velocity sign. Vertical motion has no states yet.
    pub fn from_velocity(dx: i32, _dy: i32) -> Self {
        if dx > 0 {
            PlayerState::Right
        } else if dx < 0 {
            PlayerState::Left
        } else {
            PlayerState::Rest
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
    pub combat: Combat,
    pub animations: HashMap<PlayerState, Animation>,
}

impl Player {
    pub fn state(&self) -> PlayerState {
        PlayerState::from_velocity(self.sprite.vel.x as i32, self.sprite.vel.y as i32)
    }

    /// Animation for the current movement state, if one is registered
    pub fn active_animation(&self) -> Option<&Animation> {
        self.animations.get(&self.state())
    }

    pub fn active_animation_mut(&mut self) -> Option<&mut Animation> {
        let state = self.state();
        self.animations.get_mut(&state)
    }

    /// Frame to draw this tick, 0 when no animation is registered
    pub fn frame(&self) -> usize {
        self.active_animation().map(Animation::frame).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub sprite: Sprite,
    /// Walks toward the player when set
    pub follows_player: bool,
    pub combat: Combat,
}

impl Enemy {
    /// Unit velocity toward `target` on each axis independently
    pub fn chase(&mut self, target: Vec2, speed: f32) {
        if !self.follows_player {
            return;
        }
        let pos = self.sprite.pos;
        if pos.x < target.x {
            self.sprite.vel.x = speed;
        } else if pos.x > target.x {
            self.sprite.vel.x = -speed;
        }
        if pos.y < target.y {
            self.sprite.vel.y = speed;
        } else if pos.y > target.y {
            self.sprite.vel.y = -speed;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Potion {
    pub sprite: Sprite,
    pub heal_amount: i32,
}

impl Potion {
    pub fn touches(&self, player: &Player) -> bool {
        self.sprite.bounds().overlaps(&player.sprite.bounds())
    }
}
