//! Game state owned by the play scene
//!
//! Everything the tick mutates lives here: entities, colliders, the camera
//! and the events narrated during the last tick.

use glam::Vec2;

use super::camera::Camera;
use super::collision::Rect;
use super::entity::{Enemy, Player, Potion};
use super::events::GameEvent;
use super::roster;
use crate::consts::*;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    /// Live enemies in roster order
    pub enemies: Vec<Enemy>,
    pub potions: Vec<Potion>,
    /// Static rectangles nothing can walk through
    pub colliders: Vec<Rect>,
    pub camera: Camera,
    /// World size in pixels, bounds the camera
    pub world_size: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(
        player: Player,
        enemies: Vec<Enemy>,
        potions: Vec<Potion>,
        colliders: Vec<Rect>,
        world_size: Vec2,
    ) -> Self {
        Self {
            player,
            enemies,
            potions,
            colliders,
            camera: Camera::default(),
            world_size,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// The spawn map roster in a world of the given size
    pub fn spawn(world_size: Vec2) -> Result<Self> {
        Ok(Self::new(
            roster::player()?,
            roster::enemies(),
            roster::potions(),
            roster::colliders(),
            world_size,
        ))
    }

    /// World size used when no map layer says otherwise
    pub fn default_world_size() -> Vec2 {
        Vec2::new(
            (DEFAULT_WORLD_TILES.0 * TILE_SIZE) as f32,
            (DEFAULT_WORLD_TILES.1 * TILE_SIZE) as f32,
        )
    }

    pub fn player_dead(&self) -> bool {
        self.player.combat.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_uses_roster() {
        let state = GameState::spawn(GameState::default_world_size()).unwrap();
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(state.potions.len(), 1);
        assert_eq!(state.colliders.len(), 1);
        assert_eq!(state.world_size, Vec2::new(1600.0, 320.0));
        assert!(!state.player_dead());
    }

    #[test]
    fn test_clone_does_not_share_animation_state() {
        use crate::settings::Settings;
        use crate::sim::{TickInput, tick};

        let original = GameState::spawn(GameState::default_world_size()).unwrap();
        let mut copy = original.clone();
        for _ in 0..8 {
            tick(&mut copy, &TickInput::default(), &Settings::default());
        }
        assert_eq!(copy.player.frame(), 14);
        assert_eq!(original.player.frame(), 0);
    }
}
