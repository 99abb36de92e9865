//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One `tick` per frame, no wall-clock time
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod entity;
pub mod events;
pub mod input;
pub mod roster;
pub mod spritesheet;
pub mod state;
pub mod tick;

pub use animation::{Animation, AnimationStep, ComposeAnimation, SharedAnimation, SingleAnimation};
pub use camera::Camera;
pub use collision::{Rect, move_and_resolve, resolve_horizontal, resolve_vertical};
pub use combat::{BasicCombat, Combat, EnemyCombat};
pub use entity::{Enemy, Player, PlayerState, Potion, Sprite};
pub use events::GameEvent;
pub use input::{InputSource, ScriptedInput, TickInput};
pub use spritesheet::SpriteSheet;
pub use state::GameState;
pub use tick::tick;
