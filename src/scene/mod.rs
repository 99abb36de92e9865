//! Scene state machine
//!
//! Each scene owns its own state and reports which scene should be active
//! after every update. The `SceneController` applies the transition.

pub mod controller;
pub mod game;
pub mod menu;

pub use controller::{Flow, SceneController};
pub use game::GameScene;
pub use menu::{PauseScene, StartScene};

use crate::assets::{AssetProvider, Frame};
use crate::error::Result;
use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Game,
    Pause,
    /// Terminates the loop; never registered
    Exit,
}

pub trait Scene {
    fn is_loaded(&self) -> bool;

    /// Heavy one-time initialization. Called at most once per session.
    fn first_load(&mut self, assets: &mut dyn AssetProvider) -> Result<()>;

    fn on_enter(&mut self);

    fn on_exit(&mut self);

    /// Advance one tick and name the scene that should be active next
    fn update(&mut self, input: &TickInput) -> SceneId;

    fn draw(&self, frame: &mut Frame);
}
