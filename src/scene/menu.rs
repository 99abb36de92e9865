//! Title and pause screens

use super::{Scene, SceneId};
use crate::assets::{AssetProvider, Frame};
use crate::error::Result;
use crate::sim::TickInput;

/// Title screen: Enter starts, Q quits
#[derive(Debug, Default)]
pub struct StartScene {
    loaded: bool,
}

impl StartScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for StartScene {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn first_load(&mut self, _assets: &mut dyn AssetProvider) -> Result<()> {
        self.loaded = true;
        Ok(())
    }

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn update(&mut self, input: &TickInput) -> SceneId {
        if input.quit {
            return SceneId::Exit;
        }
        if input.confirm {
            return SceneId::Game;
        }
        SceneId::Start
    }

    fn draw(&self, frame: &mut Frame) {
        frame.clear = [255, 0, 0, 255];
        frame.text.push("Press enter to start".to_string());
    }
}

/// Pause screen: Enter resumes, Q quits
#[derive(Debug, Default)]
pub struct PauseScene {
    loaded: bool,
}

impl PauseScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for PauseScene {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn first_load(&mut self, _assets: &mut dyn AssetProvider) -> Result<()> {
        self.loaded = true;
        Ok(())
    }

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn update(&mut self, input: &TickInput) -> SceneId {
        if input.quit {
            return SceneId::Exit;
        }
        if input.confirm {
            return SceneId::Game;
        }
        SceneId::Pause
    }

    fn draw(&self, frame: &mut Frame) {
        frame.clear = [0, 0, 0, 255];
        frame.text.push("Paused - press enter to resume".to_string());
    }
}
