//! Scene registry and transition rules
//!
//! The controller owns every scene for the whole session. Once per tick it
//! updates the active scene and applies the id it returns:
//! - `Exit`: exit hook on the active scene, then stop
//! - a different id: first-load the target if needed, enter it, exit the
//!   old scene, then switch

use std::collections::HashMap;

use super::{GameScene, PauseScene, Scene, SceneId, StartScene};
use crate::assets::{AssetProvider, Frame, Renderer};
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::sim::{InputSource, TickInput};

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct SceneController {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    active: SceneId,
    assets: Box<dyn AssetProvider>,
}

impl SceneController {
    /// Build from registered scenes and first-load the starting one
    pub fn new(
        scenes: HashMap<SceneId, Box<dyn Scene>>,
        start: SceneId,
        assets: Box<dyn AssetProvider>,
    ) -> Result<Self> {
        let mut controller = Self {
            scenes,
            active: start,
            assets,
        };
        controller.ensure_loaded(start)?;
        Ok(controller)
    }

    /// The standard start/game/pause table, starting at the title screen
    pub fn with_default_scenes(settings: Settings, assets: Box<dyn AssetProvider>) -> Result<Self> {
        let mut scenes: HashMap<SceneId, Box<dyn Scene>> = HashMap::new();
        scenes.insert(SceneId::Start, Box::new(StartScene::new()));
        scenes.insert(SceneId::Game, Box::new(GameScene::new(settings)));
        scenes.insert(SceneId::Pause, Box::new(PauseScene::new()));
        Self::new(scenes, SceneId::Start, assets)
    }

    pub fn active(&self) -> SceneId {
        self.active
    }

    fn scene_mut(&mut self, id: SceneId) -> Result<&mut Box<dyn Scene>> {
        self.scenes.get_mut(&id).ok_or(Error::MissingScene(id))
    }

    fn ensure_loaded(&mut self, id: SceneId) -> Result<()> {
        let scene = self.scenes.get_mut(&id).ok_or(Error::MissingScene(id))?;
        if !scene.is_loaded() {
            log::info!("First load of {:?}", id);
            scene.first_load(self.assets.as_mut())?;
        }
        Ok(())
    }

    /// Run one tick of the active scene and apply its transition
    pub fn update(&mut self, input: &TickInput) -> Result<Flow> {
        let current = self.active;
        let next = self.scene_mut(current)?.update(input);

        if next == SceneId::Exit {
            self.scene_mut(current)?.on_exit();
            log::info!("Exit requested from {:?}", current);
            return Ok(Flow::Exit);
        }

        if next != current {
            self.ensure_loaded(next)?;
            self.scene_mut(next)?.on_enter();
            self.scene_mut(current)?.on_exit();
            log::info!("Scene {:?} -> {:?}", current, next);
        }
        self.active = next;
        Ok(Flow::Continue)
    }

    /// Collect the active scene's draw requests and hand them off
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let mut frame = Frame::default();
        if let Some(scene) = self.scenes.get(&self.active) {
            scene.draw(&mut frame);
        }
        renderer.present(&frame);
    }

    /// Drive update and draw until exit or `max_ticks`; returns ticks run
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        max_ticks: u64,
    ) -> Result<u64> {
        let mut ticks = 0;
        while ticks < max_ticks {
            let snapshot = input.poll();
            ticks += 1;
            if self.update(&snapshot)? == Flow::Exit {
                break;
            }
            self.draw(renderer);
        }
        Ok(ticks)
    }
}
