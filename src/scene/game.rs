//! The play scene
//!
//! Loads the map, tilesets and entity images once, then runs the simulation
//! tick and turns the resulting state into draw requests.

use std::path::Path;

use glam::Vec2;

use super::{Scene, SceneId};
use crate::assets::{AssetProvider, Frame, ImageHandle, TileMap, Tileset};
use crate::consts::*;
use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{GameState, Rect, SpriteSheet, TickInput, tick};

/// Resources acquired on first load and held for the session
#[derive(Debug)]
struct Level {
    map: TileMap,
    tilesets: Vec<Tileset>,
    player_sheet: SpriteSheet,
}

#[derive(Debug)]
pub struct GameScene {
    settings: Settings,
    loaded: bool,
    level: Option<Level>,
    state: Option<GameState>,
}

impl GameScene {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            loaded: false,
            level: None,
            state: None,
        }
    }

    /// Scene with a ready-made state and no map, counted as loaded
    pub fn with_state(settings: Settings, state: GameState) -> Self {
        Self {
            settings,
            loaded: true,
            level: None,
            state: Some(state),
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    fn load_image(&self, assets: &mut dyn AssetProvider, name: &str) -> Result<ImageHandle> {
        let path = self.settings.asset_root.join("images").join(name);
        Ok(assets.load_image(&path)?.handle)
    }

    fn draw_tiles(&self, level: &Level, frame: &mut Frame) {
        for layer in level.map.tile_layers() {
            for (col, row, gid) in layer.tiles() {
                let tile = level
                    .map
                    .tileset_index(gid)
                    .and_then(|index| level.tilesets[index].img(gid, index));
                let tile = match tile {
                    Ok(tile) => tile,
                    Err(e) => {
                        log::error!("Skipping tile at ({}, {}): {}", col, row, e);
                        continue;
                    }
                };
                // Tiles are anchored at their bottom edge, one row up
                let pos = Vec2::new(
                    (col as i32 * TILE_SIZE) as f32,
                    (row as i32 * TILE_SIZE - (tile.size.y as i32 + TILE_SIZE)) as f32,
                );
                frame.draw(tile.image, pos, tile.src);
            }
        }
    }
}

impl Scene for GameScene {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn first_load(&mut self, assets: &mut dyn AssetProvider) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        let player_image = self.load_image(assets, "cat1.png")?;
        let enemy_image = self.load_image(assets, "skeleton.png")?;
        let potion_image = self.load_image(assets, "potion.png")?;

        let map_path = self.settings.map_path.clone();
        let mut map = TileMap::load(assets, &map_path)?;
        let map_dir = map_path.parent().unwrap_or(Path::new(""));
        let tilesets = map.gen_tilesets(assets, map_dir, &self.settings.asset_root)?;

        let world_size = map.world_size().unwrap_or_else(|| {
            log::warn!("Map has no tile layer, using default world size");
            GameState::default_world_size()
        });

        let mut state = GameState::spawn(world_size)?;
        state.player.sprite.image = Some(player_image);
        for enemy in &mut state.enemies {
            enemy.sprite.image = Some(enemy_image);
        }
        for potion in &mut state.potions {
            potion.sprite.image = Some(potion_image);
        }

        log::info!(
            "Game scene loaded: {} tilesets, world {}x{}",
            tilesets.len(),
            world_size.x,
            world_size.y
        );

        self.level = Some(Level {
            map,
            tilesets,
            player_sheet: SpriteSheet::new(PLAYER_SHEET_COLUMNS, PLAYER_SHEET_ROWS, TILE_SIZE),
        });
        self.state = Some(state);
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
            return SceneId::Pause;
        }

        if let Some(state) = self.state.as_mut() {
            tick(state, input, &self.settings);
        }
        SceneId::Game
    }

    fn draw(&self, frame: &mut Frame) {
        frame.clear = [120, 180, 255, 255];
        let Some(state) = self.state.as_ref() else {
            return;
        };
        frame.camera = state.camera.offset;

        if let Some(level) = &self.level {
            self.draw_tiles(level, frame);
        }

        let player = &state.player;
        if let Some(image) = player.sprite.image {
            let src = self
                .level
                .as_ref()
                .map(|level| level.player_sheet.rect(player.frame()));
            frame.draw(image, player.sprite.pos, src);
        }

        let first_tile = Some(Rect::new(0, 0, TILE_SIZE, TILE_SIZE));
        for sprite in state
            .enemies
            .iter()
            .map(|e| &e.sprite)
            .chain(state.potions.iter().map(|p| &p.sprite))
        {
            if let Some(image) = sprite.image {
                frame.draw(image, sprite.pos, first_tile);
            }
        }

        frame.outlines.extend_from_slice(&state.colliders);
    }
}
