//! Dummy Cat headless runner
//!
//! Loads settings and assets from disk and drives the scene controller with
//! a scripted input sequence, logging what happens each tick.
//!
//! Usage: dummy-cat [--ticks N] [--settings PATH]

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use glam::Vec2;

use dummy_cat::assets::{Frame, FsAssets, Renderer};
use dummy_cat::sim::{ScriptedInput, TickInput};
use dummy_cat::{SceneController, Settings};

struct Config {
    ticks: u64,
    settings: PathBuf,
}

fn parse_args() -> Result<Config> {
    let mut config = Config {
        ticks: 600,
        settings: PathBuf::from(Settings::FILE_NAME),
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" => {
                let v = args.next().ok_or_else(|| anyhow!("missing value for --ticks"))?;
                config.ticks = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            "--settings" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --settings"))?;
                config.settings = PathBuf::from(v);
            }
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(config)
}

/// Renderer that only traces frame contents
#[derive(Default)]
struct TraceRenderer {
    frames: u64,
}

impl Renderer for TraceRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        log::debug!(
            "frame {}: camera ({}, {}), {} sprites, {} outlines",
            self.frames,
            frame.camera.x,
            frame.camera.y,
            frame.sprites.len(),
            frame.outlines.len()
        );
    }
}

/// Start the game, walk right, wait for the skeletons, swing, walk back, quit
fn demo_script() -> ScriptedInput {
    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    let right = TickInput {
        right: true,
        ..Default::default()
    };
    let left = TickInput {
        left: true,
        ..Default::default()
    };
    let swing = TickInput {
        pointer: Vec2::new(38.0, 38.0),
        clicked: true,
        ..Default::default()
    };
    let quit = TickInput {
        quit: true,
        ..Default::default()
    };

    ScriptedInput::default()
        .then(confirm)
        .hold(right, 60)
        .hold(TickInput::default(), 120)
        .hold(swing, 3)
        .hold(left, 60)
        .hold(TickInput::default(), 300)
        .then(quit)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;
    let settings = Settings::load(&config.settings)
        .with_context(|| format!("loading {}", config.settings.display()))?;

    log::info!("Dummy Cat starting ({} ticks max)", config.ticks);
    let mut controller = SceneController::with_default_scenes(settings, Box::new(FsAssets::new()))
        .context("initializing scenes")?;

    let mut input = demo_script();
    let mut renderer = TraceRenderer::default();
    let ticks = controller
        .run(&mut input, &mut renderer, config.ticks)
        .context("running game loop")?;

    log::info!(
        "Stopped after {} ticks in {:?} ({} frames presented)",
        ticks,
        controller.active(),
        renderer.frames
    );
    Ok(())
}
