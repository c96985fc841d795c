//! clickrelay main entry point.
//!
//! Runs a scene headless: loads a JSON scene description, replays its
//! scripted clicks frame by frame and logs every broadcast and arrival.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and the scene file
//! 2. Spawn the viewer, transmitters and antennas
//! 3. For each frame: sample the scripted button, pick, tick antennas
//! 4. Log the final position of every labelled entity
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene assets/scenes/demo.json --frames 300
//! ```

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use clickrelay::components::antenna::Antenna;
use clickrelay::components::label::Label;
use clickrelay::components::worldposition::WorldPosition;
use clickrelay::events::antenna::observe_antenna_arrival;
use clickrelay::resources::gameconfig::GameConfig;
use clickrelay::scene::{Scene, SceneDescription};

/// Click-to-broadcast scene runner
#[derive(Parser)]
#[command(version, about = "Replays scripted clicks against a transmitter/antenna scene.")]
struct Cli {
    /// Scene description file.
    #[arg(long, value_name = "PATH", default_value = "assets/scenes/demo.json")]
    scene: PathBuf,

    /// INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate, overriding the config.
    #[arg(long)]
    frames: Option<u64>,

    /// Frame delta in seconds, overriding the config.
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    let frames = cli.frames.unwrap_or(config.frames);
    let dt = cli.dt.unwrap_or(config.fixed_delta);

    let description = match SceneDescription::load_from_file(&cli.scene) {
        Ok(description) => description,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut scene = Scene::new(config);
    scene.world_mut().add_observer(observe_antenna_arrival);
    scene.world_mut().flush();
    scene.spawn_description(&description);

    info!(
        "Running {} frames at dt={}s with {} scripted clicks",
        frames,
        dt,
        description.clicks.len()
    );
    scene.run_script(&description.clicks, frames, dt);

    let world = scene.world_mut();
    let mut query = world.query::<(&Label, &WorldPosition, Option<&Antenna>)>();
    for (label, position, antenna) in query.iter(world) {
        match antenna {
            Some(antenna) => info!(
                "{}: {} ({:?}, {:.2}s elapsed)",
                label.name(),
                position.pos,
                antenna.state(),
                antenna.elapsed()
            ),
            None => info!("{}: {}", label.name(), position.pos),
        }
    }
}
