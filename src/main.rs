//! Tiltmaze main entry point.
//!
//! A 2D marble maze game core written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D math
//!
//! A grid-described level is compiled into entities, a gravity vector
//! derived from a pointer or tilt sample steers the ball, and contacts
//! with special tiles drive score and level completion. Rendering and raw
//! input acquisition belong to a host; this binary runs the simulation
//! headless at a fixed tick rate and prints a machine-readable report.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (safe defaults if absent), apply CLI overrides
//! 2. Build the ECS world, resources and observers
//! 3. Run level setup (parse, validate, spawn entities and player)
//! 4. Tick: sequences, spin, gravity, movement, walls, contact detection
//! 5. Stop on game over or after the tick budget, print the run report
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --pointer 864,96
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use serde::Serialize;
use std::path::PathBuf;

use tiltmaze::events::contact::observe_contact_begin;
use tiltmaze::events::gamestate::{observe_game_over, observe_score_changed};
use tiltmaze::events::sequence::observe_sequence_signal;
use tiltmaze::game;
use tiltmaze::resources::gameconfig::{GameConfig, GravitySource};
use tiltmaze::resources::gamestate::{GamePhase, GameplayState};
use tiltmaze::resources::gravity::Gravity;
use tiltmaze::resources::input::InputState;
use tiltmaze::resources::levelstore::LevelStore;
use tiltmaze::resources::worldtime::WorldTime;
use tiltmaze::systems::contact::{ContactTracker, contact_detector};
use tiltmaze::systems::gravity::gravity_controller;
use tiltmaze::systems::movement::{movement_system, resolve_wall_collisions};
use tiltmaze::systems::sequence::advance_sequences;
use tiltmaze::systems::spin::spin_system;
use tiltmaze::systems::time::update_world_time;

/// Tiltmaze, headless
#[derive(Parser)]
#[command(version, about = "Tilt-driven marble maze game core, run headless")]
struct Cli {
    /// Level file to load instead of the embedded demo level.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Input strategy override: pointer or tilt.
    #[arg(long, value_name = "SOURCE")]
    source: Option<String>,

    /// Constant pointer sample driving the run, as "x,y" world units.
    #[arg(long, value_name = "X,Y")]
    pointer: Option<String>,

    /// Constant tilt sample driving the run, as "ax,ay".
    #[arg(long, value_name = "AX,AY")]
    tilt: Option<String>,

    /// Tick budget before the run stops on its own.
    #[arg(long, default_value_t = 3600)]
    ticks: u32,

    /// Configuration file path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Machine-readable summary printed when the run ends.
#[derive(Serialize)]
struct RunReport {
    level: String,
    ticks: u32,
    elapsed: f32,
    score: i32,
    phase: GamePhase,
    game_over: bool,
}

fn parse_vec2(value: &str) -> Result<Vec2, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected 'x,y', got '{value}'"));
    }
    let x = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad x component in '{value}': {e}"))?;
    let y = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad y component in '{value}': {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path.clone()),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    if let Some(source) = cli.source.as_deref() {
        config.gravity_source = match GravitySource::parse(source) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
    }

    let mut store = LevelStore::new();
    if let Some(path) = &cli.level {
        match store.load_file(path) {
            Ok(key) => config.level_name = key,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    let pointer = cli.pointer.as_deref().map(parse_vec2).transpose();
    let tilt = cli.tilt.as_deref().map(parse_vec2).transpose();
    let (pointer, tilt) = match (pointer, tilt) {
        (Ok(pointer), Ok(tilt)) => (pointer, tilt),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let tick_rate = config.tick_rate.max(1);
    let dt = 1.0 / tick_rate as f32;
    let level_name = config.level_name.clone();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(GameplayState::new());
    world.insert_resource(Gravity::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ContactTracker::default());
    world.insert_resource(store);
    world.insert_resource(config);

    world.spawn(Observer::new(observe_contact_begin));
    world.spawn(Observer::new(observe_sequence_signal));
    world.spawn(Observer::new(observe_score_changed));
    world.spawn(Observer::new(observe_game_over));
    // Ensure observers are registered before any system can trigger events.
    world.flush();

    // --------------- Level setup ---------------
    let mut startup = Schedule::default();
    startup.add_systems(game::setup);
    startup.run(&mut world);

    // --------------- Tick schedule ---------------
    // Sequences and spin advance first, then the new gravity sample is
    // applied and integrated; contact begins are delivered at the end of
    // the tick, before the next gravity update.
    let mut update = Schedule::default();
    update.add_systems(
        (
            advance_sequences,
            spin_system,
            gravity_controller,
            movement_system,
            resolve_wall_collisions,
            contact_detector,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    let mut ticks_run = 0u32;
    for _ in 0..cli.ticks {
        {
            let mut input = world.resource_mut::<InputState>();
            if let Some(pointer) = pointer {
                input.set_pointer(pointer);
            }
            if let Some(tilt) = tilt {
                input.set_tilt(tilt);
            }
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        ticks_run += 1;

        if world.resource::<GameplayState>().is_game_over() {
            break;
        }
    }

    // --------------- Run report ---------------
    let state = world.resource::<GameplayState>();
    let report = RunReport {
        level: level_name,
        ticks: ticks_run,
        elapsed: world.resource::<WorldTime>().elapsed,
        score: state.score(),
        phase: state.phase(),
        game_over: state.is_game_over(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("Failed to serialize run report")
    );
}
