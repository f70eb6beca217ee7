#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Asteroid Attack simulation.
//!
//! A scripted pilot drives the run so the whole stack is exercised without a
//! windowing backend: input resolution, difficulty scaling, spawning, and the
//! world's per-tick simulation all run exactly as a graphical frontend would
//! drive them.

mod autopilot;
mod high_score;
mod levels;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use asteroid_attack_core::{Command, Event, GameState};
use asteroid_attack_rendering::{
    cues_for_events, shake_offset, AudioCue, HudState, Presenter, Scene, SceneSprite,
    SpriteInstance,
};
use asteroid_attack_system_difficulty::DifficultyScaler;
use asteroid_attack_system_player_control::PlayerControl;
use asteroid_attack_system_spawning::{Config as SpawnConfig, Spawning};
use asteroid_attack_world::{apply, query, World};

use autopilot::Autopilot;
use levels::LevelTable;

/// Simulation rate the fixed timestep is derived from.
const TICKS_PER_SECOND: f32 = 60.0;
/// Fixed timestep advanced per simulation tick.
const TICK_DT: Duration = Duration::from_micros(16_667);
/// Seed applied when the command line supplies none.
const DEFAULT_RUN_SEED: u64 = 0x4153_5445_524f_4944;
/// Salt separating the spawner's RNG stream from the world's.
const SPAWN_SEED_SALT: u64 = 0x5350_4157;
/// Salt separating the shake RNG stream from the world's.
const SHAKE_SEED_SALT: u64 = 0x5348_414b;

/// Command-line arguments for the headless runner.
#[derive(Debug, Parser)]
#[command(name = "asteroid-attack", about = "Headless Asteroid Attack runner")]
struct Args {
    /// Level to start the run on.
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Seed for every random stream in the run; omit for the built-in seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of simulation ticks before the run is cut short.
    #[arg(long, default_value_t = 3_600)]
    ticks: u64,

    /// Optional TOML file overriding the built-in level table.
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Location of the persisted high score.
    #[arg(long, default_value = "high_score.txt")]
    high_score: PathBuf,

    /// Present every simulated frame on stdout.
    #[arg(long)]
    verbose: bool,
}

/// Presenter that narrates frames as single stdout lines.
#[derive(Debug, Default)]
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        println!(
            "score {:>4}  lives {}  best {:>4}  sprites {:>2}  shake ({:+.1}, {:+.1})",
            scene.hud.score,
            scene.hud.lives,
            scene.hud.high_score,
            scene.sprites.len(),
            scene.shake.x,
            scene.shake.y,
        );
        Ok(())
    }
}

/// Projects the world's current state into a presentable scene.
fn build_scene(world: &World, high_score: u32, shake: glam::Vec2) -> Scene {
    let mut sprites = Vec::new();
    sprites.push(SpriteInstance {
        sprite: SceneSprite::Player,
        position: query::player(world).pos,
    });
    let projectile = query::projectile(world);
    if projectile.active {
        sprites.push(SpriteInstance {
            sprite: SceneSprite::Projectile,
            position: projectile.pos,
        });
    }
    for asteroid in query::asteroid_view(world).iter() {
        sprites.push(SpriteInstance {
            sprite: SceneSprite::Asteroid(asteroid.sprite),
            position: asteroid.pos,
        });
    }

    Scene {
        sprites,
        hud: HudState {
            score: query::score(world),
            lives: query::lives(world),
            high_score,
        },
        shake,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = match &args.levels {
        Some(path) => LevelTable::from_toml_path(path)?,
        None => LevelTable::default(),
    };
    let config = table
        .config(args.level)
        .with_context(|| format!("level {} is not defined", args.level))?;

    let seed = args.seed.unwrap_or(DEFAULT_RUN_SEED);
    let mut world = World::with_seed(seed);
    let control = PlayerControl::new();
    let mut scaler = DifficultyScaler::default();
    let mut spawning = Spawning::new(SpawnConfig::new(
        TICKS_PER_SECOND,
        seed ^ SPAWN_SEED_SALT,
    ));
    let mut shake_rng = ChaCha8Rng::seed_from_u64(seed ^ SHAKE_SEED_SALT);
    let pilot = Autopilot::default();
    let mut presenter = ConsolePresenter::default();

    println!("{}", query::welcome_banner(&world));

    let stored_high_score = high_score::load(&args.high_score);

    let mut events = Vec::new();
    let mut commands = Vec::new();
    apply(&mut world, Command::StartLevel { config }, &mut events);

    let mut final_score = 0;
    let mut music_on = true;
    for _ in 0..args.ticks {
        let input = pilot.next_input(&world);
        if input.mute {
            // Music never reaches the simulation; the adapter owns it.
            music_on = !music_on;
            if args.verbose {
                let state = if music_on { "on" } else { "off" };
                println!("cue: {:?} ({state})", AudioCue::MusicToggle);
            }
        }
        control.handle(&input, query::game_state(&world), &mut commands);
        scaler.handle(&events, query::score(&world), &mut commands);
        spawning.handle(
            query::game_state(&world),
            scaler.spawn_rate(),
            query::population(&world),
            &mut commands,
        );
        events.clear();

        for command in commands.drain(..) {
            apply(&mut world, command, &mut events);
        }
        apply(&mut world, Command::Tick { dt: TICK_DT }, &mut events);

        if args.verbose {
            for cue in cues_for_events(&events) {
                println!("cue: {cue:?}");
            }
            let shake = shake_offset(query::shake_ticks(&world), &mut shake_rng);
            let scene = build_scene(&world, stored_high_score.max(query::score(&world)), shake);
            presenter.present(&scene)?;
        }

        let run_ended = events
            .iter()
            .any(|event| matches!(event, Event::RunEnded { .. }));
        if run_ended {
            final_score = query::score(&world);
            break;
        }
        final_score = query::score(&world);
    }

    if query::game_state(&world) == GameState::GameOver {
        println!("run over: score {final_score}");
    } else {
        println!("tick limit reached: score {final_score}");
    }

    if final_score > stored_high_score {
        println!("new high score: {final_score} (was {stored_high_score})");
        if let Err(error) = high_score::save(&args.high_score, final_score) {
            // A failed write costs only persistence; the run itself is done.
            eprintln!("warning: {error}");
        }
    } else {
        println!("high score stands at {stored_high_score}");
    }

    Ok(())
}
