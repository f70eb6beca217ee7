#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Probabilistic spawning system that emits asteroid spawn commands.
//!
//! The difficulty scaler expresses spawn pressure in asteroids per second;
//! this system converts it to a per-tick probability using an explicit tick
//! rate, so the conversion stays correct under any simulation cadence.

use asteroid_attack_core::{Command, GameState, SpriteId, POPULATION_CAP};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    ticks_per_second: f32,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided tick cadence and seed.
    #[must_use]
    pub const fn new(ticks_per_second: f32, rng_seed: u64) -> Self {
        Self {
            ticks_per_second,
            rng_seed,
        }
    }
}

/// Pure system that emits spawn commands while a run is in progress.
#[derive(Debug)]
pub struct Spawning {
    ticks_per_second: f32,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            ticks_per_second: config.ticks_per_second,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Rolls this tick's spawn attempt and emits at most one spawn command.
    ///
    /// The world enforces the population cap a second time when applying, so
    /// a stale population reading never overfills the field.
    pub fn handle(
        &mut self,
        game_state: GameState,
        spawn_rate: f32,
        population: usize,
        out: &mut Vec<Command>,
    ) {
        if game_state != GameState::Playing {
            return;
        }
        if self.ticks_per_second <= 0.0 || population >= POPULATION_CAP {
            return;
        }

        let probability = f64::from((spawn_rate / self.ticks_per_second).clamp(0.0, 1.0));
        if probability <= 0.0 {
            return;
        }

        if self.rng.gen_bool(probability) {
            out.push(Command::SpawnAsteroid {
                sprite: self.next_sprite(),
            });
        }
    }

    fn next_sprite(&mut self) -> SpriteId {
        SpriteId::ALL[self.rng.gen_range(0..SpriteId::ALL.len())]
    }
}
