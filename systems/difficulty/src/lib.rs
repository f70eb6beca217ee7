#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that converts elapsed play time and score into difficulty
//! parameters.
//!
//! The two pressure axes are deliberately independent: elapsed time drives
//! the spawn rate, score drives the fall speed, so each can be tuned without
//! touching the other.

use asteroid_attack_core::{Command, Event};

/// Tuning knobs controlling every adjustable aspect of difficulty scaling.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyTuning {
    /// Spawn rate at the start of a run, in asteroids per second.
    pub base_spawn_rate: f32,
    /// Spawn-rate growth per elapsed second; larger values escalate faster.
    pub spawn_scale_factor: f32,
    /// Hard ceiling on the spawn rate, preventing runaway spawning.
    pub spawn_rate_cap: f32,
    /// Fall speed at score zero, in units per tick.
    pub base_speed: f32,
    /// Fractional speed increase credited per score point.
    pub speed_scale_factor: f32,
    /// Lower clamp guarding against degenerate speeds if factors ever go
    /// negative.
    pub speed_floor: f32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            base_spawn_rate: 1.0,
            spawn_scale_factor: 0.05,
            spawn_rate_cap: 5.0,
            base_speed: 2.0,
            speed_scale_factor: 0.01,
            speed_floor: 2.0,
        }
    }
}

/// Difficulty scaler accumulating elapsed run time.
#[derive(Debug)]
pub struct DifficultyScaler {
    tuning: DifficultyTuning,
    elapsed: f32,
}

impl Default for DifficultyScaler {
    fn default() -> Self {
        Self::new(DifficultyTuning::default())
    }
}

impl DifficultyScaler {
    /// Creates a new scaler with the provided tuning surface.
    #[must_use]
    pub fn new(tuning: DifficultyTuning) -> Self {
        Self {
            tuning,
            elapsed: 0.0,
        }
    }

    /// Advances the elapsed-time accumulator. Monotonic for the life of a
    /// run; there is no upper bound.
    pub fn update(&mut self, dt: std::time::Duration) {
        self.elapsed += dt.as_secs_f32();
    }

    /// Clears the accumulator. Called once per new run, never mid-run.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds of play time accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current spawn rate in asteroids per second, capped by the tuning.
    #[must_use]
    pub fn spawn_rate(&self) -> f32 {
        let tuning = &self.tuning;
        (tuning.base_spawn_rate + self.elapsed * tuning.spawn_scale_factor)
            .min(tuning.spawn_rate_cap)
    }

    /// Current asteroid fall speed for the provided score, floored by the
    /// tuning.
    #[must_use]
    pub fn speed(&self, score: u32) -> f32 {
        let tuning = &self.tuning;
        (tuning.base_speed * (1.0 + score as f32 * tuning.speed_scale_factor))
            .max(tuning.speed_floor)
    }

    /// Consumes world events and emits the fall-speed refresh for the next
    /// tick, so stale speed never applies to an asteroid update.
    pub fn handle(&mut self, events: &[Event], score: u32, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::LevelStarted { .. } => self.reset(),
                Event::TimeAdvanced { dt } => self.update(*dt),
                _ => {}
            }
        }

        out.push(Command::SetFallSpeed {
            speed: self.speed(score),
        });
    }
}
