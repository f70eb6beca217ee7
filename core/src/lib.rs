#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Asteroid Attack engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Asteroid Attack.";

/// Width of the playfield in world units.
pub const SCREEN_WIDTH: f32 = 800.0;
/// Height of the playfield in world units.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Horizontal speed applied while the player steers, in units per tick.
pub const PLAYER_SPEED: f32 = 7.0;
/// Rightmost position the player's origin may occupy (screen width minus the
/// ship sprite width).
pub const PLAYER_MAX_X: f32 = 736.0;
/// Width of the player ship's bounding box.
pub const PLAYER_WIDTH: f32 = 64.0;
/// Height of the player ship's bounding box.
pub const PLAYER_HEIGHT: f32 = 64.0;

/// Upward speed of an active projectile, in units per tick.
pub const PROJECTILE_SPEED: f32 = 7.0;
/// Width of the projectile's bounding box.
pub const PROJECTILE_WIDTH: f32 = 16.0;
/// Height of the projectile's bounding box.
pub const PROJECTILE_HEIGHT: f32 = 32.0;

/// Width of an asteroid's bounding box.
pub const ASTEROID_WIDTH: f32 = 64.0;
/// Height of an asteroid's bounding box.
pub const ASTEROID_HEIGHT: f32 = 64.0;
/// Vertical line an asteroid must cross to count as a breach.
pub const BREACH_LINE_Y: f32 = 500.0;
/// Maximum number of asteroids alive at once.
pub const POPULATION_CAP: usize = 12;
/// Per-tick probability that a drifting asteroid locks onto the player.
pub const HOMING_CHANCE: f64 = 0.02;
/// Per-tick probability that an asteroid inverts its drift direction.
pub const DRIFT_FLIP_CHANCE: f64 = 0.01;
/// Lifetime cadence, in ticks, at which homing pursuit is forced to lapse.
pub const HOMING_PERIOD: u32 = 60;
/// Inclusive lower bound of the horizontal drift speed drawn at creation.
pub const DRIFT_SPEED_MIN: f32 = 0.5;
/// Exclusive upper bound of the horizontal drift speed drawn at creation.
pub const DRIFT_SPEED_MAX: f32 = 2.0;

/// Largest x coordinate used when (re)spawning an asteroid at the top band.
pub const SPAWN_BAND_MAX_X: f32 = 765.0;
/// Largest y coordinate used when (re)spawning an asteroid at the top band.
pub const SPAWN_BAND_MAX_Y: f32 = 50.0;

/// Number of lives granted at the start of every run.
pub const STARTING_LIVES: u32 = 3;
/// Number of ticks the screen-shake timer is armed with after a breach.
pub const SHAKE_TICKS: u32 = 30;

/// Describes which part of the experience is currently simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Main menu; no simulation runs.
    Menu,
    /// Active run; the full per-tick update path executes.
    Playing,
    /// Frozen run; entity state is retained but not simulated.
    Paused,
    /// Run ended; awaiting confirmation before returning to the menu.
    GameOver,
}

/// Horizontal steering request derived from sampled input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Steering {
    /// Move toward decreasing x.
    Left,
    /// Move toward increasing x.
    Right,
    /// Hold the current column.
    Hold,
}

/// Boolean input states sampled once per tick by the input source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Whether the move-left control is held.
    pub left: bool,
    /// Whether the move-right control is held.
    pub right: bool,
    /// Whether the fire control is held.
    pub fire: bool,
    /// Whether the pause toggle was pressed this tick.
    pub pause: bool,
    /// Whether the confirm/restart control was pressed this tick.
    pub confirm: bool,
    /// Whether the music-mute toggle was pressed this tick.
    pub mute: bool,
}

/// Unique identifier assigned to an asteroid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AsteroidId(u32);

impl AsteroidId {
    /// Creates a new asteroid identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Symbolic identity of the sprite an asteroid was assigned at creation.
///
/// The simulation only ever needs the chosen identity; resolving it to a
/// loaded texture is the presentation adapter's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// First asteroid appearance.
    Asteroid1,
    /// Second asteroid appearance.
    Asteroid2,
    /// Third asteroid appearance.
    Asteroid3,
}

impl SpriteId {
    /// All asteroid appearances available to the spawner.
    pub const ALL: [SpriteId; 3] = [Self::Asteroid1, Self::Asteroid2, Self::Asteroid3];
}

/// A 2D point owned exclusively by the entity it positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate in world units.
    pub x: f32,
    /// Vertical coordinate in world units, increasing downward.
    pub y: f32,
}

impl Position {
    /// Creates a new position at the provided coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box used for collision tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge of the box.
    pub x: f32,
    /// Top edge of the box.
    pub y: f32,
    /// Horizontal extent of the box.
    pub width: f32,
    /// Vertical extent of the box.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle with the provided origin and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Reports whether two rectangles overlap. Boxes that merely touch along
    /// an edge do not count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Parameters a single level contributes to the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Number of asteroids seeded when the level starts.
    pub asteroid_count: u32,
    /// Fall speed applied to asteroids before difficulty scaling kicks in.
    pub base_speed: f32,
    /// Symbolic identifier of the backdrop the presentation layer shows.
    pub background: u32,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Resets the run and seeds the asteroid field described by the config.
    StartLevel {
        /// Level parameters to apply.
        config: LevelConfig,
    },
    /// Updates the player's horizontal velocity for subsequent ticks.
    SteerPlayer {
        /// Steering direction resolved from this tick's input.
        steering: Steering,
    },
    /// Requests a projectile launch from the player's current position.
    FireProjectile,
    /// Overwrites every asteroid's fall speed with the scaled value.
    SetFallSpeed {
        /// Fall speed in units per tick; negative values are clamped to zero.
        speed: f32,
    },
    /// Requests one additional asteroid at a random top-band position.
    SpawnAsteroid {
        /// Appearance assigned to the spawned asteroid.
        sprite: SpriteId,
    },
    /// Toggles between the playing and paused states.
    TogglePause,
    /// Acknowledges a finished run, returning to the menu.
    ConfirmGameOver,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a fresh run started with the provided parameters.
    LevelStarted {
        /// Level parameters that were applied.
        config: LevelConfig,
    },
    /// Announces a state-machine transition.
    GameStateChanged {
        /// State that was active before the transition.
        from: GameState,
        /// State that became active after the transition.
        to: GameState,
    },
    /// Confirms that the projectile launched from the given position.
    ProjectileFired {
        /// Horizontal launch coordinate.
        x: f32,
        /// Vertical launch coordinate.
        y: f32,
    },
    /// Reports that the projectile destroyed an asteroid.
    AsteroidHit {
        /// Identifier of the asteroid that was hit and respawned.
        asteroid: AsteroidId,
        /// Score total after the hit was credited.
        score: u32,
    },
    /// Reports that an asteroid crossed the breach line.
    AsteroidBreached {
        /// Identifier of the asteroid that breached and respawned.
        asteroid: AsteroidId,
        /// Lives remaining after the breach was charged.
        lives: u32,
    },
    /// Reports that the run ended with the provided final score.
    RunEnded {
        /// Score accumulated over the finished run.
        score: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{LevelConfig, Rect, SpriteId};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn level_config_round_trips_through_bincode() {
        let config = LevelConfig {
            asteroid_count: 4,
            base_speed: 2.0,
            background: 3,
        };
        assert_round_trip(&config);
    }

    #[test]
    fn sprite_id_round_trips_through_bincode() {
        for sprite in SpriteId::ALL {
            assert_round_trip(&sprite);
        }
    }

    #[test]
    fn overlapping_rects_collide() {
        let projectile = Rect::new(370.0, 480.0, 16.0, 32.0);
        let asteroid = Rect::new(370.0, 480.0, 64.0, 64.0);
        assert!(projectile.overlaps(&asteroid));
        assert!(asteroid.overlaps(&projectile));
    }

    #[test]
    fn disjoint_rects_do_not_collide() {
        let left = Rect::new(0.0, 0.0, 64.0, 64.0);
        let right = Rect::new(100.0, 0.0, 64.0, 64.0);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let upper = Rect::new(0.0, 0.0, 64.0, 64.0);
        let lower = Rect::new(0.0, 64.0, 64.0, 64.0);
        assert!(!upper.overlaps(&lower));
        assert!(!lower.overlaps(&upper));
    }
}
