#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Asteroid Attack adapters.
//!
//! Backends receive a [`Scene`] describing everything one frame shows and an
//! already-resolved shake offset; the simulation never depends on anything a
//! backend reports back. Audio is equally one-way: [`AudioCue`] values are
//! derived from world events and playing them is best-effort.

use anyhow::Result as AnyResult;
use asteroid_attack_core::{Event, Position, SpriteId};
use glam::Vec2;
use rand::Rng;

/// Largest displacement, in world units, the shake effect applies per axis.
pub const SHAKE_AMPLITUDE: f32 = 4.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Visual identity of one drawable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneSprite {
    /// The player ship.
    Player,
    /// The in-flight projectile.
    Projectile,
    /// An asteroid wearing the given appearance.
    Asteroid(SpriteId),
}

/// One sprite placed within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteInstance {
    /// Which sprite to draw.
    pub sprite: SceneSprite,
    /// Upper-left corner of the sprite in world units.
    pub position: Position,
}

/// Counters the heads-up display presents alongside the playfield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudState {
    /// Score accumulated this run.
    pub score: u32,
    /// Lives remaining this run.
    pub lives: u32,
    /// Best score seen across runs.
    pub high_score: u32,
}

/// Complete description of one presented frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Sprites to draw, back to front.
    pub sprites: Vec<SpriteInstance>,
    /// Heads-up display counters.
    pub hud: HudState,
    /// Offset applied to the whole frame by the shake effect.
    pub shake: Vec2,
}

/// Backend capable of presenting a frame. Failures are the caller's to
/// swallow; they must never influence the simulation.
pub trait Presenter {
    /// Presents the provided scene.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Resolves the render offset for the current shake timer. While the timer
/// is armed the offset jitters uniformly within the amplitude; otherwise it
/// is zero.
#[must_use]
pub fn shake_offset<R: Rng>(shake_ticks: u32, rng: &mut R) -> Vec2 {
    if shake_ticks == 0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.gen_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
        rng.gen_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
    )
}

/// Sound effects triggered by simulation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// The projectile launched.
    Laser,
    /// An asteroid was destroyed.
    Explosion,
    /// The background music was toggled on or off.
    MusicToggle,
}

/// Maps one tick's events to the audio cues they imply, in event order.
#[must_use]
pub fn cues_for_events(events: &[Event]) -> Vec<AudioCue> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::ProjectileFired { .. } => Some(AudioCue::Laser),
            Event::AsteroidHit { .. } => Some(AudioCue::Explosion),
            _ => None,
        })
        .collect()
}
