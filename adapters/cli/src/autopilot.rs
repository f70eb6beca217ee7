//! Synthesizes input frames so headless runs exercise the whole simulation.

use asteroid_attack_core::{GameState, InputFrame, ASTEROID_WIDTH, PLAYER_SPEED, PLAYER_WIDTH};
use asteroid_attack_world::{query, World};

/// Scripted pilot that chases the deepest asteroid and fires on cooldown.
#[derive(Debug, Default)]
pub(crate) struct Autopilot;

impl Autopilot {
    /// Produces the input frame the pilot would press this tick.
    pub(crate) fn next_input(&self, world: &World) -> InputFrame {
        match query::game_state(world) {
            GameState::Playing => {
                let player = query::player(world);
                let player_center = player.pos.x + PLAYER_WIDTH / 2.0;
                let target = query::asteroid_view(world)
                    .into_vec()
                    .into_iter()
                    .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                    .map(|snapshot| snapshot.pos.x + ASTEROID_WIDTH / 2.0);
                let (left, right) = match target {
                    // Deadband one step wide so the pilot does not oscillate.
                    Some(x) if x < player_center - PLAYER_SPEED => (true, false),
                    Some(x) if x > player_center + PLAYER_SPEED => (false, true),
                    _ => (false, false),
                };
                InputFrame {
                    left,
                    right,
                    fire: !query::projectile(world).active,
                    ..InputFrame::default()
                }
            }
            GameState::GameOver => InputFrame {
                confirm: true,
                ..InputFrame::default()
            },
            GameState::Menu | GameState::Paused => InputFrame::default(),
        }
    }
}
