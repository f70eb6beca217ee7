#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns sampled input states into world commands.

use asteroid_attack_core::{Command, GameState, InputFrame, Steering};

/// Translates one tick's input sample into the commands it implies.
#[derive(Debug, Default)]
pub struct PlayerControl;

impl PlayerControl {
    /// Creates a new player control system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Emits the commands implied by the provided input frame.
    ///
    /// Holding left and right together resolves to [`Steering::Hold`]: the
    /// two requests cancel rather than favouring either key. The mute toggle
    /// never becomes a command; music belongs to the presentation layer.
    pub fn handle(&self, input: &InputFrame, game_state: GameState, out: &mut Vec<Command>) {
        match game_state {
            GameState::Playing => {
                let steering = match (input.left, input.right) {
                    (true, false) => Steering::Left,
                    (false, true) => Steering::Right,
                    _ => Steering::Hold,
                };
                out.push(Command::SteerPlayer { steering });

                if input.fire {
                    out.push(Command::FireProjectile);
                }
                if input.pause {
                    out.push(Command::TogglePause);
                }
            }
            GameState::Paused => {
                if input.pause {
                    out.push(Command::TogglePause);
                }
            }
            GameState::GameOver => {
                if input.confirm {
                    out.push(Command::ConfirmGameOver);
                }
            }
            // Menu navigation is the presentation layer's concern; starting a
            // level arrives as an external command.
            GameState::Menu => {}
        }
    }
}
