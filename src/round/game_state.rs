use serde::Serialize;

use super::terminal_state::TerminalState;
use crate::config::STARTING_GAME_CLOCK;
use crate::models::Player;

/// Match level bookkeeping that outlives a single round
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameState {
    pub bankroll: i64,
    /// Seconds of decision time left for the whole match
    pub game_clock: f64,
    pub round_num: u32,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            bankroll: 0,
            game_clock: STARTING_GAME_CLOCK,
            round_num: 1,
        }
    }

    /// Books the result of a finished round for the player sitting in `seat`
    pub fn settle(&self, terminal: &TerminalState, seat: Player) -> GameState {
        GameState {
            bankroll: self.bankroll + terminal.delta(seat) as i64,
            round_num: self.round_num + 1,
            ..*self
        }
    }

    pub fn spend_clock(&self, seconds: f64) -> GameState {
        GameState {
            game_clock: self.game_clock - seconds,
            ..*self
        }
    }

    pub fn out_of_time(&self) -> bool {
        self.game_clock <= 0.0
    }
}
