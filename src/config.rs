use crate::Chips;

/// Game rules
pub const STARTING_STACK: Chips = 400;
pub const BIG_BLIND: Chips = 2;
pub const SMALL_BLIND: Chips = 1;

/// Wildcard swap odds, rolled once per player when a street begins
pub const FLOP_PERCENT: f64 = 0.1;
pub const TURN_PERCENT: f64 = 0.05; // applied to both the turn and the river

/// Match configuration
pub const NUM_ROUNDS: u32 = 1000;
pub const STARTING_GAME_CLOCK: f64 = 30.0; // seconds of decision time for a whole match

/// Simulation configuration
pub const NUM_MATCHES: usize = 12; // independent matches, one rng per match
pub const SIMULATION_SEED: Option<u64> = None; // Some(seed) for a reproducible run
