pub mod random_play;

pub use random_play::{play_match, play_round, random_action};
