pub mod evaluate_hand;
pub mod hand_type;

pub use evaluate_hand::{EvaluateHand, HandEvaluator};
pub use hand_type::{HandRank, HandType};
