pub mod action;
pub mod game_state;
pub mod history;
pub mod progression;
pub mod round_state;
pub mod showdown;
pub mod street;
pub mod swap;
pub mod terminal_state;

pub use action::{Action, ActionKind, LegalActions};
pub use game_state::GameState;
pub use history::{Node, RoundTree, StateId, Transition};
pub use round_state::RoundState;
pub use street::Street;
pub use swap::SwapOdds;
pub use terminal_state::{Ending, TerminalState};
