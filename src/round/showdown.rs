use super::round_state::RoundState;
use crate::config::STARTING_STACK;
use crate::evaluate::HandEvaluator;
use crate::models::card::cards_string;
use crate::models::Player;
use crate::Delta;

/// Settles a round that reached the end of the river.
///
/// The winner takes what the loser committed. Both players have committed the
/// same amount whenever betting closes, but the smaller contribution is used
/// so a loser is never charged more than they put in. Ties split the pot.
pub fn showdown<E: HandEvaluator + ?Sized>(state: &RoundState, evaluator: &E) -> ([Delta; 2], Option<Player>) {
    let winner = evaluator.winner(&state.hands, state.community());
    let contributed = state.stacks.map(|stack| (STARTING_STACK - stack) as Delta);
    let at_risk = contributed[0].min(contributed[1]);
    let mut deltas = [0; 2];
    if let Some(winner) = winner {
        deltas[winner.index()] = at_risk;
        deltas[winner.get_opposite().index()] = -at_risk;
    }
    log::debug!(
        "showdown [{}] SB [{}] BB [{}] winner {:?} deltas {:?}",
        cards_string(state.community()),
        cards_string(&state.hands[0]),
        cards_string(&state.hands[1]),
        winner,
        deltas
    );
    (deltas, winner)
}
