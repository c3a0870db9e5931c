use rand::Rng;
use std::time::Instant;

use crate::error::RoundError;
use crate::evaluate::HandEvaluator;
use crate::models::{Deck, Player};
use crate::round::{Action, ActionKind, GameState, RoundState, RoundTree, StateId, SwapOdds, Transition};

/// Uniform over the legal kinds; a raise picks its amount uniformly in bounds
pub fn random_action<R: Rng + ?Sized>(state: &RoundState, rng: &mut R) -> Action {
    let kinds: Vec<ActionKind> = state.legal_actions().iter().collect();
    match kinds[rng.gen_range(0..kinds.len())] {
        ActionKind::Fold => Action::Fold,
        ActionKind::Call => Action::Call,
        ActionKind::Check => Action::Check,
        ActionKind::Raise => {
            let (min, max) = state.raise_bounds();
            Action::Raise(rng.gen_range(min..=max))
        }
    }
}

/// Deals a round from a freshly shuffled deck and plays random legal actions
/// until it ends. Returns the full tree and the id of its terminal node.
pub fn play_round<E: HandEvaluator, R: Rng + ?Sized>(
    evaluator: E,
    odds: SwapOdds,
    rng: &mut R,
) -> Result<(RoundTree<E>, StateId), RoundError> {
    let root = RoundState::new_round(Deck::shuffled(rng));
    let mut tree = RoundTree::new(root, evaluator).with_swap_odds(odds);
    let (end, _) = play_out(&mut tree, Player::SmallBlind, rng)?;
    Ok((tree, end))
}

/// Drives `tree` from its root to a terminal node. Returns that node and the
/// seconds `hero` spent choosing actions.
fn play_out<E: HandEvaluator, R: Rng + ?Sized>(
    tree: &mut RoundTree<E>,
    hero: Player,
    rng: &mut R,
) -> Result<(StateId, f64), RoundError> {
    let mut id = tree.root();
    let mut thinking = 0.0;
    loop {
        let state = tree.round_state(id)?;
        let started = Instant::now();
        let action = random_action(state, rng);
        if state.active() == hero {
            thinking += started.elapsed().as_secs_f64();
        }
        match tree.proceed(id, action, rng)? {
            Transition::Continue(next) => id = next,
            Transition::Terminal(end) => return Ok((end, thinking)),
        }
    }
}

/// Plays `rounds` random rounds for one hero, swapping seats every round the
/// way the button moves in a real match. Only the time the hero spends picking
/// its own actions is charged to its game clock.
pub fn play_match<E: HandEvaluator + Clone, R: Rng + ?Sized>(
    rounds: u32,
    evaluator: E,
    rng: &mut R,
) -> Result<GameState, RoundError> {
    let mut game = GameState::new();
    for round in 0..rounds {
        let seat = if round % 2 == 0 { Player::BigBlind } else { Player::SmallBlind };
        let root = RoundState::new_round(Deck::shuffled(rng));
        let mut tree = RoundTree::new(root, evaluator.clone());
        let (end, thinking) = play_out(&mut tree, seat, rng)?;
        game = game.spend_clock(thinking);
        let terminal = tree.terminal(end).ok_or(RoundError::UnknownState(end))?;
        game = game.settle(terminal, seat);
        log::trace!("round {} {:?} bankroll {}", game.round_num - 1, terminal.ending, game.bankroll);
    }
    if game.out_of_time() {
        log::warn!("match ran over its game clock by {:.3}s", -game.game_clock);
    }
    Ok(game)
}
