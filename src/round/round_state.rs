use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;

use super::action::{Action, ActionKind, LegalActions};
use super::history::StateId;
use super::street::Street;
use crate::config::*;
use crate::error::RoundError;
use crate::models::card::cards_string;
use crate::models::{Card, Deck, HoleCards, Player};
use crate::{Chips, Delta};

/// One node in the betting tree of a single round.
///
/// A `RoundState` is never changed once built. Every transition produces a new
/// state that names this one as its `previous_state`. The deck is shared with
/// the successor until a street change needs to deal from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    pub button: u32,
    pub street: Street,
    pub pips: [Chips; 2],
    pub stacks: [Chips; 2],
    pub hands: [HoleCards; 2],
    pub deck: Arc<Deck>,
    /// None for the state built at round setup
    pub previous_state: Option<StateId>,
}

impl RoundState {
    /// Deals hole cards from the front of `deck` and posts the blinds
    pub fn new_round(mut deck: Deck) -> RoundState {
        let dealt = deck.deal(4);
        RoundState {
            button: 0,
            street: Street::Preflop,
            pips: [SMALL_BLIND, BIG_BLIND],
            stacks: [STARTING_STACK - SMALL_BLIND, STARTING_STACK - BIG_BLIND],
            hands: [[dealt[0], dealt[1]], [dealt[2], dealt[3]]],
            deck: Arc::new(deck),
            previous_state: None,
        }
    }

    pub fn active(&self) -> Player {
        Player::from_button(self.button)
    }

    /// Chips the active player must add to match the opponent
    pub fn continue_cost(&self) -> Chips {
        let active = self.active();
        self.pips[active.get_opposite().index()] - self.pips[active.index()]
    }

    pub fn community(&self) -> &[Card] {
        self.deck.community()
    }

    pub fn legal_actions(&self) -> LegalActions {
        let active = self.active().index();
        let continue_cost = self.continue_cost();
        if continue_cost == 0 {
            // betting needs chips behind on both sides
            let bets_forbidden = self.stacks[0] == 0 || self.stacks[1] == 0;
            return if bets_forbidden {
                LegalActions::of(&[ActionKind::Check])
            } else {
                LegalActions::of(&[ActionKind::Check, ActionKind::Raise])
            };
        }
        let raises_forbidden = continue_cost == self.stacks[active] || self.stacks[1 - active] == 0;
        if raises_forbidden {
            LegalActions::of(&[ActionKind::Fold, ActionKind::Call])
        } else {
            LegalActions::of(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])
        }
    }

    /// Inclusive range of total pips the active player may raise to
    pub fn raise_bounds(&self) -> (Chips, Chips) {
        let active = self.active().index();
        let continue_cost = self.continue_cost();
        let max_contribution = self.stacks[active].min(self.stacks[1 - active] + continue_cost);
        let min_contribution = max_contribution.min(continue_cost + continue_cost.max(BIG_BLIND));
        (self.pips[active] + min_contribution, self.pips[active] + max_contribution)
    }

    pub fn validate(&self, action: &Action) -> Result<(), RoundError> {
        let legal = self.legal_actions();
        if !legal.contains(action.kind()) {
            return Err(RoundError::IllegalAction { action: *action, legal });
        }
        if let Action::Raise(amount) = *action {
            let (min, max) = self.raise_bounds();
            if amount < min || amount > max {
                return Err(RoundError::IllegalRaise { amount, min, max });
            }
        }
        Ok(())
    }

    /// Net result of the active player folding. The folder loses what they committed.
    pub fn fold_deltas(&self) -> [Delta; 2] {
        let folder = self.active();
        let delta = self.stacks[folder.index()] as Delta - STARTING_STACK as Delta;
        let mut deltas = [0; 2];
        deltas[folder.index()] = delta;
        deltas[folder.get_opposite().index()] = -delta;
        deltas
    }

    /// A second check closes the street: preflop only the big blind can check,
    /// and it always closes; later streets open at button 1.
    pub fn check_closes_street(&self) -> bool {
        (self.street == Street::Preflop && self.button > 0) || self.button > 1
    }

    /// The small blind completing to the big blind leaves the street open
    pub fn is_blind_completion(&self) -> bool {
        self.button == 0
    }

    pub(crate) fn after_call(&self, parent: StateId) -> RoundState {
        let active = self.active().index();
        let contribution = self.continue_cost();
        let mut pips = self.pips;
        let mut stacks = self.stacks;
        stacks[active] -= contribution;
        pips[active] += contribution;
        RoundState {
            button: if self.is_blind_completion() { 1 } else { self.button + 1 },
            pips,
            stacks,
            previous_state: Some(parent),
            ..self.clone()
        }
    }

    pub(crate) fn after_check(&self, parent: StateId) -> RoundState {
        RoundState {
            button: self.button + 1,
            previous_state: Some(parent),
            ..self.clone()
        }
    }

    pub(crate) fn after_raise(&self, amount: Chips, parent: StateId) -> RoundState {
        let active = self.active().index();
        let contribution = amount - self.pips[active];
        let mut pips = self.pips;
        let mut stacks = self.stacks;
        stacks[active] -= contribution;
        pips[active] += contribution;
        RoundState {
            button: self.button + 1,
            pips,
            stacks,
            previous_state: Some(parent),
            ..self.clone()
        }
    }

    /// Sum of pips and stacks, which never changes within a round
    pub fn chips_in_play(&self) -> Chips {
        self.pips.iter().sum::<Chips>() + self.stacks.iter().sum::<Chips>()
    }
}

impl Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} button {} ({} to act) board [{}] pips {:?} stacks {:?} hands [{}] [{}]",
            self.street,
            self.button,
            self.active(),
            cards_string(self.community()),
            self.pips,
            self.stacks,
            cards_string(&self.hands[0]),
            cards_string(&self.hands[1]),
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    /// A state with arbitrary chip counts, for exercising the betting rules in isolation
    pub(crate) fn state_with(button: u32, street: Street, pips: [Chips; 2], stacks: [Chips; 2]) -> RoundState {
        RoundState {
            button,
            street,
            pips,
            stacks,
            ..RoundState::new_round(Deck::new())
        }
    }

    #[test]
    fn new_round_posts_blinds() {
        let state = RoundState::new_round(Deck::new());
        assert_eq!(state.button, 0);
        assert_eq!(state.street, Street::Preflop);
        assert_eq!(state.pips, [1, 2]);
        assert_eq!(state.stacks, [399, 398]);
        assert_eq!(state.active(), Player::SmallBlind);
        assert_eq!(state.hands[0], [Card::from_int(0), Card::from_int(1)]);
        assert_eq!(state.hands[1], [Card::from_int(2), Card::from_int(3)]);
        assert_eq!(state.deck.undealt().len(), 48);
        assert_eq!(state.chips_in_play(), 2 * STARTING_STACK);
        assert_eq!(state.previous_state, None);
    }

    #[rstest]
    #[case([0, 0], [200, 200], &[ActionKind::Check, ActionKind::Raise])]
    #[case([0, 0], [0, 200], &[ActionKind::Check])]
    #[case([0, 0], [200, 0], &[ActionKind::Check])]
    #[case([0, 50], [50, 300], &[ActionKind::Fold, ActionKind::Call])]
    #[case([0, 50], [200, 0], &[ActionKind::Fold, ActionKind::Call])]
    #[case([0, 50], [200, 200], &[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])]
    fn legal_actions_table(#[case] pips: [Chips; 2], #[case] stacks: [Chips; 2], #[case] expected: &[ActionKind]) {
        let state = state_with(2, Street::Flop, pips, stacks);
        assert_eq!(state.active(), Player::SmallBlind);
        assert_eq!(state.legal_actions(), LegalActions::of(expected));
    }

    #[test]
    fn raise_bounds_after_blinds_complete() {
        let state = state_with(1, Street::Preflop, [2, 2], [398, 398]);
        assert_eq!(state.raise_bounds(), (4, 400));
    }

    #[test]
    fn raise_bounds_at_round_start() {
        let state = RoundState::new_round(Deck::new());
        // one to call, then at least a big blind more
        assert_eq!(state.raise_bounds(), (1 + 1 + 2, 400));
    }

    #[test]
    fn raise_bounds_match_last_raise() {
        // facing a raise of 20, the re-raise must be at least 20 more
        let state = state_with(2, Street::Turn, [0, 20], [380, 360]);
        assert_eq!(state.raise_bounds(), (40, 380));
    }

    #[test]
    fn short_stack_min_raise_is_all_in() {
        let state = state_with(2, Street::Turn, [0, 20], [30, 300]);
        assert_eq!(state.raise_bounds(), (30, 30));
    }

    #[test]
    fn raise_capped_by_opponent_stack() {
        let state = state_with(1, Street::Flop, [0, 0], [100, 300]);
        assert_eq!(state.active(), Player::BigBlind);
        assert_eq!(state.raise_bounds(), (2, 100));
    }

    #[test]
    fn fold_deltas_small_blind() {
        let state = state_with(0, Street::Flop, [0, 0], [350, 450]);
        assert_eq!(state.fold_deltas(), [-50, 50]);
    }

    #[test]
    fn fold_deltas_big_blind() {
        let state = state_with(1, Street::Preflop, [1, 2], [399, 398]);
        assert_eq!(state.fold_deltas(), [2, -2]);
    }

    #[test]
    fn queries_are_pure() {
        let state = state_with(2, Street::Turn, [0, 20], [380, 360]);
        let snapshot = state.clone();
        assert_eq!(state.legal_actions(), state.legal_actions());
        assert_eq!(state.raise_bounds(), state.raise_bounds());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn validate_rejects_illegal_kind() {
        let state = RoundState::new_round(Deck::new());
        assert_eq!(
            state.validate(&Action::Check),
            Err(RoundError::IllegalAction {
                action: Action::Check,
                legal: LegalActions::of(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise]),
            })
        );
    }

    #[rstest]
    #[case(3)]
    #[case(401)]
    fn validate_rejects_raise_out_of_bounds(#[case] amount: Chips) {
        let state = RoundState::new_round(Deck::new());
        assert_eq!(
            state.validate(&Action::Raise(amount)),
            Err(RoundError::IllegalRaise { amount, min: 4, max: 400 })
        );
    }

    #[rstest]
    #[case(Action::Fold)]
    #[case(Action::Call)]
    #[case(Action::Raise(4))]
    #[case(Action::Raise(400))]
    fn validate_accepts_legal(#[case] action: Action) {
        let state = RoundState::new_round(Deck::new());
        assert_eq!(state.validate(&action), Ok(()));
    }

    #[test]
    fn blind_completion_keeps_the_street_open() {
        let state = RoundState::new_round(Deck::new());
        let next = state.after_call(StateId::ROOT);
        assert_eq!(next.pips, [BIG_BLIND, BIG_BLIND]);
        assert_eq!(next.stacks, [STARTING_STACK - BIG_BLIND; 2]);
        assert_eq!(next.button, 1);
        assert_eq!(next.street, Street::Preflop);
        assert_eq!(next.previous_state, Some(StateId::ROOT));
        assert!(Arc::ptr_eq(&next.deck, &state.deck));
    }

    #[test]
    fn raise_then_call_matches_pips() {
        let state = state_with(1, Street::Flop, [0, 0], [398, 398]);
        let raised = state.after_raise(30, StateId::ROOT);
        assert_eq!(raised.pips, [0, 30]);
        assert_eq!(raised.stacks, [398, 368]);
        assert_eq!(raised.button, 2);
        assert_eq!(raised.continue_cost(), 30);
        let called = raised.after_call(StateId::ROOT);
        assert_eq!(called.pips, [30, 30]);
        assert_eq!(called.stacks, [368, 368]);
        assert_eq!(called.button, 3);
    }

    #[rstest]
    #[case(Street::Preflop, 1, true)]
    #[case(Street::Flop, 1, false)]
    #[case(Street::Flop, 2, true)]
    #[case(Street::River, 1, false)]
    #[case(Street::River, 4, true)]
    fn second_check_closes_street(#[case] street: Street, #[case] button: u32, #[case] closes: bool) {
        let state = state_with(button, street, [0, 0], [398, 398]);
        assert_eq!(state.check_closes_street(), closes);
    }

    #[test]
    fn check_passes_the_turn() {
        let state = state_with(1, Street::Flop, [0, 0], [398, 398]);
        let next = state.after_check(StateId::ROOT);
        assert_eq!(next.button, 2);
        assert_eq!(next.active(), Player::SmallBlind);
        assert_eq!(next.pips, state.pips);
        assert_eq!(next.stacks, state.stacks);
    }
}
