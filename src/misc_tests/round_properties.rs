use itertools::Itertools;
use rand::{rngs::SmallRng, SeedableRng};

use crate::config::STARTING_STACK;
use crate::evaluate::EvaluateHand;
use crate::models::Card;
use crate::round::{Node, RoundState, RoundTree, StateId, Street, SwapOdds};
use crate::simulate::play_round;

const ROUNDS: usize = 2_000;

fn every_card(state: &RoundState) -> Vec<Card> {
    state
        .hands
        .iter()
        .flatten()
        .chain(state.deck.undealt())
        .chain(state.deck.community())
        .copied()
        .sorted()
        .collect()
}

fn random_rounds(seed: u64, odds: SwapOdds) -> impl Iterator<Item = (RoundTree, StateId)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..ROUNDS).map(move |_| play_round(EvaluateHand, odds, &mut rng).unwrap())
}

fn round_states(tree: &RoundTree) -> impl Iterator<Item = &RoundState> {
    tree.nodes().iter().filter_map(Node::state)
}

#[test]
fn chips_are_conserved() {
    for (tree, _) in random_rounds(1, SwapOdds::default()) {
        for state in round_states(&tree) {
            assert_eq!(state.chips_in_play(), 2 * STARTING_STACK, "{}", state);
        }
    }
}

#[test]
fn deltas_sum_to_zero_and_stay_within_stacks() {
    for (tree, end) in random_rounds(2, SwapOdds::default()) {
        let terminal = tree.terminal(end).unwrap();
        assert_eq!(terminal.deltas[0] + terminal.deltas[1], 0);
        assert!(terminal.deltas[0].unsigned_abs() <= STARTING_STACK);
    }
}

#[test]
fn cards_are_conserved_under_swaps() {
    let full_deck: Vec<Card> = (0..52).map(Card::from_int).collect();
    for (tree, _) in random_rounds(3, SwapOdds::always()) {
        for state in round_states(&tree) {
            assert_eq!(every_card(state), full_deck);
        }
    }
}

#[test]
fn streets_never_go_backwards() {
    for (tree, end) in random_rounds(4, SwapOdds::default()) {
        let streets: Vec<Street> = tree
            .lineage(end)
            .filter_map(|(_, node)| node.state().map(|state| state.street))
            .collect();
        // lineage runs leaf to root, so streets are non-increasing here
        assert!(streets.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(streets.last(), Some(&Street::Preflop));
    }
}

#[test]
fn community_matches_street() {
    for (tree, _) in random_rounds(5, SwapOdds::default()) {
        for state in round_states(&tree) {
            assert_eq!(state.community().len(), state.street.community_cards());
        }
    }
}

#[test]
fn snapshots_are_frozen() {
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..200 {
        let (tree, end) = play_round(EvaluateHand, SwapOdds::always(), &mut rng).unwrap();
        // every parent still shows the board it was created with
        for (_, node) in tree.lineage(end) {
            if let (Some(state), Some(parent)) = (node.state(), node.previous_state()) {
                let parent = tree.get(parent).unwrap().state().unwrap();
                assert!(parent.street <= state.street);
                assert_eq!(&state.community()[..parent.community().len()], parent.community());
                assert_eq!(parent.community().len(), parent.street.community_cards());
            }
        }
    }
}

#[test]
fn queries_are_idempotent() {
    for (tree, _) in random_rounds(7, SwapOdds::default()).take(200) {
        for state in round_states(&tree) {
            assert_eq!(state.legal_actions(), state.legal_actions());
            assert_eq!(state.raise_bounds(), state.raise_bounds());
            assert!(!state.legal_actions().is_empty());
        }
    }
}
