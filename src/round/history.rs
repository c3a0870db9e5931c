use rand::Rng;
use serde::Serialize;
use std::fmt::Display;

use super::action::{Action, LegalActions};
use super::round_state::RoundState;
use super::showdown::showdown;
use super::swap::SwapOdds;
use super::terminal_state::{Ending, TerminalState};
use crate::error::RoundError;
use crate::evaluate::{EvaluateHand, HandEvaluator};
use crate::Chips;

/// Index of a node within its `RoundTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StateId(usize);

impl StateId {
    pub const ROOT: StateId = StateId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// Waiting on the active player
    Round(RoundState),
    /// Pips were matched by a call that closed the street. Kept for the
    /// history only; betting on it is over.
    Closed(RoundState),
    Terminal(TerminalState),
}

impl Node {
    pub fn previous_state(&self) -> Option<StateId> {
        match self {
            Node::Round(state) | Node::Closed(state) => state.previous_state,
            Node::Terminal(terminal) => Some(terminal.previous_state),
        }
    }

    /// The snapshot held by this node, open or closed
    pub fn state(&self) -> Option<&RoundState> {
        match self {
            Node::Round(state) | Node::Closed(state) => Some(state),
            Node::Terminal(_) => None,
        }
    }
}

/// Where a call to `proceed` landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue(StateId),
    Terminal(StateId),
}

/// Every node reached while playing one round, in creation order.
///
/// Nodes refer to their parent by id rather than by reference, so the history
/// of a round is one flat `Vec` no matter how long it runs. A driver may also
/// branch by calling `proceed` more than once on the same id.
#[derive(Debug, Clone)]
pub struct RoundTree<E: HandEvaluator = EvaluateHand> {
    nodes: Vec<Node>,
    evaluator: E,
    odds: SwapOdds,
}

impl<E: HandEvaluator> RoundTree<E> {
    pub fn new(root: RoundState, evaluator: E) -> Self {
        RoundTree {
            nodes: vec![Node::Round(root)],
            evaluator,
            odds: SwapOdds::default(),
        }
    }

    pub fn with_swap_odds(mut self, odds: SwapOdds) -> Self {
        self.odds = odds;
        self
    }

    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: StateId) -> Result<&Node, RoundError> {
        self.nodes.get(id.0).ok_or(RoundError::UnknownState(id))
    }

    /// The snapshot at `id` if its active player still has to act
    pub fn round_state(&self, id: StateId) -> Result<&RoundState, RoundError> {
        match self.get(id)? {
            Node::Round(state) => Ok(state),
            Node::Closed(_) => Err(RoundError::BettingClosed(id)),
            Node::Terminal(_) => Err(RoundError::RoundOver(id)),
        }
    }

    pub fn terminal(&self, id: StateId) -> Option<&TerminalState> {
        match self.nodes.get(id.0) {
            Some(Node::Terminal(terminal)) => Some(terminal),
            _ => None,
        }
    }

    pub fn legal_actions(&self, id: StateId) -> Result<LegalActions, RoundError> {
        Ok(self.round_state(id)?.legal_actions())
    }

    pub fn raise_bounds(&self, id: StateId) -> Result<(Chips, Chips), RoundError> {
        Ok(self.round_state(id)?.raise_bounds())
    }

    /// Walks from `id` back to the round setup, starting with `id` itself
    pub fn lineage(&self, id: StateId) -> impl Iterator<Item = (StateId, &Node)> + '_ {
        let mut next = self.nodes.get(id.0).map(|_| id);
        std::iter::from_fn(move || {
            let current = next?;
            let node = &self.nodes[current.0];
            next = node.previous_state();
            Some((current, node))
        })
    }

    /// Applies `action` for the active player of state `id`.
    ///
    /// The action is checked against `legal_actions` and `raise_bounds` first;
    /// an illegal action leaves the tree unchanged. A call that closes betting
    /// records the matched state before the next street, so the history shows
    /// both.
    pub fn proceed<R: Rng + ?Sized>(&mut self, id: StateId, action: Action, rng: &mut R) -> Result<Transition, RoundError> {
        let state = self.round_state(id)?.clone();
        state.validate(&action)?;
        log::trace!("{} {} by {} at {}", id, action, state.active(), state);
        let transition = match action {
            Action::Fold => {
                let terminal = TerminalState::new(state.fold_deltas(), id, Ending::Fold(state.active()));
                Transition::Terminal(self.push(Node::Terminal(terminal)))
            }
            Action::Call if state.is_blind_completion() => {
                Transition::Continue(self.push(Node::Round(state.after_call(id))))
            }
            Action::Call => {
                let called = state.after_call(id);
                let called_id = self.push(Node::Closed(called.clone()));
                self.advance(&called, called_id, rng)
            }
            Action::Check if state.check_closes_street() => self.advance(&state, id, rng),
            Action::Check => Transition::Continue(self.push(Node::Round(state.after_check(id)))),
            Action::Raise(amount) => Transition::Continue(self.push(Node::Round(state.after_raise(amount, id)))),
        };
        Ok(transition)
    }

    /// Betting on `state`'s street is over: open the next street or settle
    fn advance<R: Rng + ?Sized>(&mut self, state: &RoundState, id: StateId, rng: &mut R) -> Transition {
        match state.next_street(id, &self.odds, rng) {
            Some(next) => Transition::Continue(self.push(Node::Round(next))),
            None => {
                let (deltas, winner) = showdown(state, &self.evaluator);
                let terminal = TerminalState::new(deltas, id, Ending::Showdown(winner));
                Transition::Terminal(self.push(Node::Terminal(terminal)))
            }
        }
    }

    fn push(&mut self, node: Node) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
