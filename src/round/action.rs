use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;

use crate::Chips;

/// A move by the active player. `Raise` carries the total pip the player
/// raises to on this street, not the increment.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Action {
    Fold,
    Call,
    Check,
    Raise(Chips),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum ActionKind {
    Fold,
    Call,
    Check,
    Raise,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "Fol"),
            Action::Call => write!(f, "Cal"),
            Action::Check => write!(f, "Chk"),
            Action::Raise(amount) => write!(f, "Rai({})", amount),
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Fold => write!(f, "Fol"),
            ActionKind::Call => write!(f, "Cal"),
            ActionKind::Check => write!(f, "Chk"),
            ActionKind::Raise => write!(f, "Rai"),
        }
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Call => ActionKind::Call,
            Action::Check => ActionKind::Check,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [ActionKind::Fold, ActionKind::Call, ActionKind::Check, ActionKind::Raise];

    const fn bit(&self) -> u8 {
        match self {
            ActionKind::Fold => 0b0001,
            ActionKind::Call => 0b0010,
            ActionKind::Check => 0b0100,
            ActionKind::Raise => 0b1000,
        }
    }
}

/// The set of action kinds open to the active player
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize)]
pub struct LegalActions(u8);

impl LegalActions {
    pub fn of(kinds: &[ActionKind]) -> LegalActions {
        kinds.iter().fold(LegalActions::default(), |set, kind| set.with(*kind))
    }

    pub fn with(self, kind: ActionKind) -> LegalActions {
        LegalActions(self.0 | kind.bit())
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Display for LegalActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Action::Fold.kind(), ActionKind::Fold);
        assert_eq!(Action::Call.kind(), ActionKind::Call);
        assert_eq!(Action::Check.kind(), ActionKind::Check);
        assert_eq!(Action::Raise(12).kind(), ActionKind::Raise);
    }

    #[test]
    fn legal_set_membership() {
        let legal = LegalActions::of(&[ActionKind::Fold, ActionKind::Call]);
        assert!(legal.contains(ActionKind::Fold));
        assert!(legal.contains(ActionKind::Call));
        assert!(!legal.contains(ActionKind::Check));
        assert!(!legal.contains(ActionKind::Raise));
        assert_eq!(legal.len(), 2);
        assert_eq!(legal.iter().collect::<Vec<_>>(), vec![ActionKind::Fold, ActionKind::Call]);
    }

    #[test]
    fn empty_set() {
        let legal = LegalActions::default();
        assert!(legal.is_empty());
        assert_eq!(legal.iter().count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Raise(10).to_string(), "Rai(10)");
        let legal = LegalActions::of(&[ActionKind::Check, ActionKind::Raise]);
        assert_eq!(legal.to_string(), "{Chk, Rai}");
    }
}
