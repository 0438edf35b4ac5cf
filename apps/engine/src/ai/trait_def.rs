//! Bot policy trait definition.

use std::fmt;

use crate::domain::legal_moves::{legal_actions, LegalActions};
use crate::domain::state::{Seat, TableState};
use crate::domain::tricks::next_seat_card_count;
use crate::domain::{Card, Combination};
use crate::error::EngineError;

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum PolicyError {
    /// The view offered no legal action. The state machine never produces
    /// such a turn, so seeing this means the view was built wrong.
    NoLegalAction,
    /// Policy encountered an internal error
    Internal(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::NoLegalAction => write!(f, "No legal action available"),
            PolicyError::Internal(msg) => write!(f, "Policy internal error: {msg}"),
        }
    }
}

impl std::error::Error for PolicyError {}

impl From<PolicyError> for EngineError {
    fn from(err: PolicyError) -> Self {
        EngineError::policy(err.to_string())
    }
}

/// What a bot decided to do with its turn.
#[derive(Debug, Clone, PartialEq)]
pub enum BotAction {
    Play(Vec<Card>),
    Pass,
}

impl BotAction {
    /// Short label for logs.
    pub fn kind_str(&self) -> &'static str {
        match self {
            BotAction::Play(_) => "play",
            BotAction::Pass => "pass",
        }
    }
}

/// The slice of table state a policy gets to see: its own hand, the play to
/// beat, and the endgame signal. Nothing about other hands leaks through.
pub struct TableView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub last_accepted: Option<&'a Combination>,
    /// Hand size of the seat that would act next; `Some(1)` switches on the
    /// one-card-left gates.
    pub next_seat_card_count: Option<usize>,
}

impl<'a> TableView<'a> {
    pub fn for_seat(state: &'a TableState, seat: Seat) -> Self {
        Self {
            seat,
            hand: state.hand(seat),
            last_accepted: state.round.last_accepted.as_ref(),
            next_seat_card_count: next_seat_card_count(state, seat),
        }
    }

    /// Everything this seat may legally do, gates already applied.
    pub fn legal_actions(&self) -> LegalActions {
        legal_actions(self.hand, self.last_accepted, self.next_seat_card_count)
    }
}

/// Trait for bot policies.
///
/// Implementations receive the table state visible to their seat and must
/// choose a legal action, queried via [`TableView::legal_actions`].
pub trait BotPolicy: Send + Sync {
    fn choose_action(&self, view: &TableView<'_>) -> Result<BotAction, PolicyError>;
}
