//! Play and pass transitions over a table, enforcing turn order, beat rules,
//! endgame gates, and trick resolution.
//!
//! Both entry points are pure state-machine steps: every check runs before
//! any mutation, so a rejected action leaves the table untouched.

use crate::domain::combos::{classify, ComboKind, Combination};
use crate::domain::ranking::{compare_combos, CompareOutcome};
use crate::domain::rules::PASSES_TO_RESOLVE;
use crate::domain::state::{
    first_unfinished_from, next_seat, next_unfinished_seat, require_last_player, require_turn,
    Seat, TablePhase, TableState,
};
use crate::domain::timer::{ClearedTimer, TimerClearReason};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an accepted play, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    /// The classified combination that was accepted.
    pub combo: Combination,
    /// Whether this play emptied the actor's hand.
    pub seat_finished: bool,
    /// Whether the deal ended (at most one seat still holds cards).
    pub deal_completed: bool,
    /// An armed countdown removed by this play, if any.
    pub cleared_timer: Option<ClearedTimer>,
}

/// Result of an accepted pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// New trick leader when this pass resolved the trick.
    pub resolved_leader: Option<Seat>,
    /// An armed countdown removed by the resolution, if any.
    pub cleared_timer: Option<ClearedTimer>,
}

/// Submit cards as a play for `seat`.
pub fn submit_play(
    state: &mut TableState,
    seat: Seat,
    cards: &[Card],
) -> Result<PlayOutcome, DomainError> {
    // Phase check
    if state.phase != TablePhase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    }

    // Turn check
    let turn = require_turn(state, "submit_play")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "Not your turn",
        ));
    }

    // Classification (also rejects duplicate cards in the submission)
    let combo = classify(cards)?;

    // Cards in hand
    let hand = &state.hands[seat as usize];
    if !combo.cards().iter().all(|c| hand.contains(c)) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    }

    // Follow checks against the play to beat
    if let Some(last) = &state.round.last_accepted {
        if combo.category() != last.category() {
            return Err(DomainError::validation(
                ValidationKind::MustFollowKind,
                "Must follow the kind of the play to beat",
            ));
        }
        match compare_combos(&combo, last) {
            CompareOutcome::Greater => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::DoesNotBeat,
                    "Does not beat the play on the table",
                ))
            }
        }
    }

    // Endgame gate: a single played while the next seat to act is on their
    // last card must be the highest single held.
    if combo.kind() == ComboKind::Single {
        if let Some(next) = next_unfinished_seat(state, seat) {
            if state.hands[next as usize].len() == 1 {
                let highest = state.hands[seat as usize].iter().copied().max();
                if highest != Some(combo.deciding_card()) {
                    return Err(DomainError::validation(
                        ValidationKind::MustPlayHighestAvailable,
                        "Must play the highest single while the next seat is on their last card",
                    ));
                }
            }
        }
    }

    // All checks passed; mutate.
    state.hands[seat as usize].retain(|c| !combo.cards().contains(c));

    // An accepted play supersedes any armed countdown.
    let armed_seq = state.round.auto_pass.take().map(|t| t.sequence_id);

    state.round.last_accepted = Some(combo.clone());
    state.round.last_player = Some(seat);
    state.round.consecutive_passes = 0;

    let seat_finished = state.hands[seat as usize].is_empty();
    if seat_finished {
        state.finished_order.push(seat);
    }

    // Deal ends once at most one seat still holds cards.
    let deal_completed = state.unfinished_count() <= 1;
    let cleared_timer = armed_seq.map(|sequence_id| ClearedTimer {
        sequence_id,
        reason: if deal_completed {
            TimerClearReason::DealCompleted
        } else {
            TimerClearReason::BeatenByPlay
        },
    });

    if deal_completed {
        state.phase = TablePhase::Completed;
        state.turn = None;
        return Ok(PlayOutcome {
            combo,
            seat_finished,
            deal_completed,
            cleared_timer,
        });
    }

    match advance_with_skips(state, seat) {
        AdvanceStop::Turn(next) => state.turn = Some(next),
        AdvanceStop::Resolve => {
            // a play resets the pass count, so at most two finished seats can
            // be skipped before an unfinished one is found
            return Err(DomainError::validation_other(
                "Invariant violated: trick resolved immediately after an accepted play",
            ));
        }
    }

    Ok(PlayOutcome {
        combo,
        seat_finished,
        deal_completed,
        cleared_timer,
    })
}

/// Submit a pass for `seat`.
pub fn submit_pass(state: &mut TableState, seat: Seat) -> Result<PassOutcome, DomainError> {
    // Phase check
    if state.phase != TablePhase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    }

    // Turn check
    let turn = require_turn(state, "submit_pass")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "Not your turn",
        ));
    }

    // The trick leader must play
    let Some(last) = &state.round.last_accepted else {
        return Err(DomainError::validation(
            ValidationKind::CannotLeadPass,
            "Cannot pass while leading",
        ));
    };

    // Endgame gate: holding a card that beats the single on the table while
    // the next seat to act is on their last card forbids passing.
    if last.kind() == ComboKind::Single {
        if let Some(next) = next_unfinished_seat(state, seat) {
            if state.hands[next as usize].len() == 1 {
                let target = last.deciding_card();
                if state.hands[seat as usize].iter().any(|&c| c > target) {
                    return Err(DomainError::validation(
                        ValidationKind::MustBeatIfPossible,
                        "Must beat the single while the next seat is on their last card",
                    ));
                }
            }
        }
    }

    state.round.consecutive_passes += 1;
    if state.round.consecutive_passes >= PASSES_TO_RESOLVE {
        let (leader, cleared_timer) = resolve_trick(state)?;
        return Ok(PassOutcome {
            resolved_leader: Some(leader),
            cleared_timer,
        });
    }

    match advance_with_skips(state, seat) {
        AdvanceStop::Turn(next) => {
            state.turn = Some(next);
            Ok(PassOutcome {
                resolved_leader: None,
                cleared_timer: None,
            })
        }
        AdvanceStop::Resolve => {
            let (leader, cleared_timer) = resolve_trick(state)?;
            Ok(PassOutcome {
                resolved_leader: Some(leader),
                cleared_timer,
            })
        }
    }
}

/// Card count of the next seat that would act after `seat`, if any.
pub fn next_seat_card_count(state: &TableState, seat: Seat) -> Option<usize> {
    next_unfinished_seat(state, seat).map(|s| state.hands[s as usize].len())
}

enum AdvanceStop {
    Turn(Seat),
    Resolve,
}

/// Walk clockwise from `from` to the next seat holding cards. Every finished
/// seat crossed counts as an implicit pass and can resolve the trick
/// mid-walk.
fn advance_with_skips(state: &mut TableState, from: Seat) -> AdvanceStop {
    let mut cursor = from;
    loop {
        cursor = next_seat(cursor);
        if !state.seat_finished(cursor) {
            return AdvanceStop::Turn(cursor);
        }
        state.round.consecutive_passes += 1;
        if state.round.consecutive_passes >= PASSES_TO_RESOLVE {
            return AdvanceStop::Resolve;
        }
    }
}

/// Three passes in: clear the trick and hand the lead to the winner, or to
/// the next unfinished seat clockwise when the winner already finished.
fn resolve_trick(state: &mut TableState) -> Result<(Seat, Option<ClearedTimer>), DomainError> {
    let winner = require_last_player(state, "resolve_trick")?;
    let cleared_timer = state.round.auto_pass.take().map(|t| ClearedTimer {
        sequence_id: t.sequence_id,
        reason: TimerClearReason::TrickResolved,
    });
    state.round.last_accepted = None;
    state.round.last_player = None;
    state.round.consecutive_passes = 0;
    state.round.trick_no += 1;
    let leader = first_unfinished_from(state, winner).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: no unfinished seat at trick resolution")
    })?;
    state.round.trick_leader = Some(leader);
    state.turn = Some(leader);
    Ok((leader, cleared_timer))
}
