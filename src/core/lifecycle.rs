//! Meeting lifecycle for a match.
//!
//! ```text
//! none ──propose──▶ proposed ──accept (their terms)──▶ confirmed
//!   ▲                  │  ▲
//!   └─────decline──────┘  └── propose (counter-offer)
//! ```
//!
//! Nothing leaves `confirmed`.

use std::fmt;
use thiserror::Error;
use crate::models::{MatchState, MatchStatus, Meeting, Proposer};

/// Caller-level actions that move a match between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Propose,
    Accept,
    Decline,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Propose => "propose",
            Action::Accept => "accept",
            Action::Decline => "decline",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} a match in state {from}")]
pub struct TransitionError {
    pub from: MatchStatus,
    pub action: Action,
}

impl TransitionError {
    fn new(from: &MatchState, action: Action) -> Self {
        Self {
            from: from.status(),
            action,
        }
    }
}

/// Put meeting terms on the table
pub fn propose(
    current: &MatchState,
    meeting: Meeting,
    proposer: Proposer,
) -> Result<MatchState, TransitionError> {
    match current {
        MatchState::Unscheduled | MatchState::Proposed { .. } => {
            Ok(MatchState::Proposed { meeting, proposer })
        }
        MatchState::Confirmed { .. } => Err(TransitionError::new(current, Action::Propose)),
    }
}

/// Accept the counterpart's proposal. My own proposal has to wait for them.
pub fn accept(current: &MatchState) -> Result<MatchState, TransitionError> {
    match current {
        MatchState::Proposed {
            meeting,
            proposer: Proposer::Them,
        } => Ok(MatchState::Confirmed {
            meeting: meeting.clone(),
        }),
        _ => Err(TransitionError::new(current, Action::Accept)),
    }
}

/// Drop the pending proposal and go back to unscheduled
pub fn decline(current: &MatchState) -> Result<MatchState, TransitionError> {
    match current {
        MatchState::Proposed { .. } => Ok(MatchState::Unscheduled),
        _ => Err(TransitionError::new(current, Action::Decline)),
    }
}

/// Classify an overwrite from `from` to `to`.
///
/// Returns `Ok(None)` when the two states are identical, the action the
/// overwrite amounts to when it is legal, and an error otherwise.
pub fn validate_transition(
    from: &MatchState,
    to: &MatchState,
) -> Result<Option<Action>, TransitionError> {
    if from == to {
        return Ok(None);
    }

    match to {
        MatchState::Proposed { meeting, proposer } => {
            propose(from, meeting.clone(), *proposer)?;
            Ok(Some(Action::Propose))
        }
        MatchState::Confirmed { meeting } => match accept(from)? {
            MatchState::Confirmed { meeting: agreed } if &agreed == meeting => Ok(Some(Action::Accept)),
            // Accepting has to keep the proposed terms
            _ => Err(TransitionError::new(from, Action::Accept)),
        },
        MatchState::Unscheduled => {
            decline(from)?;
            Ok(Some(Action::Decline))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn meeting(place: &str) -> Meeting {
        Meeting::new(Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap(), place, 30)
    }

    fn proposed(place: &str, proposer: Proposer) -> MatchState {
        MatchState::Proposed {
            meeting: meeting(place),
            proposer,
        }
    }

    #[test]
    fn test_propose_from_none_and_counter_offer() {
        let state = propose(&MatchState::Unscheduled, meeting("Park"), Proposer::Me).unwrap();
        assert_eq!(state, proposed("Park", Proposer::Me));

        let countered = propose(&state, meeting("Pier"), Proposer::Them).unwrap();
        assert_eq!(countered, proposed("Pier", Proposer::Them));
    }

    #[test]
    fn test_accept_only_their_proposal() {
        let confirmed = accept(&proposed("Park", Proposer::Them)).unwrap();
        assert_eq!(confirmed, MatchState::Confirmed { meeting: meeting("Park") });

        let err = accept(&proposed("Park", Proposer::Me)).unwrap_err();
        assert_eq!(err.action, Action::Accept);
        assert_eq!(err.from, MatchStatus::Proposed);

        assert!(accept(&MatchState::Unscheduled).is_err());
        assert!(accept(&confirmed).is_err());
    }

    #[test]
    fn test_decline_clears_schedule() {
        assert_eq!(decline(&proposed("Park", Proposer::Me)).unwrap(), MatchState::Unscheduled);
        assert_eq!(decline(&proposed("Park", Proposer::Them)).unwrap(), MatchState::Unscheduled);
        assert!(decline(&MatchState::Unscheduled).is_err());
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let confirmed = MatchState::Confirmed { meeting: meeting("Park") };

        assert!(propose(&confirmed, meeting("Pier"), Proposer::Me).is_err());
        assert!(decline(&confirmed).is_err());
        assert!(validate_transition(&confirmed, &MatchState::Unscheduled).is_err());
        assert_eq!(validate_transition(&confirmed, &confirmed), Ok(None));
    }

    #[test]
    fn test_validate_transition_classifies_overwrites() {
        let none = MatchState::Unscheduled;
        let mine = proposed("Park", Proposer::Me);
        let theirs = proposed("Park", Proposer::Them);
        let confirmed = MatchState::Confirmed { meeting: meeting("Park") };

        assert_eq!(validate_transition(&none, &mine), Ok(Some(Action::Propose)));
        assert_eq!(validate_transition(&mine, &none), Ok(Some(Action::Decline)));
        assert_eq!(validate_transition(&theirs, &confirmed), Ok(Some(Action::Accept)));

        // Skipping the proposal, or accepting my own offer
        assert!(validate_transition(&none, &confirmed).is_err());
        assert!(validate_transition(&mine, &confirmed).is_err());
    }

    #[test]
    fn test_accept_must_keep_terms() {
        let theirs = proposed("Park", Proposer::Them);
        let altered = MatchState::Confirmed { meeting: meeting("Pier") };

        let err = validate_transition(&theirs, &altered).unwrap_err();
        assert_eq!(err.to_string(), "cannot accept a match in state proposed");
    }
}
