use serde::{Deserialize, Serialize};
use crate::models::domain::{Match, MatchStatus, Meeting, Profile, Proposer, Role};

/// Read-only view of a match for list and detail screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "otherId")]
    pub other_id: String,
    #[serde(rename = "otherName")]
    pub other_name: String,
    pub status: MatchStatus,
    #[serde(rename = "statusLabel")]
    pub status_label: String,
    /// The local user's side of this pairing
    #[serde(rename = "myRole")]
    pub my_role: Role,
    /// True while my own proposal waits on the other side
    #[serde(rename = "awaitingOther")]
    pub awaiting_other: bool,
    pub meeting: Option<Meeting>,
}

impl MatchSummary {
    pub fn new(me: &Profile, m: &Match) -> Self {
        Self {
            match_id: m.id.clone(),
            other_id: m.other.id.clone(),
            other_name: m.other.name.clone(),
            status: m.status(),
            status_label: status_label(m.status()).to_string(),
            my_role: perspective_role(me.role, m.other.role),
            awaiting_other: m.state.proposer() == Some(Proposer::Me),
            meeting: m.state.meeting().cloned(),
        }
    }
}

pub fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::None => "New Match!",
        MatchStatus::Proposed => "Proposal Pending",
        MatchStatus::Confirmed => "Meeting Confirmed!",
    }
}

/// Which side of the walk I am on for this match.
///
/// Single-role users keep their role; a `both` user takes the side
/// opposite the counterpart.
pub fn perspective_role(mine: Role, other: Role) -> Role {
    match (mine, other) {
        (Role::Owner, _) => Role::Owner,
        (Role::Volunteer, _) => Role::Volunteer,
        (Role::Both, Role::Owner) => Role::Volunteer,
        (Role::Both, Role::Volunteer) => Role::Owner,
        (Role::Both, Role::Both) => Role::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::MatchState;
    use chrono::Utc;

    #[test]
    fn test_perspective_role() {
        assert_eq!(perspective_role(Role::Owner, Role::Both), Role::Owner);
        assert_eq!(perspective_role(Role::Both, Role::Owner), Role::Volunteer);
        assert_eq!(perspective_role(Role::Both, Role::Volunteer), Role::Owner);
        assert_eq!(perspective_role(Role::Both, Role::Both), Role::Both);
    }

    #[test]
    fn test_summary_for_pending_proposal() {
        let me = Profile::new("me", "You", "you@example.com", Role::Both);
        let other = Profile::new("u2", "Cian", "cian@example.com", Role::Volunteer);
        let m = Match::new(other).with_state(MatchState::Proposed {
            meeting: Meeting::new(Utc::now(), "Park", 30),
            proposer: Proposer::Me,
        });

        let summary = MatchSummary::new(&me, &m);
        assert_eq!(summary.status_label, "Proposal Pending");
        assert_eq!(summary.my_role, Role::Owner);
        assert!(summary.awaiting_other);
        assert_eq!(summary.meeting.map(|mt| mt.place), Some("Park".to_string()));
    }
}
