use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a walk a profile is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Volunteer,
    Both,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Owner => "owner",
            Role::Volunteer => "volunteer",
            Role::Both => "both",
        };
        f.write_str(s)
    }
}

/// A candidate in the matching pool, or the local user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt2: Option<String>,
    #[serde(rename = "largeOk", default, skip_serializing_if = "Option::is_none")]
    pub large_ok: Option<bool>,
    #[serde(rename = "reactiveOk", default, skip_serializing_if = "Option::is_none")]
    pub reactive_ok: Option<bool>,
    /// Fixture stand-in for the other side's swipe history
    #[serde(rename = "likedUserIds", default, skip_serializing_if = "Vec::is_empty")]
    pub liked_user_ids: Vec<String>,
}

impl Profile {
    /// Fresh profile with only the required fields set
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            city: None,
            photo_url: None,
            prompt1: None,
            prompt2: None,
            large_ok: None,
            reactive_ok: None,
            liked_user_ids: Vec::new(),
        }
    }

    /// Whether this profile's simulated swipe history contains `user_id`
    pub fn has_liked(&self, user_id: &str) -> bool {
        self.liked_user_ids.iter().any(|id| id == user_id)
    }

    pub fn large_ok(&self) -> bool {
        self.large_ok.unwrap_or(false)
    }

    pub fn reactive_ok(&self) -> bool {
        self.reactive_ok.unwrap_or(false)
    }
}

/// Profile record as stored in the mock dataset, credentials included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileRecord {
    /// The fields a logged-in user takes over from this record.
    ///
    /// The password stays behind, and so does the simulated swipe history:
    /// that list describes what *others* see of this account.
    pub fn public_profile(&self) -> Profile {
        Profile {
            liked_user_ids: Vec::new(),
            ..self.profile.clone()
        }
    }
}

/// Swipe decision recorded for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Liked,
    Passed,
}

/// Extra feed filter for users with role `both`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeMode {
    /// Looking for someone to walk my dog
    #[default]
    Volunteers,
    /// Looking for dogs to walk
    Owners,
}

/// Who suggested the pending meeting terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proposer {
    Me,
    Them,
}

/// Meeting terms attached to a proposed or confirmed match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(rename = "startAt", with = "chrono::serde::ts_milliseconds")]
    pub start_at: DateTime<Utc>,
    pub place: String,
    /// Minutes
    pub duration: u32,
}

impl Meeting {
    /// `start_at` is cut to whole milliseconds, the precision `startAt` is written with
    pub fn new(start_at: DateTime<Utc>, place: impl Into<String>, duration: u32) -> Self {
        Self {
            start_at: DateTime::from_timestamp_millis(start_at.timestamp_millis()).unwrap_or(start_at),
            place: place.into(),
            duration,
        }
    }
}

/// Scheduling state of a match. Field presence is carried by the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MatchState {
    /// Matched, nothing scheduled yet
    #[serde(rename = "none")]
    Unscheduled,
    Proposed {
        #[serde(flatten)]
        meeting: Meeting,
        proposer: Proposer,
    },
    Confirmed {
        #[serde(flatten)]
        meeting: Meeting,
    },
}

impl MatchState {
    pub fn status(&self) -> MatchStatus {
        match self {
            MatchState::Unscheduled => MatchStatus::None,
            MatchState::Proposed { .. } => MatchStatus::Proposed,
            MatchState::Confirmed { .. } => MatchStatus::Confirmed,
        }
    }

    pub fn meeting(&self) -> Option<&Meeting> {
        match self {
            MatchState::Unscheduled => None,
            MatchState::Proposed { meeting, .. } | MatchState::Confirmed { meeting } => Some(meeting),
        }
    }

    pub fn proposer(&self) -> Option<Proposer> {
        match self {
            MatchState::Proposed { proposer, .. } => Some(*proposer),
            _ => None,
        }
    }
}

/// Bare state tag, used in errors and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    None,
    Proposed,
    Confirmed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::None => "none",
            MatchStatus::Proposed => "proposed",
            MatchStatus::Confirmed => "confirmed",
        };
        f.write_str(s)
    }
}

/// Mutual-like pairing between the local user and one other profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    /// Snapshot taken when the match was created
    pub other: Profile,
    #[serde(flatten)]
    pub state: MatchState,
}

impl Match {
    /// New unscheduled match with a generated id
    pub fn new(other: Profile) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            other,
            state: MatchState::Unscheduled,
        }
    }

    pub fn with_state(&self, state: MatchState) -> Self {
        Self {
            id: self.id.clone(),
            other: self.other.clone(),
            state,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }
}
