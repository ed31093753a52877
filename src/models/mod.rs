// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Match, MatchState, MatchStatus, Meeting, Profile, ProfileRecord, Proposer, Role, SwipeDecision, SwipeMode};
pub use requests::{LoginRequest, ProposeRequest, SignupRequest};
pub use responses::{MatchSummary, perspective_role, status_label};
