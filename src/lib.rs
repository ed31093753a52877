//! PawPal Match - swipe and meeting engine for the PawPal dog-walking app
//!
//! Owners and volunteers swipe on each other; a mutual like becomes a match,
//! and a match moves through proposing, accepting or declining a walk.
//! All data is local: a bundled profile fixture and in-memory session state.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, MatchEngine};
pub use models::{Match, MatchState, MatchSummary, Meeting, Profile, Proposer, Role, SwipeDecision, SwipeMode};
pub use services::Dataset;
pub use session::{Session, SessionError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let dataset = Dataset::bundled().unwrap();
        let engine = MatchEngine::new(Profile::new("me", "You", "you@example.com", Role::Both), dataset.profiles());
        assert!(engine.feed().count() > 0);
    }
}
