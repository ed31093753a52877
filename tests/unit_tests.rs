// Unit tests for PawPal Match

use chrono::{TimeZone, Utc};
use pawpal_match::core::{
    filters::{is_candidate, matches_swipe_mode, role_compatible},
    ledger::{LikesLedger, SwipeLedger},
    lifecycle::{accept, decline, propose, validate_transition, Action},
    photos::{PhotoError, ProfilePhotos},
};
use pawpal_match::models::{perspective_role, status_label, MatchStatus};
use pawpal_match::{MatchState, Meeting, Profile, Proposer, Role, SwipeDecision, SwipeMode};

fn create_test_profile(id: &str, role: Role) -> Profile {
    Profile::new(id, format!("User {}", id), format!("{}@example.com", id), role)
}

fn create_test_meeting() -> Meeting {
    Meeting::new(Utc.with_ymd_and_hms(2026, 7, 4, 8, 0, 0).unwrap(), "Bull Island", 45)
}

#[test]
fn test_role_filter_is_not_symmetric_for_both() {
    // A dual-role user sees owners, but an owner never sees other owners
    assert!(role_compatible(Role::Both, Role::Owner));
    assert!(!role_compatible(Role::Owner, Role::Owner));
    assert!(role_compatible(Role::Owner, Role::Both));
}

#[test]
fn test_candidate_excludes_self_even_with_compatible_role() {
    let me = create_test_profile("me", Role::Both);
    let twin = Profile { name: "Someone else".to_string(), ..me.clone() };

    assert!(!is_candidate(&me, &twin));
    assert!(is_candidate(&me, &create_test_profile("u1", Role::Both)));
}

#[test]
fn test_swipe_mode_default_is_volunteers() {
    assert_eq!(SwipeMode::default(), SwipeMode::Volunteers);
    assert!(matches_swipe_mode(Role::Both, SwipeMode::default(), Role::Both));
    assert!(!matches_swipe_mode(Role::Both, SwipeMode::default(), Role::Owner));
}

#[test]
fn test_swipe_ledger_records_both_directions() {
    let mut ledger = SwipeLedger::new();
    ledger.record("u1", SwipeDecision::Liked);
    ledger.record("u2", SwipeDecision::Passed);

    assert!(ledger.contains("u1"));
    assert!(ledger.contains("u2"));
    assert!(!ledger.contains("u3"));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_likes_ledger_is_per_user() {
    let mut likes = LikesLedger::new();
    likes.append("me", "u1");
    likes.append("u9", "u2");

    assert_eq!(likes.liked_by("me").len(), 1);
    assert_eq!(likes.liked_by("u9")[0], "u2");
}

#[test]
fn test_lifecycle_full_walk() {
    let meeting = create_test_meeting();

    let proposed = propose(&MatchState::Unscheduled, meeting.clone(), Proposer::Them).unwrap();
    let confirmed = accept(&proposed).unwrap();

    assert_eq!(confirmed.status(), MatchStatus::Confirmed);
    assert_eq!(confirmed.meeting(), Some(&meeting));
    assert!(decline(&confirmed).is_err());
}

#[test]
fn test_lifecycle_error_reports_origin() {
    let err = accept(&MatchState::Unscheduled).unwrap_err();
    assert_eq!(err.from, MatchStatus::None);
    assert_eq!(err.action, Action::Accept);
    assert_eq!(err.to_string(), "cannot accept a match in state none");
}

#[test]
fn test_counter_proposal_is_a_propose() {
    let mine = MatchState::Proposed { meeting: create_test_meeting(), proposer: Proposer::Me };
    let mut other_terms = create_test_meeting();
    other_terms.place = "Dollymount Strand".to_string();
    let theirs = MatchState::Proposed { meeting: other_terms, proposer: Proposer::Them };

    assert_eq!(validate_transition(&mine, &theirs), Ok(Some(Action::Propose)));
}

#[test]
fn test_photo_limit_message() {
    let mut photos = ProfilePhotos::new(1);
    photos.add("a.jpg").unwrap();

    let err = photos.add("b.jpg").unwrap_err();
    assert_eq!(err, PhotoError::LimitReached(1));
    assert_eq!(err.to_string(), "You can only upload up to 1 photos");
}

#[test]
fn test_summary_helpers() {
    assert_eq!(status_label(MatchStatus::None), "New Match!");
    assert_eq!(status_label(MatchStatus::Confirmed), "Meeting Confirmed!");
    assert_eq!(perspective_role(Role::Volunteer, Role::Owner), Role::Volunteer);
}
