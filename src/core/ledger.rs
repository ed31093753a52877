use std::collections::HashMap;
use crate::models::SwipeDecision;

/// Last swipe decision per profile id
#[derive(Debug, Clone, Default)]
pub struct SwipeLedger {
    decisions: HashMap<String, SwipeDecision>,
}

impl SwipeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision, replacing any earlier one for the same id
    pub fn record(&mut self, profile_id: &str, decision: SwipeDecision) -> Option<SwipeDecision> {
        self.decisions.insert(profile_id.to_string(), decision)
    }

    pub fn decision(&self, profile_id: &str) -> Option<SwipeDecision> {
        self.decisions.get(profile_id).copied()
    }

    pub fn contains(&self, profile_id: &str) -> bool {
        self.decisions.contains_key(profile_id)
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// Ordered liked ids per user
#[derive(Debug, Clone, Default)]
pub struct LikesLedger {
    likes: HashMap<String, Vec<String>>,
}

impl LikesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `liked_id` to `user_id`'s list. Returns false if it was already there.
    pub fn append(&mut self, user_id: &str, liked_id: &str) -> bool {
        let liked = self.likes.entry(user_id.to_string()).or_default();
        if liked.iter().any(|id| id == liked_id) {
            return false;
        }
        liked.push(liked_id.to_string());
        true
    }

    pub fn liked_by(&self, user_id: &str) -> &[String] {
        self.likes.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_decision_wins() {
        let mut ledger = SwipeLedger::new();
        assert_eq!(ledger.record("u1", SwipeDecision::Passed), None);
        assert_eq!(ledger.record("u1", SwipeDecision::Liked), Some(SwipeDecision::Passed));

        assert_eq!(ledger.decision("u1"), Some(SwipeDecision::Liked));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_likes_keep_order_without_duplicates() {
        let mut likes = LikesLedger::new();
        assert!(likes.append("me", "u2"));
        assert!(likes.append("me", "u1"));
        assert!(!likes.append("me", "u2"));

        assert_eq!(likes.liked_by("me"), ["u2".to_string(), "u1".to_string()]);
        assert!(likes.liked_by("someone-else").is_empty());
    }
}
