use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;

use crate::core::{
    filters::{is_candidate, matches_swipe_mode},
    ledger::{LikesLedger, SwipeLedger},
    lifecycle::{self, Action, TransitionError},
};
use crate::models::{Match, MatchState, MatchStatus, Meeting, Profile, Proposer, SwipeDecision, SwipeMode};

/// Errors raised by match engine commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown match: {0}")]
    UnknownMatch(String),

    #[error("Invalid state transition for match {match_id}: cannot {action} from {from}")]
    InvalidStateTransition {
        match_id: String,
        from: MatchStatus,
        action: Action,
    },
}

impl EngineError {
    fn transition(match_id: &str, err: TransitionError) -> Self {
        EngineError::InvalidStateTransition {
            match_id: match_id.to_string(),
            from: err.from,
            action: err.action,
        }
    }
}

/// Swipe ledger, likes ledger and match collection for one local user
///
/// Every command runs to completion before returning; the delayed-match
/// scan runs synchronously at the end of each likes-ledger mutation.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    me: Profile,
    profiles: Arc<[Profile]>,
    index: HashMap<String, usize>,
    swipes: SwipeLedger,
    likes: LikesLedger,
    /// Most recent first
    matches: VecDeque<Match>,
}

impl MatchEngine {
    pub fn new(me: Profile, profiles: Arc<[Profile]>) -> Self {
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Self {
            me,
            profiles,
            index,
            swipes: SwipeLedger::new(),
            likes: LikesLedger::new(),
            matches: VecDeque::new(),
        }
    }

    pub fn me(&self) -> &Profile {
        &self.me
    }

    /// Mutable access for profile editing. Feed results follow role changes.
    ///
    /// The `id` must stay as it is; use [`set_me`](Self::set_me) to switch users.
    pub fn me_mut(&mut self) -> &mut Profile {
        &mut self.me
    }

    /// Replace the local profile. A different id starts over with empty
    /// ledgers and no matches, since those belong to the previous user.
    pub fn set_me(&mut self, me: Profile) {
        if me.id != self.me.id {
            tracing::info!("Local user changed from {} to {}, resetting ledgers", self.me.id, me.id);
            self.swipes = SwipeLedger::new();
            self.likes = LikesLedger::new();
            self.matches.clear();
        }
        self.me = me;
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.index.get(id).map(|&i| &self.profiles[i])
    }

    /// Candidates still eligible for swiping.
    ///
    /// Lazy and restartable: each call walks the dataset again against the
    /// current ledger and role.
    pub fn feed(&self) -> impl Iterator<Item = &Profile> + '_ {
        self.profiles
            .iter()
            .filter(move |p| is_candidate(&self.me, p) && !self.swipes.contains(&p.id))
    }

    /// [`feed`](Self::feed) narrowed by the swipe mode of a `both` user
    pub fn feed_for_mode(&self, mode: SwipeMode) -> impl Iterator<Item = &Profile> + '_ {
        let role = self.me.role;
        self.feed()
            .filter(move |p| matches_swipe_mode(role, mode, p.role))
    }

    /// Swipe right on a candidate.
    ///
    /// Returns the match when the candidate already liked the local user.
    /// Liking an already matched candidate hands back the existing match.
    pub fn like(&mut self, candidate_id: &str) -> Result<Option<Match>, EngineError> {
        let candidate = self.candidate(candidate_id)?.clone();

        self.swipes.record(candidate_id, SwipeDecision::Liked);
        let appended = self.likes.append(&self.me.id, candidate_id);

        tracing::debug!("{} liked {}", self.me.id, candidate_id);

        if !candidate.has_liked(&self.me.id) {
            if appended {
                self.reconcile();
            }
            return Ok(None);
        }

        let matched = match self.match_for(candidate_id) {
            Some(existing) => existing.clone(),
            None => self.insert_match(candidate),
        };

        if appended {
            self.reconcile();
        }

        Ok(Some(matched))
    }

    /// Swipe left on a candidate. Repeating it changes nothing.
    pub fn pass(&mut self, candidate_id: &str) -> Result<(), EngineError> {
        self.candidate(candidate_id)?;
        self.swipes.record(candidate_id, SwipeDecision::Passed);

        tracing::debug!("{} passed on {}", self.me.id, candidate_id);
        Ok(())
    }

    /// Delayed-match scan.
    ///
    /// Creates a match for every liked profile that likes the local user
    /// back and has no match yet. Returns the matches it created; running it
    /// again without new likes returns nothing.
    pub fn reconcile(&mut self) -> Vec<Match> {
        let pending: Vec<Profile> = self
            .likes
            .liked_by(&self.me.id)
            .iter()
            .filter_map(|id| self.profile(id))
            .filter(|p| p.has_liked(&self.me.id))
            .filter(|p| self.match_for(&p.id).is_none())
            .cloned()
            .collect();

        let mut created = Vec::with_capacity(pending.len());
        for other in pending {
            tracing::info!("Delayed match found for {} with {}", self.me.id, other.id);
            created.push(self.insert_match(other));
        }
        created
    }

    /// All matches, most recent first
    pub fn matches(&self) -> impl ExactSizeIterator<Item = &Match> + '_ {
        self.matches.iter()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn get_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn match_for(&self, profile_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.other.id == profile_id)
    }

    pub fn swipe_decision(&self, profile_id: &str) -> Option<SwipeDecision> {
        self.swipes.decision(profile_id)
    }

    pub fn liked_ids(&self) -> &[String] {
        self.likes.liked_by(&self.me.id)
    }

    /// Overwrite a stored match by id.
    ///
    /// The new value has to keep the same counterpart and amount to a legal
    /// lifecycle step from the stored state. An unknown id is ignored.
    pub fn update_match(&mut self, update: Match) -> Result<(), EngineError> {
        let Some(slot) = self.matches.iter_mut().find(|m| m.id == update.id) else {
            tracing::debug!("Ignoring update for unknown match {}", update.id);
            return Ok(());
        };

        if slot.other.id != update.other.id {
            return Err(EngineError::InvalidArgument(format!(
                "match {} belongs to {}, not {}",
                update.id, slot.other.id, update.other.id
            )));
        }

        match lifecycle::validate_transition(&slot.state, &update.state) {
            Ok(action) => {
                if let Some(action) = action {
                    tracing::info!("Match {}: {} -> {} ({})", update.id, slot.status(), update.status(), action);
                }
                // Keep the snapshot taken at match time
                slot.state = update.state;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected update for match {}: {}", update.id, e);
                Err(EngineError::transition(&update.id, e))
            }
        }
    }

    /// Propose meeting terms as the local user
    pub fn propose(&mut self, match_id: &str, meeting: Meeting) -> Result<&Match, EngineError> {
        self.transition(match_id, |state| lifecycle::propose(state, meeting, Proposer::Me))
    }

    /// Record a proposal coming from the counterpart
    pub fn receive_proposal(&mut self, match_id: &str, meeting: Meeting) -> Result<&Match, EngineError> {
        self.transition(match_id, |state| lifecycle::propose(state, meeting, Proposer::Them))
    }

    pub fn accept(&mut self, match_id: &str) -> Result<&Match, EngineError> {
        self.transition(match_id, lifecycle::accept)
    }

    pub fn decline(&mut self, match_id: &str) -> Result<&Match, EngineError> {
        self.transition(match_id, lifecycle::decline)
    }

    fn transition<F>(&mut self, match_id: &str, step: F) -> Result<&Match, EngineError>
    where
        F: FnOnce(&MatchState) -> Result<MatchState, TransitionError>,
    {
        let slot = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| EngineError::UnknownMatch(match_id.to_string()))?;

        let next = step(&slot.state).map_err(|e| {
            tracing::warn!("Match {}: {}", match_id, e);
            EngineError::transition(match_id, e)
        })?;

        tracing::info!("Match {}: {} -> {}", match_id, slot.status(), next.status());
        slot.state = next;
        Ok(slot)
    }

    fn candidate(&self, candidate_id: &str) -> Result<&Profile, EngineError> {
        if candidate_id == self.me.id {
            return Err(EngineError::InvalidArgument(
                "cannot swipe on your own profile".to_string(),
            ));
        }

        self.profile(candidate_id)
            .ok_or_else(|| EngineError::InvalidArgument(format!("unknown profile: {}", candidate_id)))
    }

    fn insert_match(&mut self, other: Profile) -> Match {
        let m = Match::new(other);
        tracing::info!("New match {} between {} and {}", m.id, self.me.id, m.other.id);
        self.matches.push_front(m.clone());
        m
    }
}
