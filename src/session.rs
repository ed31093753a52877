//! Application state for one app run: who is signed in, their profile and
//! photos, and the match engine working on their behalf.
//!
//! Views get a `&Session` or `&mut Session`; all match mutations go through
//! [`Session::engine_mut`] or the helpers here.

use chrono::{DateTime, Utc};
use thiserror::Error;
use validator::Validate;

use crate::config::Settings;
use crate::core::{EngineError, MatchEngine, PhotoError, ProfilePhotos};
use crate::models::{LoginRequest, Match, MatchSummary, Meeting, Profile, ProposeRequest, Role, SignupRequest};
use crate::services::{AuthError, Authenticator, Dataset};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error("Invalid proposal: {0}")]
    InvalidProposal(#[from] validator::ValidationErrors),
}

pub struct Session {
    settings: Settings,
    dataset: Dataset,
    auth: Authenticator,
    authenticated: bool,
    engine: MatchEngine,
    photos: ProfilePhotos,
}

impl Session {
    pub fn new(settings: Settings, dataset: Dataset) -> Self {
        let auth = Authenticator::new(dataset.records().to_vec(), settings.auth.simulated_delay());
        let me = default_profile(&settings);
        let engine = MatchEngine::new(me, dataset.profiles());
        let photos = ProfilePhotos::new(settings.profile.max_photos);

        Self {
            settings,
            dataset,
            auth,
            authenticated: false,
            engine,
            photos,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&Profile> {
        self.authenticated.then(|| self.engine.me())
    }

    pub fn me(&self) -> &Profile {
        self.engine.me()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MatchEngine {
        &mut self.engine
    }

    /// Sign in with a dataset or session account.
    ///
    /// On success the local profile becomes the account's public fields and
    /// the swipe history starts over. On failure nothing changes.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Profile, SessionError> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let record = self.auth.login(&req).await?;

        self.start(record.public_profile());
        Ok(self.engine.me())
    }

    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<&Profile, SessionError> {
        let req = SignupRequest::new(name, email, password, role);
        let profile = self.auth.signup(&req, &self.settings.profile.default_city).await?;

        self.start(profile);
        Ok(self.engine.me())
    }

    /// Back to the signed-out defaults with empty ledgers and no matches
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            tracing::info!("Logging out {}", user.id);
        }
        self.authenticated = false;
        self.engine = MatchEngine::new(default_profile(&self.settings), self.dataset.profiles());
        self.photos = ProfilePhotos::new(self.settings.profile.max_photos);
    }

    pub fn photos(&self) -> &[String] {
        self.photos.as_slice()
    }

    pub fn add_photo(&mut self, uri: impl Into<String>) -> Result<(), SessionError> {
        self.photos.add(uri)?;
        self.photos.sync(self.engine.me_mut());
        Ok(())
    }

    pub fn remove_photo(&mut self, index: usize) -> Result<String, SessionError> {
        let removed = self.photos.remove(index)?;
        self.photos.sync(self.engine.me_mut());
        Ok(removed)
    }

    pub fn move_photo(&mut self, from: usize, to: usize) -> Result<(), SessionError> {
        self.photos.move_photo(from, to)?;
        self.photos.sync(self.engine.me_mut());
        Ok(())
    }

    /// Proposal form prefilled from the scheduling settings
    pub fn proposal_defaults(&self, now: DateTime<Utc>) -> ProposeRequest {
        ProposeRequest::with_defaults(&self.settings.scheduling, now)
    }

    /// Validate the form and propose it as the local user
    pub fn propose(&mut self, match_id: &str, req: ProposeRequest) -> Result<&Match, SessionError> {
        req.validate()?;
        let meeting: Meeting = req.into_meeting();
        Ok(self.engine.propose(match_id, meeting)?)
    }

    pub fn match_summaries(&self) -> Vec<MatchSummary> {
        let me = self.engine.me();
        self.engine
            .matches()
            .map(|m| MatchSummary::new(me, m))
            .collect()
    }

    fn start(&mut self, me: Profile) {
        self.photos = ProfilePhotos::from_profile(&me, self.settings.profile.max_photos);
        self.engine = MatchEngine::new(me, self.dataset.profiles());
        self.authenticated = true;
    }
}

/// Placeholder identity used while signed out
fn default_profile(settings: &Settings) -> Profile {
    let mut me = Profile::new("me", "You", "you@example.com", Role::Both);
    me.city = Some(settings.profile.default_city.clone());
    me
}
