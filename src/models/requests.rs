use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::SchedulingSettings;
use crate::models::domain::{Meeting, Role};

/// Credentials submitted on the login form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Account details submitted on the signup form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            password: password.into(),
            role,
        }
    }
}

/// Meeting terms entered on the match detail screen
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProposeRequest {
    #[serde(rename = "startAt", with = "chrono::serde::ts_milliseconds")]
    pub start_at: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub place: String,
    #[validate(range(min = 5, max = 480))]
    pub duration: u32,
}

impl ProposeRequest {
    /// Form defaults: the configured place and duration, starting `lead_minutes` from `now`.
    ///
    /// A lead time that does not fit a timestamp falls back to the built-in default.
    pub fn with_defaults(settings: &SchedulingSettings, now: DateTime<Utc>) -> Self {
        let start_at = Duration::try_minutes(settings.lead_minutes)
            .and_then(|lead| now.checked_add_signed(lead))
            .unwrap_or_else(|| {
                tracing::warn!("lead_minutes {} out of range, using default", settings.lead_minutes);
                now + Duration::minutes(SchedulingSettings::default().lead_minutes)
            });

        Self {
            start_at,
            place: settings.default_place.clone(),
            duration: settings.default_duration_minutes,
        }
    }

    pub fn into_meeting(self) -> Meeting {
        Meeting::new(self.start_at, self.place.trim(), self.duration)
    }
}
