use chrono::Utc;
use pawpal_match::config::Settings;
use pawpal_match::services::Dataset;
use pawpal_match::{Role, Session, SwipeMode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Walks one scripted session: sign in, swipe through the feed, schedule a walk.
///
/// Credentials come from PAWPAL_DEMO_EMAIL / PAWPAL_DEMO_PASSWORD and default
/// to the first fixture account. Set PAWPAL_DEMO_SIGNUP=1 to register a new
/// volunteer instead.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        Settings::default()
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting PawPal match demo...");

    let dataset = Dataset::load_or_bundled(settings.dataset.path.as_deref()).map_err(|e| {
        error!("Failed to load profiles: {}", e);
        e
    })?;

    info!("Loaded {} profiles", dataset.len());

    let mut session = Session::new(settings, dataset);

    let signed_in = if std::env::var("PAWPAL_DEMO_SIGNUP").is_ok() {
        session
            .signup("Demo Walker", "demo.walker@example.com", "walkies", Role::Volunteer)
            .await
    } else {
        let email = std::env::var("PAWPAL_DEMO_EMAIL").unwrap_or_else(|_| "aoife@example.com".to_string());
        let password = std::env::var("PAWPAL_DEMO_PASSWORD").unwrap_or_else(|_| "password123".to_string());
        session.login(&email, &password).await
    };

    match signed_in {
        Ok(me) => info!("Signed in as {} ({}, {})", me.name, me.id, me.role),
        Err(e) => {
            error!("Sign in failed: {}", e);
            return Err(e.into());
        }
    }

    // Like every candidate with a photo, pass on the rest
    let candidates: Vec<(String, bool)> = session
        .engine()
        .feed_for_mode(SwipeMode::default())
        .map(|p| (p.id.clone(), p.photo_url.is_some()))
        .collect();

    for (id, has_photo) in candidates {
        let engine = session.engine_mut();
        if has_photo {
            match engine.like(&id)? {
                Some(m) => info!("It's a match with {}!", m.other.name),
                None => info!("Liked {}", id),
            }
        } else {
            engine.pass(&id)?;
            info!("Passed on {}", id);
        }
    }

    let first = session.engine().matches().next().map(|m| m.id.clone());
    match first {
        Some(match_id) => {
            let req = session.proposal_defaults(Utc::now());
            let proposed = session.propose(&match_id, req)?;
            info!("Proposed a walk with {}", proposed.other.name);
        }
        None => warn!("No matches this time"),
    }

    println!("{}", serde_json::to_string_pretty(&session.match_summaries())?);

    Ok(())
}
