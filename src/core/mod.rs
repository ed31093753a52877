// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod ledger;
pub mod lifecycle;
pub mod photos;

pub use engine::{EngineError, MatchEngine};
pub use filters::{is_candidate, matches_swipe_mode, role_compatible};
pub use ledger::{LikesLedger, SwipeLedger};
pub use lifecycle::{Action, TransitionError};
pub use photos::{PhotoError, ProfilePhotos};
