// Service exports
pub mod auth;
pub mod dataset;

pub use auth::{AuthError, Authenticator};
pub use dataset::{Dataset, DatasetError};
