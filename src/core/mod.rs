//! Core domain logic for the account page.

pub mod auth;
pub mod notice;
pub mod validation;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod dev_api;

pub use auth::{
    AuthBackend, AuthMode, Credentials, HttpAuthBackend, SignupRequest, SubmitOutcome, submit,
};
pub use notice::{Notice, Severity};
pub use validation::{ValidationError, validate_submission};
