#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

//! Boundary protection for the API: keyed rate limiters and input validation
//!
//! Everything here runs before any upstream call is attempted.

mod error;
mod limiter;
mod limits;
mod validate;

pub use error::{LimitScope, RateLimitError, ValidationError};
pub use limiter::KeyedLimiter;
pub use limits::RateLimiters;
pub use validate::{MAX_PROMPT_CHARS, MAX_TEXT_CHARS, validate_generation, validate_synthesis};
