#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the Cadence generation service
//!
//! Besides one method per endpoint, [`Session`] tracks the prompt → text →
//! audio flow on the client side, since the server keeps no flow state.

mod client;
pub mod error;
mod flow;
pub mod types;

pub use cadence_core::{GeneratedText, GenerationMode};
pub use client::CadenceClient;
pub use error::{ClientError, Result};
pub use flow::{Flow, Session, VoiceSelection};
pub use types::*;
