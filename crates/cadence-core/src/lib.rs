#![allow(clippy::must_use_candidate)]

mod error;
mod types;

pub use error::{ErrorBody, HttpError};
pub use types::{GeneratedText, GenerationMode, GenerationRequest, SynthesisRequest};
