use std::str::FromStr;

use cadence_core::{GenerationMode, GenerationRequest, SynthesisRequest};
use url::Url;

use crate::error::ValidationError;

/// Longest accepted generation prompt, in characters
pub const MAX_PROMPT_CHARS: usize = 500;

/// Longest accepted synthesis text, in characters
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Validate a text generation request
///
/// Checks run in order: prompt present, mode known, prompt length.
pub fn validate_generation(prompt: Option<&str>, mode: Option<&str>) -> Result<GenerationRequest, ValidationError> {
    let prompt = prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or(ValidationError::MissingPrompt)?;

    let mode = mode
        .and_then(|m| GenerationMode::from_str(m).ok())
        .ok_or(ValidationError::InvalidMode)?;

    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(ValidationError::PromptTooLong { max: MAX_PROMPT_CHARS });
    }

    Ok(GenerationRequest {
        prompt: prompt.trim().to_owned(),
        mode,
    })
}

/// Validate an audio synthesis request
///
/// An empty voice URL is treated as absent.
pub fn validate_synthesis(text: Option<&str>, voice_url: Option<&str>) -> Result<SynthesisRequest, ValidationError> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or(ValidationError::MissingText)?;

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong { max: MAX_TEXT_CHARS });
    }

    let voice_url = voice_url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(check_voice_url)
        .transpose()?;

    Ok(SynthesisRequest {
        text: text.to_owned(),
        voice_url,
    })
}

/// Accept absolute http(s) URLs, returning the caller's text unnormalized
fn check_voice_url(raw: &str) -> Result<String, ValidationError> {
    let url = Url::parse(raw).map_err(|_| ValidationError::InvalidVoiceUrl(raw.to_owned()))?;

    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(raw.to_owned()),
        _ => Err(ValidationError::InvalidVoiceUrl(raw.to_owned())),
    }
}
