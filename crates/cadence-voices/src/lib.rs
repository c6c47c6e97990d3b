#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Voice references: the fixed preset catalog and the upload store

mod catalog;
mod error;
mod store;
mod types;

pub use catalog::{PRESET_DISCLAIMER, PresetCatalog, PresetVoice};
pub use error::VoiceError;
pub use store::UploadStore;
pub use types::{StoredVoice, VoiceKind, VoiceReference};

/// Ownership attestation shown to the user alongside every upload
pub const CONSENT_DISCLAIMER: &str = "LEGAL NOTICE: You confirm that you own the rights to this voice recording and consent to its use for AI voice cloning.";

/// Confirmation returned after a successful upload
pub const UPLOAD_MESSAGE: &str =
    "Voice uploaded successfully. This voice will be used as reference for TTS generation.";
