use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use cadence_config::VoicesConfig;
use tokio::fs;
use uuid::Uuid;

use crate::{
    error::VoiceError,
    types::{StoredVoice, VoiceKind, VoiceReference},
};

/// Writes uploaded voice samples to the local upload directory
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(config: &VoicesConfig) -> Self {
        Self {
            dir: config.upload_dir.clone(),
            max_bytes: config.max_upload_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Create the upload directory (and parents) if missing
    pub async fn ensure_dir(&self) -> Result<(), VoiceError> {
        fs::create_dir_all(&self.dir).await?;
        tracing::debug!(dir = %self.dir.display(), "upload directory ready");
        Ok(())
    }

    /// Reject media types other than WAV and MP3
    ///
    /// Lets callers refuse a streamed upload before reading its body.
    pub fn check_media_type(&self, mime: &str) -> Result<&'static str, VoiceError> {
        extension_for(essence(mime)).ok_or_else(|| VoiceError::UnsupportedMediaType(mime.to_owned()))
    }

    /// Validate and persist one sample under a fresh random name
    ///
    /// The media type is checked before the size.
    pub async fn store_upload(&self, bytes: &[u8], mime: &str) -> Result<StoredVoice, VoiceError> {
        let extension = self.check_media_type(mime)?;
        let mime = essence(mime);

        if bytes.len() > self.max_bytes {
            return Err(VoiceError::PayloadTooLarge { limit: self.max_bytes });
        }

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        fs::write(self.dir.join(&file_name), bytes).await?;

        tracing::info!(file = %file_name, size = bytes.len(), "voice sample stored");

        Ok(StoredVoice {
            file_name,
            content_type: mime.to_owned(),
            size: bytes.len(),
        })
    }

    /// Reference to a stored sample as served from `origin` (`scheme://host`)
    pub fn reference(&self, stored: &StoredVoice, origin: &str) -> VoiceReference {
        let id = stored
            .file_name
            .rsplit_once('.')
            .map_or(stored.file_name.as_str(), |(stem, _)| stem)
            .to_owned();

        VoiceReference {
            id,
            url: format!("{}/uploads/{}", origin.trim_end_matches('/'), stored.file_name),
            kind: VoiceKind::Uploaded,
            display_name: "Your voice".to_owned(),
            description: "Uploaded voice sample".to_owned(),
            style: None,
        }
    }

    /// Delete uploads last modified more than `max_age` ago
    ///
    /// Returns how many files were removed. Entries that vanish or cannot be
    /// inspected mid-sweep are skipped.
    pub async fn sweep_expired(&self, max_age: Duration) -> Result<usize, VoiceError> {
        let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
            return Ok(0);
        };

        let mut removed = 0;
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            let Ok(modified) = metadata.modified() else {
                continue;
            };

            if modified <= cutoff {
                match fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    Err(e) => tracing::warn!(path = %entry.path().display(), "failed to remove expired upload: {e}"),
                }
            }
        }

        if removed > 0 {
            tracing::info!(removed, "expired voice uploads swept");
        }

        Ok(removed)
    }
}

/// Media type without parameters, e.g. `audio/wav; rate=44100` -> `audio/wav`
fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or_default().trim()
}

fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        "audio/wav" => Some("wav"),
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        _ => None,
    }
}
