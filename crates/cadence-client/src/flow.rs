use bytes::Bytes;
use cadence_core::{GeneratedText, GenerationMode};

use crate::{
    client::CadenceClient,
    error::{ClientError, Result},
    types::UploadedVoice,
};

/// Where a user is in the prompt → text → audio sequence
#[derive(Debug, Clone, Default)]
pub enum Flow {
    /// Waiting for a prompt
    #[default]
    Input,
    /// Text is ready and can be voiced
    TextGenerated(GeneratedText),
    /// Audio exists for the generated text
    AudioGenerated { text: GeneratedText, audio: Bytes },
}

impl Flow {
    pub const fn text(&self) -> Option<&GeneratedText> {
        match self {
            Self::Input => None,
            Self::TextGenerated(text) | Self::AudioGenerated { text, .. } => Some(text),
        }
    }

    pub const fn audio(&self) -> Option<&Bytes> {
        match self {
            Self::AudioGenerated { audio, .. } => Some(audio),
            _ => None,
        }
    }

    /// Record new text; allowed until audio has been produced
    pub fn text_generated(&mut self, text: GeneratedText) -> Result<()> {
        match self {
            Self::Input | Self::TextGenerated(_) => {
                *self = Self::TextGenerated(text);
                Ok(())
            }
            Self::AudioGenerated { .. } => Err(ClientError::InvalidState(
                "audio already generated; reset before generating new text".to_owned(),
            )),
        }
    }

    /// Attach audio to the current text, replacing any earlier take
    pub fn audio_generated(&mut self, audio: Bytes) -> Result<()> {
        let text = self
            .text()
            .cloned()
            .ok_or_else(|| ClientError::InvalidState("generate text before audio".to_owned()))?;

        *self = Self::AudioGenerated { text, audio };
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::Input;
    }
}

/// The voice used for synthesis: an own upload beats a preset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSelection {
    preset: Option<String>,
    uploaded: Option<String>,
}

impl VoiceSelection {
    pub fn select_preset(&mut self, url: impl Into<String>) {
        self.preset = Some(url.into());
    }

    pub fn clear_preset(&mut self) {
        self.preset = None;
    }

    pub fn set_uploaded(&mut self, url: impl Into<String>) {
        self.uploaded = Some(url.into());
    }

    pub fn clear_uploaded(&mut self) {
        self.uploaded = None;
    }

    /// URL to send with the next synthesis call, if any
    pub fn active(&self) -> Option<&str> {
        self.uploaded.as_deref().or(self.preset.as_deref())
    }
}

/// Drives a [`Flow`] through a [`CadenceClient`]
///
/// Steps attempted out of order fail locally with
/// [`ClientError::InvalidState`] without contacting the server.
#[derive(Debug, Clone)]
pub struct Session {
    client: CadenceClient,
    flow: Flow,
    voices: VoiceSelection,
}

impl Session {
    pub fn new(client: CadenceClient) -> Self {
        Self {
            client,
            flow: Flow::Input,
            voices: VoiceSelection::default(),
        }
    }

    pub const fn flow(&self) -> &Flow {
        &self.flow
    }

    pub const fn voices(&self) -> &VoiceSelection {
        &self.voices
    }

    pub const fn voices_mut(&mut self) -> &mut VoiceSelection {
        &mut self.voices
    }

    pub async fn generate_text(&mut self, prompt: &str, mode: GenerationMode) -> Result<&GeneratedText> {
        if matches!(self.flow, Flow::AudioGenerated { .. }) {
            return Err(ClientError::InvalidState(
                "audio already generated; reset before generating new text".to_owned(),
            ));
        }

        let text = self.client.generate_text(prompt, mode).await?;
        self.flow.text_generated(text)?;

        self.flow
            .text()
            .ok_or_else(|| ClientError::InvalidState("text missing after generation".to_owned()))
    }

    /// Voice the current text with the active voice selection
    pub async fn generate_audio(&mut self) -> Result<&Bytes> {
        let text = self
            .flow
            .text()
            .ok_or_else(|| ClientError::InvalidState("generate text before audio".to_owned()))?;

        let audio = self.client.generate_audio(&text.content, self.voices.active()).await?;
        self.flow.audio_generated(audio)?;

        self.flow
            .audio()
            .ok_or_else(|| ClientError::InvalidState("audio missing after generation".to_owned()))
    }

    /// Upload the user's own voice and make it the active selection
    pub async fn upload_voice(&mut self, audio: Vec<u8>, file_name: &str, mime: &str) -> Result<UploadedVoice> {
        let uploaded = self.client.upload_voice(audio, file_name, mime).await?;
        self.voices.set_uploaded(uploaded.voice_url.clone());
        Ok(uploaded)
    }

    /// Back to prompt input; the voice selection is kept
    pub fn reset(&mut self) {
        self.flow.reset();
    }
}
