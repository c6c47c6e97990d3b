use serde::Serialize;

/// Where a voice reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceKind {
    Preset,
    Uploaded,
}

/// A URL-addressable voice sample the synthesis service can fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceReference {
    pub id: String,
    pub url: String,
    pub kind: VoiceKind,
    pub display_name: String,
    pub description: String,
    pub style: Option<String>,
}

/// An accepted upload as written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVoice {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}
