use indexmap::IndexMap;

use crate::types::{VoiceKind, VoiceReference};

/// Shown wherever preset voices are listed
pub const PRESET_DISCLAIMER: &str = "All voices are style-based AI references, not celebrity clones.";

/// A style-based reference voice shipped with the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetVoice {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub style: &'static str,
}

const STANDARD_PRESETS: [PresetVoice; 4] = [
    PresetVoice {
        id: "deep_motivational_male",
        name: "Deep Motivational Male",
        description: "Powerful, authoritative male voice",
        style: "motivational",
    },
    PresetVoice {
        id: "calm_female_narrator",
        name: "Calm Female Narrator",
        description: "Soothing, professional female voice",
        style: "narrative",
    },
    PresetVoice {
        id: "energetic_sports_voice",
        name: "Energetic Sports Voice",
        description: "High-energy, enthusiastic voice",
        style: "energetic",
    },
    PresetVoice {
        id: "wise_mentor",
        name: "Wise Mentor",
        description: "Experienced, thoughtful voice",
        style: "wisdom",
    },
];

/// Read-only, ordered catalog of preset voices
///
/// Built once at startup and shared behind an `Arc`. URLs are resolved per
/// request so the catalog never hardcodes a host.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    voices: IndexMap<&'static str, PresetVoice>,
    preset_path: String,
}

impl PresetCatalog {
    /// The four built-in presets, served under `preset_path`
    pub fn standard(preset_path: &str) -> Self {
        let voices = STANDARD_PRESETS.into_iter().map(|voice| (voice.id, voice)).collect();

        Self {
            voices,
            preset_path: preset_path.trim_end_matches('/').to_owned(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&PresetVoice> {
        self.voices.get(id)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Catalog entries as references addressable from `origin` (`scheme://host`)
    pub fn references(&self, origin: &str) -> Vec<VoiceReference> {
        let origin = origin.trim_end_matches('/');

        self.voices
            .values()
            .map(|voice| VoiceReference {
                id: voice.id.to_owned(),
                url: format!("{origin}{}/{}.wav", self.preset_path, voice.id),
                kind: VoiceKind::Preset,
                display_name: voice.name.to_owned(),
                description: voice.description.to_owned(),
                style: Some(voice.style.to_owned()),
            })
            .collect()
    }
}
