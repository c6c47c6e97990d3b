use std::sync::Arc;

use cadence_config::{ClientIpConfig, Config};
use cadence_llm::TextGenerator;
use cadence_tts::SpeechSynthesisClient;
use cadence_voices::{PresetCatalog, UploadStore};

/// Shared, immutable handles the endpoints work with
#[derive(Clone)]
pub struct AppState {
    pub generator: TextGenerator,
    pub synthesizer: Arc<dyn SpeechSynthesisClient>,
    pub catalog: Arc<PresetCatalog>,
    pub uploads: UploadStore,
    pub client_ip: Option<ClientIpConfig>,
    pub service_name: Arc<str>,
}

impl AppState {
    /// Assemble state around already-built upstream clients
    pub fn new(
        config: &Config,
        generator: TextGenerator,
        synthesizer: Arc<dyn SpeechSynthesisClient>,
    ) -> Self {
        Self {
            generator,
            synthesizer,
            catalog: Arc::new(PresetCatalog::standard(&config.voices.preset_path)),
            uploads: UploadStore::new(&config.voices),
            client_ip: config.server.client_ip.clone(),
            service_name: Arc::from(config.server.health.service.as_str()),
        }
    }

    /// Build state with the real completion and synthesis clients
    ///
    /// # Errors
    ///
    /// Returns an error if either upstream client cannot be constructed
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let generator = cadence_llm::build_generator(&config.llm)?;
        let synthesizer = cadence_tts::build_client(&config.tts)?;

        Ok(Self::new(config, generator, synthesizer))
    }

    /// Number of hops from the right of `X-Forwarded-For` to trust
    pub fn trusted_hops(&self) -> Option<usize> {
        self.client_ip.as_ref().and_then(|c| c.trusted_hops)
    }
}
