//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use cadence_config::{
    ClientIpConfig, Config, HealthConfig, LlmConfig, RateLimitConfig, RequestRateLimit, ServerConfig, TtsConfig,
    VoicesConfig,
};
use secrecy::SecretString;
use tempfile::TempDir;

/// Configuration plus the scratch directory its uploads live in
pub struct TestConfig {
    pub config: Config,
    pub upload_dir: TempDir,
}

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
    upload_dir: TempDir,
}

impl ConfigBuilder {
    /// Minimal config pointing at the given mock upstreams
    pub fn new(llm_base_url: &str, tts_base_url: &str) -> Self {
        let upload_dir = tempfile::tempdir().expect("temp dir");

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    ..ServerConfig::default()
                },
                llm: LlmConfig {
                    api_key: SecretString::from("sk-test"),
                    base_url: llm_base_url.parse().expect("valid URL"),
                    model: "gpt-4-turbo-preview".to_owned(),
                    timeout: "10s".to_owned(),
                },
                tts: TtsConfig {
                    base_url: tts_base_url.parse().expect("valid URL"),
                    api_key: SecretString::from("tts-test-key"),
                    timeout: "10s".to_owned(),
                    speed: 1.0,
                    pitch: 1.0,
                },
                voices: VoicesConfig {
                    upload_dir: upload_dir.path().join("uploads"),
                    preset_dir: upload_dir.path().join("preset-voices"),
                    ..VoicesConfig::default()
                },
                telemetry: None,
            },
            upload_dir,
        }
    }

    /// Override the whole-request timeout of the synthesis client
    pub fn with_tts_timeout(mut self, timeout: &str) -> Self {
        self.config.tts.timeout = timeout.to_owned();
        self
    }

    /// Override both rate limits
    pub fn with_rate_limits(mut self, general: (u32, &str), audio: (u32, &str)) -> Self {
        self.config.server.rate_limit = RateLimitConfig {
            enabled: true,
            general: RequestRateLimit {
                requests: general.0,
                window: general.1.to_owned(),
            },
            audio: RequestRateLimit {
                requests: audio.0,
                window: audio.1.to_owned(),
            },
        };
        self
    }

    pub fn without_rate_limits(mut self) -> Self {
        self.config.server.rate_limit.enabled = false;
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.config.voices.max_upload_bytes = bytes;
        self
    }

    pub fn with_trusted_hops(mut self, hops: usize) -> Self {
        self.config.server.client_ip = Some(ClientIpConfig {
            trusted_hops: Some(hops),
        });
        self
    }

    /// Create the preset directory with one sample so it gets served
    pub fn with_preset_file(self, name: &str, bytes: &[u8]) -> Self {
        std::fs::create_dir_all(&self.config.voices.preset_dir).expect("preset dir");
        std::fs::write(self.config.voices.preset_dir.join(name), bytes).expect("preset file");
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config, validating it like a loaded file would be
    pub fn build(self) -> TestConfig {
        self.config.validate().expect("valid test config");

        TestConfig {
            config: self.config,
            upload_dir: self.upload_dir,
        }
    }
}
