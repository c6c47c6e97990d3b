use std::path::Path;

use secrecy::ExposeSecret;

use crate::{Config, RequestRateLimit, parse_duration};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are empty, durations do not parse,
    /// or limits are zero
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_upstreams()?;
        self.validate_rate_limits()?;
        self.validate_voices()?;
        Ok(())
    }

    fn validate_upstreams(&self) -> anyhow::Result<()> {
        if self.llm.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("llm.api_key must not be empty");
        }
        if self.tts.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("tts.api_key must not be empty");
        }

        parse_duration("llm.timeout", &self.llm.timeout)?;
        parse_duration("tts.timeout", &self.tts.timeout)?;

        if !(self.tts.speed.is_finite() && self.tts.speed > 0.0) {
            anyhow::bail!("tts.speed must be a positive number");
        }
        if !(self.tts.pitch.is_finite() && self.tts.pitch > 0.0) {
            anyhow::bail!("tts.pitch must be a positive number");
        }

        Ok(())
    }

    fn validate_rate_limits(&self) -> anyhow::Result<()> {
        let rate_limit = &self.server.rate_limit;
        validate_limit("server.rate_limit.general", &rate_limit.general)?;
        validate_limit("server.rate_limit.audio", &rate_limit.audio)?;
        Ok(())
    }

    fn validate_voices(&self) -> anyhow::Result<()> {
        if self.voices.max_upload_bytes == 0 {
            anyhow::bail!("voices.max_upload_bytes must be greater than 0");
        }

        if !self.voices.preset_path.starts_with('/') {
            anyhow::bail!("voices.preset_path must start with '/'");
        }

        if let Some(ref retention) = self.voices.retention {
            parse_duration("voices.retention", retention)?;
            let interval = parse_duration("voices.sweep_interval", &self.voices.sweep_interval)?;
            if interval.is_zero() {
                anyhow::bail!("voices.sweep_interval must be greater than 0");
            }
        }

        Ok(())
    }
}

fn validate_limit(field: &str, limit: &RequestRateLimit) -> anyhow::Result<()> {
    if limit.requests == 0 {
        anyhow::bail!("{field}.requests must be greater than 0");
    }

    if parse_duration(field, &limit.window)?.is_zero() {
        anyhow::bail!("{field}.window must be greater than 0");
    }

    Ok(())
}
