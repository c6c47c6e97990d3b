use std::path::PathBuf;

use serde::Deserialize;

/// Voice reference storage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoicesConfig {
    /// Directory for uploaded voice samples, created at startup
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Directory holding the preset sample files, served when present
    #[serde(default = "default_preset_dir")]
    pub preset_dir: PathBuf,
    /// URL path the preset files are served under
    #[serde(default = "default_preset_path")]
    pub preset_path: String,
    /// Delete uploads older than this (e.g. "24h"); kept forever when unset
    #[serde(default)]
    pub retention: Option<String>,
    /// How often expired uploads are swept
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: String,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            preset_dir: default_preset_dir(),
            preset_path: default_preset_path(),
            retention: None,
            sweep_interval: default_sweep_interval(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_preset_dir() -> PathBuf {
    PathBuf::from("preset-voices")
}

fn default_preset_path() -> String {
    "/preset-voices".to_string()
}

fn default_sweep_interval() -> String {
    "10m".to_string()
}
