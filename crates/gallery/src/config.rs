use shared_types::{ConfigError, GalleryConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "gallery.toml";

/// Parse gallery configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<GalleryConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::parse(e.to_string()))
}

/// Read and parse the config file at `path`.
pub fn read_config(path: impl AsRef<Path>) -> Result<GalleryConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::not_found(format!("{}: {e}", path.display())))?;
    parse_config(&contents)
}

/// Load `gallery.toml` into the global config. Only the first call has
/// effect; a missing or broken file falls back to defaults.
pub fn load_config() -> &'static GalleryConfig {
    CONFIG.get_or_init(|| match read_config(CONFIG_PATH) {
        Ok(config) => {
            tracing::info!(panels = ?config.panels, "loaded gallery config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "using default gallery config");
            GalleryConfig::default()
        }
    })
}

/// The loaded config, or defaults if `load_config` has not run yet.
pub fn config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
