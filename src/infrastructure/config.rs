use crate::domain::layout::LayoutVariant;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HeatmapConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RenderSettings {
    #[serde(default)]
    pub default_variant: LayoutVariant,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// `config/heatmap.{toml,yaml,json}` if present, overridden by
/// `HEATMAP__SECTION__KEY` environment variables.
pub fn load_heatmap_config() -> anyhow::Result<HeatmapConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/heatmap").required(false))
        .add_source(
            config::Environment::with_prefix("HEATMAP")
                .prefix_separator("__")
                .separator("__"),
        );

    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<HeatmapConfig> {
    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_without_sources() {
        let config = build_config(config::Config::builder()).unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout(), Duration::from_secs(30));
        assert_eq!(config.render.default_variant, LayoutVariant::Band);
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            [server]
            bind_addr = "127.0.0.1:9000"

            [source]
            url = "http://localhost:1234/global-temperature.json"
            timeout_secs = 5

            [render]
            default_variant = "linear"
        "#;
        let builder = config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let config = build_config(builder).unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.source.url, "http://localhost:1234/global-temperature.json");
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.render.default_variant, LayoutVariant::Linear);
    }

    #[test]
    fn test_unknown_variant_is_an_error() {
        let toml = r#"
            [render]
            default_variant = "radial"
        "#;
        let builder = config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        assert!(build_config(builder).is_err());
    }
}
