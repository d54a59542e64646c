use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use grout_render::{FieldLabels, MissingDefinition, RenderOptions, WriterConfig};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GroutConfig {
    #[serde(default)]
    pub render: RenderSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderSection {
    /// Text for absent metadata fields.
    pub placeholder: Option<String>,
    pub pretty: Option<bool>,
    pub indent: Option<usize>,
    /// Fail on properties without definitions.
    pub strict: Option<bool>,
    #[serde(default)]
    pub labels: LabelsSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct LabelsSection {
    pub description: Option<String>,
    pub title: Option<String>,
    pub plural_title: Option<String>,
}

impl RenderSection {
    pub fn render_options(&self) -> RenderOptions {
        let defaults = FieldLabels::default();
        RenderOptions {
            placeholder: self.placeholder.clone().unwrap_or_default(),
            missing_definition: if self.strict.unwrap_or(false) {
                MissingDefinition::Strict
            } else {
                MissingDefinition::Skip
            },
            labels: FieldLabels {
                description: self
                    .labels
                    .description
                    .clone()
                    .unwrap_or(defaults.description),
                title: self.labels.title.clone().unwrap_or(defaults.title),
                plural_title: self
                    .labels
                    .plural_title
                    .clone()
                    .unwrap_or(defaults.plural_title),
            },
        }
    }

    pub fn writer_config(&self) -> WriterConfig {
        let defaults = WriterConfig::default();
        WriterConfig {
            pretty_print: self.pretty.unwrap_or(defaults.pretty_print),
            indent_size: self.indent.unwrap_or(defaults.indent_size),
        }
    }
}

pub fn load() -> Result<GroutConfig> {
    let path_override = std::env::var("GROUT_CONFIG").ok();
    load_from(path_override.as_deref())
}

pub fn load_from(path_override: Option<&str>) -> Result<GroutConfig> {
    let Some(path) = config_path_override(path_override) else {
        return Ok(GroutConfig::default());
    };

    if !path.exists() {
        return Ok(GroutConfig::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: GroutConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(config)
}

fn config_path_override(path_override: Option<&str>) -> Option<PathBuf> {
    if let Some(raw) = path_override {
        return Some(PathBuf::from(raw));
    }
    config_path()
}

pub fn config_path() -> Option<PathBuf> {
    // Prefer XDG-style config path, but fall back to ~/.grout/config.toml.
    if let Some(mut dir) = dirs::config_dir() {
        dir.push("grout-editor");
        dir.push("config.toml");
        if dir.exists() {
            return Some(dir);
        }
    }
    dirs::home_dir().map(|mut home| {
        home.push(".grout");
        home.push("config.toml");
        home
    })
}
