use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tagcloud_common::render::DEFAULT_STYLESHEETS;
use tagcloud_common::{CloudError, CloudOptions, FontScale, SeparatorSet};

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub separators: Option<String>,
    pub min_font: Option<u32>,
    pub max_font: Option<u32>,
    pub stylesheets: Option<Vec<String>>,
    pub normalize: Option<bool>,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub separators: Option<String>,
    /// `Some` when `--normalize` or `--no-normalize` was given.
    pub normalize: Option<bool>,
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub options: CloudOptions,
    pub stylesheets: Vec<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("tagcloud");
    p.push("config.toml");
    Some(p)
}

impl Config {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read `path` if given, else the default location when it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };
        tracing::debug!("loading config from {}", path.display());
        let source = fs::read_to_string(&path)
            .map_err(|e| format!("could not read config {}: {}", path.display(), e))?;
        Ok(Self::parse(&source)?)
    }

    pub fn resolve(self, overrides: Overrides) -> Result<Settings, CloudError> {
        let separators = match overrides.separators.or(self.separators) {
            Some(s) => SeparatorSet::new(&s),
            None => SeparatorSet::default(),
        };
        let scale = FontScale::new(
            self.min_font.unwrap_or(FontScale::DEFAULT_MIN),
            self.max_font.unwrap_or(FontScale::DEFAULT_MAX),
        )?;
        let stylesheets = self
            .stylesheets
            .unwrap_or_else(|| DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect());

        Ok(Settings {
            options: CloudOptions {
                separators,
                scale,
                normalize: overrides.normalize.or(self.normalize).unwrap_or(false),
            },
            stylesheets,
        })
    }
}
