use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "MEDCUT_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for output files (defaults to next to each input)
    pub output_dir: Option<PathBuf>,

    /// Palette argument used when the CLI gives none ("N" or "LOWER-UPPER")
    pub colors: String,

    /// Also write a PNG preview next to every BMP
    pub preview: bool,
}

fn default_colors() -> String {
    "256".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            colors: default_colors(),
            preview: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from `$MEDCUT_CONFIG` when `path` is None.
    ///
    /// A missing path gives the defaults. An unreadable or malformed file is
    /// logged and also gives the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) => PathBuf::from(p),
                None => return Self::default(),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to parse config, using defaults"
                );
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        tracing::debug!(
            colors = %config.colors,
            preview = config.preview,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply CLI overrides on top of file values
    pub fn with_overrides(
        mut self,
        colors: Option<String>,
        output_dir: Option<PathBuf>,
        preview: bool,
    ) -> Self {
        if let Some(colors) = colors {
            self.colors = colors;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self.preview |= preview;
        self
    }
}
