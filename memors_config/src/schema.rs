use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

// Conversion options live in memors_core so the pipeline can take them directly
use memors_core::ConvertOptions;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub convert: ConvertOptions,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FilesConfig {
    #[serde(default = "FilesConfig::default_input")]
    pub input: PathBuf,
    #[serde(default = "FilesConfig::default_output")]
    pub output: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            output: Self::default_output(),
        }
    }
}

impl FilesConfig {
    fn default_input() -> PathBuf {
        PathBuf::from("memos.html")
    }

    fn default_output() -> PathBuf {
        PathBuf::from("output.txt")
    }
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("memors")
            .join("config.json"))
    }

    /// Load `~/memors/config.json`, falling back to defaults when it is absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Cannot read config file {}", config_path.display()))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("memors");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - files.input: HTML export to read");
        println!("   - files.output: text file to write (overwritten)");
        println!("   - convert.timestamp_format: chrono format of memo times");
        println!("   - convert.unparsable: earliest | last | exclude");
        println!();
        Ok(())
    }

    fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "files": {
    "input": "memos.html",
    "output": "output.txt"
  },
  "convert": {
    "timestamp_format": "%Y-%m-%d %H:%M:%S",
    "unparsable": "earliest"
  }
}"#;

        std::fs::write(config_path, config_template)?;
        Ok(())
    }
}
