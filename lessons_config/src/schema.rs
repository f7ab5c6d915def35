use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use lessons_core::DEFAULT_AFFIRMATIVE_ANSWERS;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub interactive: InteractiveConfig,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            interactive: InteractiveConfig::default(),
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// Lesson file, relative paths resolve against the working directory.
    #[serde(default = "ScheduleConfig::default_path")]
    pub path: PathBuf,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl ScheduleConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("lessons.txt")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InteractiveConfig {
    #[serde(default = "InteractiveConfig::default_affirmative_answers")]
    pub affirmative_answers: Vec<String>,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            affirmative_answers: Self::default_affirmative_answers(),
        }
    }
}

impl InteractiveConfig {
    fn default_affirmative_answers() -> Vec<String> {
        DEFAULT_AFFIRMATIVE_ANSWERS
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl Config {
    fn default_log_level() -> String {
        "warn".to_string()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lessons"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/lessons/config.json`, or the defaults when it does not exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
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
        println!("   - schedule.path: lesson file to read and append to");
        println!("   - interactive.affirmative_answers: answers that confirm adding a lesson");
        println!("   - log_level: tracing filter used when RUST_LOG is not set");
        println!();
        Ok(())
    }

    /// Write the default config to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}
