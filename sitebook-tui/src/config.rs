use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sitebook::persistence::{FileStore, SaveMode};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitebookConfig {
    /// "in_place" overwrites the opened file on save; "download" always writes a new
    /// copy into `download_dir`.
    #[serde(default)]
    pub save_mode: SaveMode,
    /// Where download copies go. Defaults to the user's download directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Directory pre-filled in the open/save path prompts.
    #[serde(default)]
    pub default_dir: Option<PathBuf>,
    /// Log filter used when SITEBOOK_LOG is not set, e.g. "info" or "sitebook=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SitebookConfig {
    fn default() -> Self {
        Self {
            save_mode: SaveMode::default(),
            download_dir: None,
            default_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl SitebookConfig {
    fn root_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("sitebook"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("sitebook.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Write the default config if none exists yet and return its path.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.save_mode, self.download_dir.clone())
    }

    /// Starting text for path prompts: the configured directory with a trailing
    /// separator, or empty.
    pub fn prompt_prefix(&self) -> String {
        match &self.default_dir {
            Some(dir) => {
                let mut s = dir.display().to_string();
                if !s.ends_with(std::path::MAIN_SEPARATOR) {
                    s.push(std::path::MAIN_SEPARATOR);
                }
                s
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = SitebookConfig::parse("").unwrap();
        assert_eq!(cfg.save_mode, SaveMode::InPlace);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn download_mode_parses() {
        let cfg = SitebookConfig::parse(
            "save_mode = \"download\"\ndownload_dir = \"/tmp/out\"\n",
        )
        .unwrap();
        assert_eq!(cfg.save_mode, SaveMode::Download);
        assert_eq!(cfg.download_dir, Some(PathBuf::from("/tmp/out")));
        assert!(!cfg.file_store().supports_in_place());
    }

    #[test]
    fn unknown_save_mode_is_an_error() {
        assert!(SitebookConfig::parse("save_mode = \"cloud\"").is_err());
    }

    #[test]
    fn prompt_prefix_ends_with_separator() {
        let cfg = SitebookConfig {
            default_dir: Some(PathBuf::from("/data/projects")),
            ..Default::default()
        };
        let prefix = cfg.prompt_prefix();
        assert!(prefix.starts_with("/data/projects"));
        assert!(prefix.ends_with(std::path::MAIN_SEPARATOR));
        assert_eq!(SitebookConfig::default().prompt_prefix(), "");
    }
}
