use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub gemini_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub form_endpoint: String,
    pub submitted_display_secs: u64,
    pub request_timeout_secs: u64,
    pub log_file: String,
    pub dark_mode: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let blueprint_path = match std::env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => PathBuf::from(manifest_dir).join(CONFIG_FILE),
            // Release builds look next to the working directory.
            Err(_) => PathBuf::from(CONFIG_FILE),
        };

        let user_config_path = get_user_config_path()?;

        // First run: seed the user config from the blueprint.
        if !user_config_path.exists() {
            if let Ok(blueprint_content) = fs::read_to_string(&blueprint_path) {
                if let Some(parent) = user_config_path.parent() {
                    fs::create_dir_all(parent).map_err(|e| {
                        ConfigError::Message(format!("could not create {}: {e}", parent.display()))
                    })?;
                }
                fs::write(&user_config_path, blueprint_content).map_err(|e| {
                    ConfigError::Message(format!("could not write {}: {e}", user_config_path.display()))
                })?;
            }
        }

        Self::from_files(&[blueprint_path, user_config_path, PathBuf::from(CONFIG_FILE)])
    }

    /// Builds settings from built-in defaults, then `files` in order, then `FOLIO_*` variables.
    pub fn from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("gemini_model", "gemini-2.5-flash")?
            .set_default("gemini_api_base", "https://generativelanguage.googleapis.com")?
            .set_default("form_endpoint", "https://formspree.io/f/xykkrpel")?
            .set_default("submitted_display_secs", 5)?
            .set_default("request_timeout_secs", 30)?
            .set_default("log_file", "~/.local/state/folio/folio.log")?
            .set_default("dark_mode", true)?;

        for file in files {
            builder = builder.add_source(File::from(file.as_path()).required(false));
        }

        let mut settings: Settings = builder
            .add_source(Environment::with_prefix("FOLIO"))
            .build()?
            .try_deserialize()?;

        settings.gemini_api_key = settings
            .gemini_api_key
            .take()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty());
        Ok(settings)
    }

    pub fn submitted_display(&self) -> Duration {
        Duration::from_secs(self.submitted_display_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).into_owned())
    }
}

pub fn get_user_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir()
        .ok_or_else(|| ConfigError::Message("could not determine home directory".to_string()))?;
    Ok(home.join(".config").join("folio").join(CONFIG_FILE))
}

pub fn save_api_key(api_key: &str) -> Result<(), anyhow::Error> {
    save_api_key_to(&get_user_config_path()?, api_key)
}

/// Writes `gemini_api_key` into the file at `path`, keeping every other key.
pub fn save_api_key_to(path: &Path, api_key: &str) -> Result<(), anyhow::Error> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let mut doc = config_str.parse::<toml::Table>()?;

    doc.insert("gemini_api_key".to_string(), toml::Value::String(api_key.to_string()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, doc.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_files() {
        let settings = Settings::from_files(&[]).unwrap();
        assert_eq!(settings.form_endpoint, "https://formspree.io/f/xykkrpel");
        assert_eq!(settings.submitted_display(), Duration::from_secs(5));
        assert!(settings.dark_mode);
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = TempDir::new().unwrap();
        let blueprint = write(&dir, "blueprint.toml", "gemini_model = \"a\"\nsubmitted_display_secs = 9\n");
        let user = write(&dir, "user.toml", "gemini_model = \"b\"\ndark_mode = false\n");

        let settings = Settings::from_files(&[blueprint, user]).unwrap();
        assert_eq!(settings.gemini_model, "b");
        assert_eq!(settings.submitted_display_secs, 9);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::from_files(&[dir.path().join("absent.toml")]).unwrap();
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn log_path_expands_home() {
        let mut settings = Settings::from_files(&[]).unwrap();
        settings.log_file = "~/folio.log".to_string();
        assert!(!settings.log_path().starts_with("~"));
        assert!(settings.log_path().ends_with("folio.log"));
    }

    #[test]
    fn save_api_key_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "folio.toml", "gemini_model = \"keep-me\"\n");

        save_api_key_to(&path, "abc123").unwrap();

        let doc = fs::read_to_string(&path).unwrap().parse::<toml::Table>().unwrap();
        assert_eq!(doc["gemini_api_key"].as_str(), Some("abc123"));
        assert_eq!(doc["gemini_model"].as_str(), Some("keep-me"));

        let settings = Settings::from_files(&[path]).unwrap();
        assert_eq!(settings.gemini_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn save_api_key_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("folio.toml");
        save_api_key_to(&path, "xyz").unwrap();
        assert!(path.exists());
    }
}
