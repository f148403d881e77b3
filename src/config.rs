use ini::Ini;
use log::debug;
use std::path::{Path, PathBuf};

use crate::error::CallbackError;

pub static SECTION_NAME: &str = "callback";
pub static DEFAULT_EXTENSION: &str = "cb";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Strip from the last '.' of the file name.
    LastDot,
    /// Drop the last four characters, whatever they are.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub strip_mode: StripMode,
    pub extension: String,
    pub strict_exit: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            strip_mode: StripMode::LastDot,
            extension: DEFAULT_EXTENSION.to_string(),
            strict_exit: false,
        }
    }
}

impl Config {
    /// Load the `[callback]` section of an INI file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Config, CallbackError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        debug!("Reading config {}", path.display());
        let ini = Ini::load_from_file(path)?;
        return Config::from_ini(&ini);
    }

    pub fn from_ini(ini: &Ini) -> Result<Config, CallbackError> {
        let mut config = Config::default();
        let section = match ini.section(Some(SECTION_NAME)) {
            Some(s) => s,
            None => return Ok(config),
        };

        if let Some(value) = section.get("strip_extension") {
            config.strip_mode = match value.trim().to_ascii_lowercase().as_ref() {
                "last-dot" => StripMode::LastDot,
                "fixed" => StripMode::Fixed,
                _ => return Err(invalid("strip_extension", value)),
            };
        }

        if let Some(value) = section.get("extension") {
            let ext = value.trim();
            let ext = ext.strip_prefix('.').unwrap_or(ext);
            if ext.is_empty() || ext.contains('/') || ext.contains('\\') {
                return Err(invalid("extension", value));
            }
            config.extension = ext.to_string();
        }

        if let Some(value) = section.get("strict_exit") {
            config.strict_exit = match value.trim().to_ascii_lowercase().as_ref() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(invalid("strict_exit", value)),
            };
        }

        return Ok(config);
    }
}

/// The config file sits next to the executable: `C:\tools\myapp.exe` -> `C:\tools\myapp.ini`.
pub fn config_path(exe_path: &Path) -> PathBuf {
    exe_path.with_extension("ini")
}

fn invalid(key: &str, value: &str) -> CallbackError {
    CallbackError::InvalidConfig(key.to_string(), value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.extension, "cb");
        assert_eq!(config.strip_mode, StripMode::LastDot);
        assert!(!config.strict_exit);
    }

    #[test]
    fn reads_all_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("myapp.ini");
        std::fs::write(
            &path,
            "[callback]\nstrip_extension = fixed\nextension = .url\nstrict_exit = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config,
            Config {
                strip_mode: StripMode::Fixed,
                extension: "url".to_string(),
                strict_exit: true,
            }
        );
    }

    #[test]
    fn other_sections_are_ignored() {
        let mut ini = Ini::new();
        ini.with_section(Some("other")).set("extension", "txt");
        assert_eq!(Config::from_ini(&ini).unwrap(), Config::default());
    }

    #[test]
    fn rejects_invalid_values() {
        let cases = [
            ("strip_extension", "middle"),
            ("extension", ""),
            ("extension", "../cb"),
            ("extension", "a\\b"),
            ("strict_exit", "maybe"),
        ];
        for (key, value) in cases {
            let mut ini = Ini::new();
            ini.with_section(Some(SECTION_NAME)).set(key, value);
            match Config::from_ini(&ini) {
                Err(CallbackError::InvalidConfig(k, v)) => {
                    assert_eq!(k, key);
                    assert_eq!(v, value);
                }
                other => panic!("expected InvalidConfig for {}={}, got {:?}", key, value, other),
            }
        }
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.ini");
        std::fs::write(&path, "[callback\nextension = cb\n").unwrap();
        assert!(matches!(Config::load(&path), Err(CallbackError::IniError(_))));
    }

    #[test]
    fn config_lives_next_to_exe() {
        let exe = Path::new("tools").join("myapp.exe");
        assert_eq!(config_path(&exe), Path::new("tools").join("myapp.ini"));
    }
}
