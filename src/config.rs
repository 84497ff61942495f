use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.json";
pub const DEFAULT_VIDEO_PATH: &str = "data/wopr.mp4";
const DEFAULT_STORE_PATH: &str = "./matrix_store";
const DEFAULT_SESSION_FILE: &str = "./session.json";
const DEFAULT_PREFIXES: &str = "/!";

/// Matrix login settings, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    pub password: String,
    pub store_path: PathBuf,
    pub store_passphrase: Option<String>,
    pub session_file: PathBuf,
}

/// Content settings; CLI flags override these
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub scenarios_path: PathBuf,
    pub video_path: Option<PathBuf>,
    /// First entry is the one shown in help texts
    pub command_prefixes: Vec<char>,
}

impl MatrixConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("{} environment variable not set", key))
        };

        Ok(Self {
            homeserver: required("MATRIX_HOMESERVER")?,
            username: required("MATRIX_USER")?,
            password: required("MATRIX_PASSWORD")?,
            store_path: lookup("MATRIX_STORE_PATH")
                .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
                .into(),
            store_passphrase: lookup("MATRIX_STORE_PASSPHRASE").filter(|p| !p.is_empty()),
            session_file: lookup("MATRIX_SESSION_FILE")
                .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string())
                .into(),
        })
    }
}

impl ContentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let prefixes = lookup("WOPR_COMMAND_PREFIXES").unwrap_or_else(|| DEFAULT_PREFIXES.to_string());
        let command_prefixes: Vec<char> = prefixes.chars().filter(|c| !c.is_whitespace()).collect();
        if command_prefixes.is_empty() {
            bail!("WOPR_COMMAND_PREFIXES must contain at least one character");
        }

        Ok(Self {
            scenarios_path: lookup("WOPR_SCENARIOS")
                .unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string())
                .into(),
            video_path: Some(
                lookup("WOPR_VIDEO")
                    .unwrap_or_else(|| DEFAULT_VIDEO_PATH.to_string())
                    .into(),
            ),
            command_prefixes,
        })
    }

    pub fn display_prefix(&self) -> char {
        self.command_prefixes.first().copied().unwrap_or('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn matrix_requires_credentials() {
        let err = MatrixConfig::from_lookup(lookup(&[("MATRIX_HOMESERVER", "https://h")]))
            .unwrap_err();
        assert!(err.to_string().contains("MATRIX_USER"));

        let err = MatrixConfig::from_lookup(lookup(&[
            ("MATRIX_HOMESERVER", "https://h"),
            ("MATRIX_USER", "joshua"),
            ("MATRIX_PASSWORD", ""),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MATRIX_PASSWORD"));
    }

    #[test]
    fn matrix_defaults() {
        let config = MatrixConfig::from_lookup(lookup(&[
            ("MATRIX_HOMESERVER", "https://h"),
            ("MATRIX_USER", "joshua"),
            ("MATRIX_PASSWORD", "cpe1704tks"),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("./matrix_store"));
        assert_eq!(config.session_file, PathBuf::from("./session.json"));
        assert!(config.store_passphrase.is_none());
    }

    #[test]
    fn content_defaults_and_overrides() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.scenarios_path, PathBuf::from(DEFAULT_SCENARIOS_PATH));
        assert_eq!(config.video_path, Some(PathBuf::from(DEFAULT_VIDEO_PATH)));
        assert_eq!(config.command_prefixes, vec!['/', '!']);
        assert_eq!(config.display_prefix(), '/');

        let config = ContentConfig::from_lookup(lookup(&[
            ("WOPR_SCENARIOS", "/srv/wopr/scenarios.json"),
            ("WOPR_COMMAND_PREFIXES", "!"),
        ]))
        .unwrap();
        assert_eq!(config.scenarios_path, PathBuf::from("/srv/wopr/scenarios.json"));
        assert_eq!(config.display_prefix(), '!');
    }

    #[test]
    fn blank_prefixes_rejected() {
        assert!(ContentConfig::from_lookup(lookup(&[("WOPR_COMMAND_PREFIXES", " ")])).is_err());
    }
}
