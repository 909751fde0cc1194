use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

mod session;
pub use session::Session;

const DEFAULT_FILE: &str = "advent.toml";
const FILE_VAR: &str = "ADVENT_CONFIG_FILE";
const ENV_PREFIX: &str = "ADVENT";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    session: Option<Session>,

    #[serde(default = "default_base_url")]
    base_url: url::Url,

    #[serde(default = "default_user_agent")]
    user_agent: String,
}

fn default_base_url() -> url::Url {
    url::Url::parse("https://adventofcode.com").expect("hard-coded url should be valid")
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Loads `.env`, then the toml file, then `ADVENT_*` variables, later sources winning.
    ///
    /// The file is optional unless its path was given explicitly.
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            debug!(path = ?dotenv, "loaded .env");
        }

        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match std::env::var(FILE_VAR) {
                Ok(path) => {
                    info!(path, "looking for config file with {FILE_VAR}...");
                    (PathBuf::from(path), true)
                }
                Err(_) => (PathBuf::from(DEFAULT_FILE), false),
            },
        };

        debug!(?path, required, "reading config file");

        let builder = ::config::Config::builder()
            .add_source(
                ::config::File::from(path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX));

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, Error> {
        let config: Self = builder
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        debug!(?config, "config loaded");

        Ok(config)
    }

    #[cfg(test)]
    pub(crate) fn from_toml(text: &str) -> Result<Self, Error> {
        Self::from_builder(::config::Config::builder().add_source(::config::File::from_str(
            text,
            ::config::FileFormat::Toml,
        )))
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|session| !session.is_empty())
    }

    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_toml("").expect("empty config should load");

        assert_str_eq!(config.base_url().as_str(), "https://adventofcode.com/");
        assert!(config.user_agent().starts_with("advent/"));
    }

    #[test]
    fn file_values() {
        let config = Config::from_toml(
            r#"
            session = "53616c7465640a"
            base_url = "http://localhost:8080/"
            user_agent = "someone@example.com"
            "#,
        )
        .expect("config should load");

        assert_str_eq!(
            config.session().expect("session is set").cookie(),
            "session=53616c7465640a"
        );
        assert_str_eq!(config.base_url().as_str(), "http://localhost:8080/");
        assert_str_eq!(config.user_agent(), "someone@example.com");
    }

    #[test]
    fn blank_session_is_none() {
        let config = Config::from_toml("session = \"  \"").expect("config should load");

        assert!(config.session().is_none());
    }

    #[test]
    fn invalid_url() {
        let err = Config::from_toml("base_url = \"not a url\"").expect_err("url is invalid");

        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let missing = dir.path().join("missing.toml");

        let err = Config::load(Some(missing.as_path())).expect_err("file is missing");

        assert!(matches!(err, Error::Read(_)));
    }
}
