//! Runtime settings of the engine.
//!
//! Values come from, in increasing priority:
//! - built-in defaults
//! - a `.env` file in the working directory (loaded with `dotenvy`)
//! - the process environment
//! - command line flags (applied by the caller with [`Config::override_with`])

use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::query::DEFAULT_PATTERN_SIZE_LIMIT;

pub const LISTS_DIR_KEY: &str = "WORDLIST_DIR";
pub const PATTERN_SIZE_LIMIT_KEY: &str = "WORDLIST_PATTERN_SIZE_LIMIT";

const DEFAULT_LISTS_DIR: &str = "matchLists";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub lists_dir: PathBuf,
    pub pattern_size_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lists_dir: PathBuf::from(DEFAULT_LISTS_DIR),
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        //! Load `.env` if there is one, then read the process environment.

        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        //! Build a config from any key/value source. Unset or blank keys keep
        //! their defaults.

        let mut config = Config::default();

        if let Some(dir) = lookup(LISTS_DIR_KEY).filter(|v| !v.trim().is_empty()) {
            config.lists_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(PATTERN_SIZE_LIMIT_KEY).filter(|v| !v.trim().is_empty()) {
            config.pattern_size_limit = parse_size_limit(&raw)?;
        }

        Ok(config)
    }

    pub fn override_with(
        mut self,
        lists_dir: Option<PathBuf>,
        pattern_size_limit: Option<usize>,
    ) -> Config {
        if let Some(dir) = lists_dir {
            self.lists_dir = dir;
        }
        if let Some(limit) = pattern_size_limit {
            self.pattern_size_limit = limit;
        }
        self
    }
}

fn parse_size_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidSizeLimit {
            key: PATTERN_SIZE_LIMIT_KEY.to_string(),
            value: raw.to_string(),
        }),
    }
}
