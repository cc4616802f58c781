//! Runtime configuration from environment variables
//!
//! | variable                  | default                      |
//! |---------------------------|------------------------------|
//! | `PORT`                    | `3001`                       |
//! | `MIC_DATA_DIR`            | `./data`                     |
//! | `MIC_ROSTER`              | the default team, comma list |
//! | `MIC_HISTORY_LIMIT`       | `200` (`0` keeps everything) |
//! | `OPENAI_API_KEY`          | unset: local reasons only    |
//! | `OPENAI_MODEL`            | `gpt-4`                      |
//! | `MIC_REASON_TIMEOUT_SECS` | `10`                         |
//!
//! Bad values fall back to the default with a warning; configuration never
//! stops the server from starting.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::reason::DEFAULT_OPENAI_MODEL;
use crate::statistics::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_REASON_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_ROSTER: [&str; 9] = [
    "Hasan", "Iwan", "Kazim", "Isil", "Michal", "Hammad", "Dimy", "Tim", "Reald",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub roster: Vec<String>,
    pub history_limit: usize,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub reason_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            roster: default_roster(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            reason_timeout: Duration::from_secs(DEFAULT_REASON_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let data_dir = lookup("MIC_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(|v| resolve_path(&current_dir, v.trim()))
            .unwrap_or_else(|| current_dir.join(&defaults.data_dir));

        let roster = lookup("MIC_ROSTER")
            .map(|v| parse_roster(&v))
            .filter(|r| !r.is_empty())
            .unwrap_or(defaults.roster);

        Self {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            data_dir,
            roster,
            history_limit: parse_or(
                "MIC_HISTORY_LIMIT",
                lookup("MIC_HISTORY_LIMIT"),
                defaults.history_limit,
            ),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|v| !v.trim().is_empty()),
            openai_model: lookup("OPENAI_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.openai_model),
            reason_timeout: Duration::from_secs(parse_or(
                "MIC_REASON_TIMEOUT_SECS",
                lookup("MIC_REASON_TIMEOUT_SECS"),
                DEFAULT_REASON_TIMEOUT_SECS,
            )),
        }
    }
}

pub fn default_roster() -> Vec<String> {
    DEFAULT_ROSTER.iter().map(|n| n.to_string()).collect()
}

/// Comma list to roster: trimmed, blanks dropped, first duplicate wins
pub fn parse_roster(value: &str) -> Vec<String> {
    let mut roster: Vec<String> = Vec::new();

    for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !roster.iter().any(|existing| existing == name) {
            roster.push(name.to_string());
        }
    }

    roster
}

fn resolve_path(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, "invalid value, using default");
            default
        }),
    }
}
