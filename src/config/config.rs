use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;
use crate::error::{SyncError, SyncResult};

/// On-disk fallback for values not present in the environment.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub google_access_token: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub sheet_name: Option<String>,
    pub github_token: Option<String>,
    pub repository: Option<String>,
}

/// Values supplied on the command line; these win over env and file.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub spreadsheet_id: Option<String>,
    pub sheet_name: Option<String>,
    pub repository: Option<String>,
}

/// Fully resolved inputs for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub google_access_token: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub github_token: String,
    pub owner: String,
    pub repo: String,
}

pub fn load_config() -> Config {
    let config_path = match dirs::home_dir() {
        Some(home) => home.join(CONFIG_FILE),
        None => return Config::default(),
    };

    if config_path.exists() {
        match fs::read_to_string(&config_path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

impl SyncConfig {
    /// Resolve all required inputs from CLI overrides, the environment, and
    /// the config file, in that order. Fails before any network call when
    /// a value is absent or empty.
    pub fn resolve(overrides: &ConfigOverrides) -> SyncResult<Self> {
        let file = load_config();
        resolve_from(overrides, |key| env::var(key).ok(), &file)
    }
}

pub(crate) fn resolve_from<F>(
    overrides: &ConfigOverrides,
    env: F,
    file: &Config,
) -> SyncResult<SyncConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let google_access_token = required(
        "GOOGLE_ACCESS_TOKEN",
        None,
        env("GOOGLE_ACCESS_TOKEN"),
        file.google_access_token.clone(),
    )?;
    let spreadsheet_id = required(
        "SPREADSHEET_ID",
        overrides.spreadsheet_id.clone(),
        env("SPREADSHEET_ID"),
        file.spreadsheet_id.clone(),
    )?;
    let sheet_name = required(
        "SHEET_NAME",
        overrides.sheet_name.clone(),
        env("SHEET_NAME"),
        file.sheet_name.clone(),
    )?;
    let github_token = required(
        "GITHUB_TOKEN",
        None,
        env("GITHUB_TOKEN"),
        file.github_token.clone(),
    )?;
    let repository = required(
        "GITHUB_REPOSITORY",
        overrides.repository.clone(),
        env("GITHUB_REPOSITORY"),
        file.repository.clone(),
    )?;

    let (owner, repo) = split_repository(&repository)?;

    Ok(SyncConfig {
        google_access_token,
        spreadsheet_id,
        sheet_name,
        github_token,
        owner,
        repo,
    })
}

fn required(
    name: &str,
    override_value: Option<String>,
    env_value: Option<String>,
    file_value: Option<String>,
) -> SyncResult<String> {
    override_value
        .or(env_value)
        .or(file_value)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| SyncError::MissingInput(name.to_string()))
}

pub(crate) fn split_repository(repository: &str) -> SyncResult<(String, String)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(SyncError::ConfigError(format!(
            "Invalid repository '{}': expected owner/name",
            repository
        ))),
    }
}
