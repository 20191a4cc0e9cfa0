use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{EpirusError, Result};

pub const LOGIN_TOKEN_ENV: &str = "EPIRUS_LOGIN_TOKEN";
pub const APP_URL_ENV: &str = "EPIRUS_APP_URL";

/// Login file written by `epirus login`, relative to the home directory.
pub const LOGIN_FILE: &str = ".epirus/.config";

/// Settings needed to reach the Epirus RPC gateway.
///
/// The resolver only ever sees this struct; reading the environment is the
/// job of [`EpirusConfig::from_env`], called once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpirusConfig {
    /// Token issued by the Epirus platform (`EPIRUS_LOGIN_TOKEN`).
    pub login_token: Option<String>,
    /// Base URL of the Epirus application (`EPIRUS_APP_URL`), e.g. `https://app.epirus.io`.
    pub app_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginFile {
    #[serde(default)]
    login_token: Option<String>,
}

impl EpirusConfig {
    pub fn new(login_token: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            login_token: Some(login_token.into()),
            app_url: Some(app_url.into()),
        }
    }

    /// Build from a key lookup. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            login_token: read(LOGIN_TOKEN_ENV),
            app_url: read(APP_URL_ENV),
        }
    }

    /// Read the process environment, falling back to the CLI login file
    /// for the token.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        match dirs::home_dir() {
            Some(home) => config.with_login_token_file(home.join(LOGIN_FILE)),
            None => Ok(config),
        }
    }

    /// Fill in a missing token from the login file at `path`. A missing file
    /// leaves the config unchanged.
    pub fn with_login_token_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        if self.login_token.is_some() {
            return Ok(self);
        }
        let path = path.as_ref();
        if let Some(token) = read_login_token(path)? {
            debug!(path = %path.display(), "login token loaded from file");
            self.login_token = Some(token);
        }
        Ok(self)
    }
}

fn read_login_token(path: &Path) -> Result<Option<String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(config_file_error(path, e)),
    };
    let file: LoginFile =
        serde_json::from_str(&contents).map_err(|e| config_file_error(path, e))?;
    Ok(file.login_token.filter(|t| !t.is_empty()))
}

fn config_file_error(path: &Path, e: impl std::fmt::Display) -> EpirusError {
    EpirusError::ConfigFile {
        path: PathBuf::from(path),
        message: e.to_string(),
    }
}
