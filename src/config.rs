//! Credentials and client configuration.
//!
//! The BR API authenticates every request with a handful of ids and keys kept
//! in a local JSON file (`.brkeys` by default):
//!
//! ```json
//! {
//!   "MY_TEAM_ID": 57796,
//!   "ACCESS_KEY": "member-access-key",
//!   "DEV_ID": 123,
//!   "DEV_KEY": "developer-key",
//!   "MY_MEMBER_ID": 98765
//! }
//! ```
//!
//! `MY_TEAM_ID` and `ACCESS_KEY` are required; the rest may be omitted.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{error::BrError, Result, TeamId, DEFAULT_KEYS_FILE, KEYS_FILE_ENV_VAR};

#[cfg(test)]
mod tests;

/// Base URL of the Blackout Rugby classic API.
pub const BR_API_BASE_URL: &str = "http://classic-api.blackoutrugby.com";

/// Accept ids given either as JSON numbers or strings; null counts as absent.
fn de_opt_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Required counterpart of [`de_opt_id`]; null is rejected.
fn de_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    de_opt_id(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("expected a string or number, found null"))
}

/// Credentials for the BR API, loaded once and never mutated.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// The member's own team, used when no team is given explicitly.
    #[serde(rename = "MY_TEAM_ID")]
    pub team_id: TeamId,
    #[serde(rename = "ACCESS_KEY", deserialize_with = "de_id")]
    pub access_key: String,
    #[serde(rename = "DEV_ID", default, deserialize_with = "de_opt_id")]
    pub dev_id: Option<String>,
    #[serde(rename = "DEV_KEY", default, deserialize_with = "de_opt_id")]
    pub dev_key: Option<String>,
    #[serde(rename = "MY_MEMBER_ID", default, deserialize_with = "de_opt_id")]
    pub member_id: Option<String>,
}

impl Credentials {
    /// Build credentials in code, e.g. for tests or embedding.
    pub fn new(team_id: TeamId, access_key: impl Into<String>) -> Self {
        Self {
            team_id,
            access_key: access_key.into(),
            dev_id: None,
            dev_key: None,
            member_id: None,
        }
    }

    pub fn with_developer(mut self, dev_id: impl Into<String>, dev_key: impl Into<String>) -> Self {
        self.dev_id = Some(dev_id.into());
        self.dev_key = Some(dev_key.into());
        self
    }

    pub fn with_member(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// Read credentials from a JSON keys file.
    ///
    /// Any failure is logged with its cause and returned as
    /// [`BrError::Config`]; partial credentials are never handed out.
    pub fn load(path: &Path) -> Result<Self> {
        match Self::read(path) {
            Ok(credentials) => {
                debug!(path = %path.display(), team_id = %credentials.team_id, "loaded BR keys");
                credentials.warn_missing_optional(path);
                Ok(credentials)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read BR keys file");
                Err(e)
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| BrError::config(path, e))?;
        let credentials: Credentials =
            serde_json::from_str(&contents).map_err(|e| BrError::config(path, e))?;

        if credentials.access_key.trim().is_empty() {
            return Err(BrError::config(path, "ACCESS_KEY is empty"));
        }

        Ok(credentials)
    }

    fn warn_missing_optional(&self, path: &Path) {
        let optional = [
            ("DEV_ID", &self.dev_id),
            ("DEV_KEY", &self.dev_key),
            ("MY_MEMBER_ID", &self.member_id),
        ];
        for (key, value) in optional {
            if value.is_none() {
                warn!(path = %path.display(), key, "optional BR key not set; requests will omit it");
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("team_id", &self.team_id)
            .field("access_key", &"<redacted>")
            .field("dev_id", &self.dev_id)
            .field("dev_key", &self.dev_key.as_ref().map(|_| "<redacted>"))
            .field("member_id", &self.member_id)
            .finish()
    }
}

/// Where to reach the API and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BR_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Path: ~/.config/br-agent/brkeys.json
pub fn user_keys_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("br-agent").join("brkeys.json")
}

/// Pick the keys file: explicit path, then `BR_KEYS_FILE`, then `./.brkeys`,
/// then the per-user config file.
///
/// Falls back to `./.brkeys` when nothing exists so the load error names the
/// conventional location.
pub fn resolve_keys_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(path) = std::env::var(KEYS_FILE_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    let local = PathBuf::from(DEFAULT_KEYS_FILE);
    if local.exists() {
        return local;
    }
    let user = user_keys_path();
    if user.exists() {
        return user;
    }
    local
}
