//! ID types for Blackout Rugby teams.

use crate::error::{BrError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Type-safe wrapper for Blackout Rugby team IDs.
///
/// Keeps team IDs from being mixed up with member or developer IDs, which
/// travel in the same request. Parsing rejects 0; the API has no such team.
///
/// # Examples
///
/// ```rust
/// use br_agent::TeamId;
///
/// let team_id = TeamId::new(57796);
/// assert_eq!(team_id.as_u32(), 57796);
/// assert_eq!(team_id.to_string(), "57796");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = BrError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse::<NonZeroU32>()?.get()))
    }
}

/// The keys file and the API both hand out ids as either numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(0) => Err(serde::de::Error::custom("team id must not be zero")),
            NumberOrString::Number(n) => Ok(Self(n)),
            NumberOrString::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
