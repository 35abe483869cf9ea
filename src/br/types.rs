use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::BrError, Result};

#[cfg(test)]
mod tests;

/// Top-level envelope of every BR API response.
///
/// Both fields stay loosely typed: `status` is compared against `"Ok"` and
/// echoed back verbatim otherwise, and `players` is only inspected once the
/// status has been accepted.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub players: Option<Value>,
}

/// One entry of the API's player collection, exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlayer {
    /// Opaque key the API filed this player under.
    pub key: String,
    fields: Map<String, Value>,
}

impl RawPlayer {
    pub fn new(key: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }

    /// Raw field value; `None` only when the key is absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field value with JSON null folded into absence.
    pub fn present(&self, field: &str) -> Option<&Value> {
        self.get(field).filter(|v| !v.is_null())
    }

    /// Identifier used in error messages: the player's name if known.
    pub fn label(&self) -> String {
        match self.present("name").and_then(Value::as_str) {
            Some(name) => format!("{} ({})", name, self.key),
            None => self.key.clone(),
        }
    }
}

/// The validated player collection of one team, in API order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCollection {
    players: Vec<RawPlayer>,
}

impl PlayerCollection {
    /// Accepts the `players` payload of an accepted envelope.
    ///
    /// The API normally sends an object keyed by player id, but encodes an
    /// empty collection as `[]`; arrays are taken in order and keyed by their
    /// `id` field or index.
    pub fn from_value(players: Option<Value>) -> Result<Self> {
        let players = match players {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| player_entry(key, value))
                .collect::<Result<Vec<_>>>()?,
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(idx, value)| {
                    let key = match value.get("id") {
                        Some(Value::String(s)) => s.clone(),
                        Some(Value::Number(n)) => n.to_string(),
                        _ => idx.to_string(),
                    };
                    player_entry(key, value)
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(BrError::malformed(format!(
                    "`players` should be an object, found {}",
                    other
                )))
            }
        };
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawPlayer> {
        self.players.iter()
    }
}

impl<'a> IntoIterator for &'a PlayerCollection {
    type Item = &'a RawPlayer;
    type IntoIter = std::slice::Iter<'a, RawPlayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn player_entry(key: String, value: Value) -> Result<RawPlayer> {
    match value {
        Value::Object(fields) => Ok(RawPlayer::new(key, fields)),
        other => Err(BrError::malformed(format!(
            "player {} should be an object, found {}",
            key, other
        ))),
    }
}

/// The five skills reported for every player, passed through as received.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skills {
    pub stamina: Value,
    pub handling: Value,
    pub attack: Value,
    pub defense: Value,
    pub speed: Value,
}

/// Normalized player data for computation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub name: Option<String>,
    pub age: i64,
    pub nationality: Option<String>,
    /// Competitive skill rating.
    pub csr: i64,
    pub energy: i64,
    pub skills: Skills,
    /// Date part of the contract end timestamp, empty when unknown.
    pub contract_until: String,
}
