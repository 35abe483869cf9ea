//! Projection of raw API players into [`PlayerRecord`]s.
//!
//! `age` is mandatory and fails loudly when absent or non-numeric; `csr` and
//! `energy` default to 0. Everything else passes through.

use serde_json::Value;

use super::types::{PlayerCollection, PlayerRecord, RawPlayer, Skills};
use crate::{error::BrError, Result};

/// Integer coercion accepting JSON numbers and numeric strings.
///
/// Floats are truncated toward zero; booleans, arrays and objects are
/// rejected.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Plain text rendering of a scalar: strings unquoted, everything else as JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Date portion of the player's `contract` timestamp.
pub fn contract_date(player: &RawPlayer) -> String {
    match player.present("contract") {
        Some(value) => {
            let text = text_of(value);
            text.split('T').next().unwrap_or_default().to_string()
        }
        None => String::new(),
    }
}

fn required_int(player: &RawPlayer, field: &'static str) -> Result<i64> {
    let value = player
        .present(field)
        .ok_or_else(|| BrError::MissingPlayerField {
            player: player.label(),
            field,
        })?;
    int_field(player, field, value)
}

/// Absent and null both count as 0.
pub fn int_or_zero(player: &RawPlayer, field: &'static str) -> Result<i64> {
    match player.present(field) {
        Some(value) => int_field(player, field, value),
        None => Ok(0),
    }
}

fn int_field(player: &RawPlayer, field: &'static str, value: &Value) -> Result<i64> {
    coerce_int(value).ok_or_else(|| BrError::InvalidPlayerField {
        player: player.label(),
        field,
        value: value.to_string(),
    })
}

fn optional_text(player: &RawPlayer, field: &str) -> Option<String> {
    player.present(field).map(text_of)
}

fn skill(player: &RawPlayer, field: &str) -> Value {
    player.get(field).cloned().unwrap_or(Value::Null)
}

impl PlayerRecord {
    pub fn from_raw(player: &RawPlayer) -> Result<Self> {
        Ok(Self {
            name: optional_text(player, "name"),
            age: required_int(player, "age")?,
            nationality: optional_text(player, "nationality"),
            csr: int_or_zero(player, "csr")?,
            energy: int_or_zero(player, "energy")?,
            skills: Skills {
                stamina: skill(player, "stamina"),
                handling: skill(player, "handling"),
                attack: skill(player, "attack"),
                defense: skill(player, "defense"),
                speed: skill(player, "speed"),
            },
            contract_until: contract_date(player),
        })
    }
}

/// Normalize a whole collection, one record per entry, order preserved.
pub fn normalize_players(players: &PlayerCollection) -> Result<Vec<PlayerRecord>> {
    players.iter().map(PlayerRecord::from_raw).collect()
}
