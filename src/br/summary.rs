//! Human-readable rendering of a team's players.

use super::{
    normalize::{contract_date, int_or_zero, text_of},
    types::{PlayerCollection, RawPlayer},
};
use crate::{Result, TeamId};


/// Format an integer with `,` thousands separators: `1234567` → `1,234,567`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn shown(player: &RawPlayer, field: &str, fallback: &str) -> String {
    player
        .present(field)
        .map(text_of)
        .unwrap_or_else(|| fallback.to_string())
}

fn player_block(player: &RawPlayer) -> Result<String> {
    let csr = int_or_zero(player, "csr")?;
    Ok(format!(
        "{} ({}) – Age {}\n  CSR: {} | Energy: {}\n  Skills: Sta {}, Han {}, Att {}, Def {}, Spd {}\n  Contract until: {}\n",
        shown(player, "name", "Unknown"),
        shown(player, "nationality", "?"),
        shown(player, "age", "?"),
        format_thousands(csr),
        shown(player, "energy", "?"),
        shown(player, "stamina", "?"),
        shown(player, "handling", "?"),
        shown(player, "attack", "?"),
        shown(player, "defense", "?"),
        shown(player, "speed", "?"),
        contract_date(player),
    ))
}

/// Render the summary shown to end users.
///
/// The layout (labels, order, separators) is consumed verbatim by the chat
/// front end and must not drift.
pub fn render_team_summary(team_id: TeamId, players: &PlayerCollection) -> Result<String> {
    if players.is_empty() {
        return Ok(format!("No players found for team {}.", team_id));
    }

    let mut blocks = Vec::with_capacity(players.len() + 2);
    blocks.push(format!("Team {} — Players\n", team_id));
    blocks.push(format!("Total players: {}\n", players.len()));
    for player in players {
        blocks.push(player_block(player)?);
    }

    Ok(blocks.join("\n"))
}
