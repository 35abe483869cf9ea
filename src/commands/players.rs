//! Direct player queries

use crate::{
    br::PlayerRecord, BrClient, Result, TeamDataFetcher, TeamId, TeamInfoFormatter,
};

use super::resolve_team_id;

/// One aligned text line per record.
pub fn format_record_line(record: &PlayerRecord) -> String {
    format!(
        "{:<28} {:<4} age {:>2}  csr {:>8}  energy {:>3}  contract {}",
        record.name.as_deref().unwrap_or("Unknown"),
        record.nationality.as_deref().unwrap_or("?"),
        record.age,
        record.csr,
        record.energy,
        if record.contract_until.is_empty() {
            "-"
        } else {
            record.contract_until.as_str()
        },
    )
}

/// Handle `players data`
pub async fn handle_players_data(
    client: BrClient,
    team_id: Option<TeamId>,
    as_json: bool,
) -> Result<()> {
    let team_id = resolve_team_id(team_id, client.credentials());
    let fetcher = TeamDataFetcher::new(client);
    let records = fetcher.fetch_players(team_id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", format_record_line(record));
        }
        println!("✓ {} players in team {}", records.len(), team_id);
    }

    Ok(())
}

/// Handle `players info`
pub async fn handle_players_info(client: BrClient, team_id: Option<TeamId>) -> Result<()> {
    let team_id = resolve_team_id(team_id, client.credentials());
    let formatter = TeamInfoFormatter::new(client);
    println!("{}", formatter.format_team_summary(team_id).await?);
    Ok(())
}
