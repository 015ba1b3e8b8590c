use crate::{
    data::records::Tournament,
    model::{
        aliases::AliasTable,
        errors::AggregationWarning,
        structures::{
            honors::HonorsTable,
            processing::{PlacementRow, Provenance},
            special::Special
        }
    }
};
use std::collections::HashSet;
use tracing::warn;

/// A tournament reduced to its ranked placement rows, plus the declared
/// honors that matched no row and the referential warnings found on the
/// way.
#[derive(Debug, Clone)]
pub struct FinalizedTournament {
    pub name: String,
    pub placements: Vec<PlacementRow>,
    /// Honors declared for a player who has no placement row (the source
    /// hands out EVPs to knocked-out players). Each entry is the declared
    /// name with its specials; they still earn bonus points.
    pub unplaced_honors: Vec<(String, Vec<Special>)>,
    pub warnings: Vec<AggregationWarning>
}

/// Reduces a tournament to its final placement rows.
///
/// `final_results` is read verbatim as the ranking authority — stage
/// outputs are audit trail, never re-derived into placements, because the
/// source curates the two views independently. Declared specials attach to
/// their rows; names that cannot be traced to the participant list or any
/// stage roster are flagged with a non-fatal warning, since historical
/// data legitimately contains late substitutions noted only in free text.
pub fn finalize(tournament: &Tournament, honors: &HonorsTable, aliases: &AliasTable) -> FinalizedTournament {
    let universe = roster_universe(tournament, aliases);
    let mut consumed: HashSet<String> = HashSet::new();
    let mut warnings = Vec::new();

    let mut placements = Vec::with_capacity(tournament.final_results.len());
    for row in &tournament.final_results {
        let row_key = aliases.key(&row.name);
        let specials = honors.specials_for(&tournament.name, &row_key).to_vec();

        consumed.insert(row_key.clone());
        for player in row.players.iter().flatten() {
            consumed.insert(aliases.key(player));
        }

        if !universe.is_empty() && !is_traceable(&universe, &row_key, row.players.as_deref(), aliases) {
            warn!(
                tournament = %tournament.name,
                name = %row.name,
                "final placement names an unknown participant"
            );
            warnings.push(AggregationWarning::UnknownParticipant {
                tournament: tournament.name.clone(),
                name: row.name.clone()
            });
        }

        placements.push(PlacementRow {
            rank: row.rank.clone(),
            name: row.name.clone(),
            players: row.players.clone(),
            score: row.score,
            note: row.note.clone(),
            specials,
            provenance: Provenance::FinalResults
        });
    }

    let unplaced_honors = honors
        .declarations_for(&tournament.name)
        .filter(|(key, _)| !consumed.contains(key.as_str()))
        .map(|(_, honor)| (honor.player.clone(), honor.specials.clone()))
        .collect();

    FinalizedTournament {
        name: tournament.name.clone(),
        placements,
        unplaced_honors,
        warnings
    }
}

/// Every identity a placement row could legitimately refer to: declared
/// participants, standings rows and their rosters, and map-record sides
/// and their rosters.
fn roster_universe(tournament: &Tournament, aliases: &AliasTable) -> HashSet<String> {
    let mut universe = HashSet::new();

    for participant in tournament.participants.iter().flatten() {
        universe.insert(aliases.key(participant));
    }

    for stage in &tournament.stages {
        for row in &stage.standings {
            universe.insert(aliases.key(&row.name));
            for player in row.players.iter().flatten() {
                universe.insert(aliases.key(player));
            }
        }

        for record in &stage.matches {
            for side in [&record.team1, &record.team2] {
                universe.insert(aliases.key(&side.name));
                for player in side.players.iter().flatten() {
                    universe.insert(aliases.key(player));
                }
            }
        }
    }

    universe
}

fn is_traceable(universe: &HashSet<String>, row_key: &str, players: Option<&[String]>, aliases: &AliasTable) -> bool {
    if universe.contains(row_key) {
        return true;
    }

    players
        .iter()
        .flat_map(|p| p.iter())
        .any(|player| universe.contains(&aliases.key(player)))
}
