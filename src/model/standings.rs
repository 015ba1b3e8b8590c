use crate::{
    data::records::{MapResult, Stage, StandingItem},
    model::{
        errors::RecordError,
        series::{resolve_series, Series, SeriesOutcome},
        structures::{
            score::{Score, ScoreStatus},
            scoring::DrawPolicy,
            stage_kind::StageKind
        }
    }
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A stage's resolved output: either the pre-computed table it shipped
/// with, or the series its raw map records resolve to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StageStandings {
    Table(Vec<StandingItem>),
    Bracket(Vec<Series>)
}

/// Resolves one stage into an ordered standings view.
///
/// Bracket stages group their map records into pairings — in input order,
/// which encodes the bracket's progression and is never re-sorted — and
/// resolve each pairing into a [`Series`]. Group and Swiss stages already
/// carry their table; it passes through untouched after rank labels are
/// checked for uniqueness.
pub fn build_standings(stage: &Stage) -> Result<StageStandings, RecordError> {
    match stage.kind {
        StageKind::Group | StageKind::Swiss => {
            let mut seen = HashSet::new();
            for row in &stage.standings {
                if !seen.insert(row.rank.as_str()) {
                    return Err(RecordError::DuplicateRank {
                        rank: row.rank.clone(),
                        stage: stage.name.clone()
                    });
                }
            }

            Ok(StageStandings::Table(stage.standings.clone()))
        }
        StageKind::Bracket => {
            let mut series = Vec::new();
            for group in group_pairings(stage) {
                series.push(resolve_series(&group)?);
            }

            Ok(StageStandings::Bracket(series))
        }
    }
}

/// Groups a bracket stage's records by pairing, preserving first-seen
/// order. Records without a map index never merge: each one is a
/// standalone single-map series, which is how the source records
/// single-game rounds.
fn group_pairings(stage: &Stage) -> Vec<Vec<MapResult>> {
    let mut order: Vec<Vec<MapResult>> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for record in &stage.matches {
        if record.map.is_none() {
            order.push(vec![record.clone()]);
            continue;
        }

        let key = pairing_key(&record.team1.name, &record.team2.name);
        match index.get(&key) {
            Some(&slot) => order[slot].push(record.clone()),
            None => {
                index.insert(key, order.len());
                order.push(vec![record.clone()]);
            }
        }
    }

    order
}

/// Orientation-insensitive pairing identity.
fn pairing_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl StageStandings {
    /// Renders the standings as display rows. Bracket series become one
    /// row each: the winner (or the open pairing) with its credited tally.
    pub fn rows(&self, policy: DrawPolicy) -> Vec<StandingItem> {
        match self {
            StageStandings::Table(rows) => rows.clone(),
            StageStandings::Bracket(series) => series
                .iter()
                .enumerate()
                .map(|(i, s)| bracket_row(i, s, policy))
                .collect()
        }
    }
}

fn bracket_row(index: usize, series: &Series, policy: DrawPolicy) -> StandingItem {
    let rank = format!("#{}", index + 1);
    let record = Some(series.score_line(policy));

    match series.outcome {
        SeriesOutcome::Undecided => StandingItem {
            rank,
            name: format!("{} vs {}", series.side1.name, series.side2.name),
            players: None,
            score: Score::Status(ScoreStatus::Unplayed),
            record
        },
        _ => {
            // Outcome is decided, winner() cannot fail here.
            let winner = series.winner().unwrap_or(&series.side1);
            StandingItem {
                rank,
                name: winner.name.clone(),
                players: winner.players.clone(),
                score: Score::Status(ScoreStatus::Win),
                record
            }
        }
    }
}
