use crate::{
    data::records::MapResult,
    model::{
        errors::RecordError,
        structures::{scoring::DrawPolicy, winner_mark::WinnerMark}
    }
};
use itertools::Itertools;
use serde::Serialize;

/// One side's identity within a series: the name the maps were recorded
/// under plus the first roster any map declared for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSide {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesOutcome {
    SideOne,
    SideTwo,
    /// Not enough decided maps yet. A normal terminal state for
    /// in-progress or abandoned data, distinct from any data error.
    Undecided
}

/// A best-of-N sequence of maps between the same two sides, resolved to a
/// single outcome under the majority-of-maps rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub side1: SeriesSide,
    pub side2: SeriesSide,
    /// The series log, oriented to side1/side2 and ordered by map index
    pub maps: Vec<MapResult>,
    pub wins1: u32,
    pub wins2: u32,
    pub draws: u32,
    pub outcome: SeriesOutcome
}

/// Groups one pairing's map records into a resolved [`Series`].
///
/// Every record must pair the same two sides (case-sensitive name
/// equality; rosters do not participate in identity). Records written in
/// the opposite orientation are accepted and mirrored. When map indices
/// are present the records are ordered by them; a repeated index is a
/// data error. A single record without a map index is a one-game series.
///
/// The per-map `winner` field is the only thing tallied. Scores are never
/// compared: overtime maps and forfeit records ("W"/"L" sentinels)
/// legitimately carry scores that contradict the outcome.
pub fn resolve_series(records: &[MapResult]) -> Result<Series, RecordError> {
    let first = records.first().ok_or(RecordError::EmptySeries)?;
    let name1 = first.team1.name.clone();
    let name2 = first.team2.name.clone();

    let mut maps = Vec::with_capacity(records.len());
    for record in records {
        if record.team1.name == name1 && record.team2.name == name2 {
            maps.push(record.clone());
        } else if record.team1.name == name2 && record.team2.name == name1 {
            maps.push(record.flipped());
        } else {
            return Err(RecordError::MismatchedSides {
                expected_a: name1,
                expected_b: name2,
                found_a: record.team1.name.clone(),
                found_b: record.team2.name.clone()
            });
        }
    }

    if maps.len() > 1 {
        if maps.iter().any(|m| m.map.is_none()) {
            return Err(RecordError::MissingMapIndex {
                side_a: name1,
                side_b: name2
            });
        }

        maps.sort_by_key(|m| m.map);

        if let Some(index) = maps.iter().filter_map(|m| m.map).duplicates().next() {
            return Err(RecordError::DuplicateMapIndex {
                index,
                side_a: name1,
                side_b: name2
            });
        }
    }

    let mut wins1 = 0;
    let mut wins2 = 0;
    let mut draws = 0;
    for map in &maps {
        match map.winner {
            Some(WinnerMark::SideOne) => wins1 += 1,
            Some(WinnerMark::SideTwo) => wins2 += 1,
            Some(WinnerMark::Draw) => draws += 1,
            None => {}
        }
    }

    let outcome = match wins1.cmp(&wins2) {
        std::cmp::Ordering::Greater => SeriesOutcome::SideOne,
        std::cmp::Ordering::Less => SeriesOutcome::SideTwo,
        std::cmp::Ordering::Equal => SeriesOutcome::Undecided
    };

    let side1 = SeriesSide {
        name: name1,
        players: maps.iter().find_map(|m| m.team1.players.clone())
    };
    let side2 = SeriesSide {
        name: name2,
        players: maps.iter().find_map(|m| m.team2.players.clone())
    };

    Ok(Series {
        side1,
        side2,
        maps,
        wins1,
        wins2,
        draws,
        outcome
    })
}

impl Series {
    /// The winning side, or `IncompleteSeries` when resolution is demanded
    /// of an undecided series.
    pub fn winner(&self) -> Result<&SeriesSide, RecordError> {
        match self.outcome {
            SeriesOutcome::SideOne => Ok(&self.side1),
            SeriesOutcome::SideTwo => Ok(&self.side2),
            SeriesOutcome::Undecided => Err(RecordError::IncompleteSeries {
                side_a: self.side1.name.clone(),
                side_b: self.side2.name.clone(),
                wins_a: self.wins1,
                wins_b: self.wins2
            })
        }
    }

    /// Map wins credited to each side under the configured draw policy.
    pub fn credited_wins(&self, policy: DrawPolicy) -> (f64, f64) {
        let (w1, w2) = (self.wins1 as f64, self.wins2 as f64);
        match policy {
            DrawPolicy::Zero | DrawPolicy::Ignore => (w1, w2),
            DrawPolicy::Split => {
                let half = self.draws as f64 * 0.5;
                (w1 + half, w2 + half)
            }
        }
    }

    /// Number of maps the series counts as having played.
    pub fn maps_played(&self, policy: DrawPolicy) -> usize {
        match policy {
            DrawPolicy::Ignore => self.maps.len() - self.draws as usize,
            _ => self.maps.len()
        }
    }

    /// Tally as a display string, winner-first when decided ("2-1").
    pub fn score_line(&self, policy: DrawPolicy) -> String {
        let (c1, c2) = self.credited_wins(policy);
        let (first, second) = match self.outcome {
            SeriesOutcome::SideTwo => (c2, c1),
            _ => (c1, c2)
        };
        format!("{}-{}", fmt_credit(first), fmt_credit(second))
    }
}

fn fmt_credit(credit: f64) -> String {
    if credit.fract() == 0.0 {
        format!("{}", credit as i64)
    } else {
        format!("{}", credit)
    }
}
