use crate::model::structures::{
    score::Score, stage_kind::StageKind, tournament_kind::TournamentKind, winner_mark::WinnerMark
};
use serde::{Deserialize, Serialize};

/// One competing side of a map record: a team or individual name, an
/// optional roster, and whatever score the record keeper wrote down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,
    pub score: Score
}

/// One played map. The `winner` field is authoritative: overtime results
/// and forfeits legitimately contradict the raw scores, so the winner is
/// never recomputed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Position within a best-of-N series; absent for standalone games
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<u32>,
    pub team1: Side,
    pub team2: Side,
    #[serde(default, rename = "isOT", skip_serializing_if = "std::ops::Not::not")]
    pub is_ot: bool,
    /// Free-text overtime detail ("4:0"); opaque metadata, never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<WinnerMark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>
}

impl MapResult {
    /// The same record seen from the opposite orientation: sides swapped,
    /// winner mark mirrored.
    pub fn flipped(&self) -> MapResult {
        MapResult {
            team1: self.team2.clone(),
            team2: self.team1.clone(),
            winner: self.winner.map(WinnerMark::flipped),
            ..self.clone()
        }
    }
}

/// One row of a pre-computed stage table. Rank labels are free-form
/// ("3-0", "A组", "胜1") and only unique within their stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>
}

/// A named phase of a tournament. Bracket stages populate `matches`;
/// group and Swiss stages populate `standings`. The two never carry
/// independent meaning at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StageKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MapResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standings: Vec<StandingItem>
}

/// One independently curated final-placement row. These are the ranking
/// authority for a tournament; stage outputs are audit trail only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalPlacement {
    pub rank: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub name: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TournamentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub final_results: Vec<FinalPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replay_link: Option<String>
}

#[cfg(test)]
mod tests {
    use super::{MapResult, Stage, Tournament};
    use crate::model::structures::{
        score::{Score, ScoreStatus},
        stage_kind::StageKind,
        winner_mark::WinnerMark
    };

    #[test]
    fn test_map_result_from_dataset_literal() {
        let json = r#"{
            "date": "8.12",
            "map": 2,
            "team1": { "name": "八组", "players": ["V.", "安格", "710"], "score": 30 },
            "team2": { "name": "四组", "score": 31 },
            "isOT": true,
            "overtime": "4:0",
            "winner": 2
        }"#;

        let record: MapResult = serde_json::from_str(json).unwrap();
        assert_eq!(record.map, Some(2));
        assert_eq!(record.team1.score, Score::Points(30));
        assert!(record.is_ot);
        assert_eq!(record.winner, Some(WinnerMark::SideTwo));
        assert_eq!(record.team2.players, None);
    }

    #[test]
    fn test_flipped_mirrors_winner() {
        let json = r#"{
            "team1": { "name": "A", "score": 10 },
            "team2": { "name": "B", "score": 20 },
            "winner": 2
        }"#;

        let record: MapResult = serde_json::from_str(json).unwrap();
        let flipped = record.flipped();

        assert_eq!(flipped.team1.name, "B");
        assert_eq!(flipped.team2.name, "A");
        assert_eq!(flipped.winner, Some(WinnerMark::SideOne));
    }

    #[test]
    fn test_swiss_stage_with_sentinel_scores() {
        let json = r#"{
            "name": "瑞士轮",
            "type": "Swiss",
            "standings": [
                { "rank": "3-0", "name": "晋级组", "players": ["Shaw"], "score": "Q" },
                { "rank": "3-2", "name": "淘汰组", "players": ["Lese"], "score": "OUT" }
            ]
        }"#;

        let stage: Stage = serde_json::from_str(json).unwrap();
        assert_eq!(stage.kind, StageKind::Swiss);
        assert!(stage.matches.is_empty());
        assert_eq!(stage.standings[1].score, Score::Status(ScoreStatus::Eliminated));
    }

    #[test]
    fn test_tournament_defaults() {
        let json = r#"{
            "name": "第一届 MSI",
            "date": "2025.8.22 - 8.23",
            "type": "Solo",
            "finalResults": [
                { "rank": "1st", "name": "V." }
            ]
        }"#;

        let tournament: Tournament = serde_json::from_str(json).unwrap();
        assert!(tournament.stages.is_empty());
        assert_eq!(tournament.final_results.len(), 1);
        assert_eq!(tournament.final_results[0].score, None);
    }
}
