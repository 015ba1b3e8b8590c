use super::{score::Score, special::Special, stage_kind::StageKind, tournament_kind::TournamentKind};
use crate::{data::records::StandingItem, model::errors::AggregationWarning};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which process produced a placement row. The curated final results and
/// the stage-derived standings are two independent views of the same
/// tournament and are never reconciled; consumers get the provenance
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    FinalResults,
    StageDerived
}

/// One row of a tournament's final ranking, with declared honors attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRow {
    pub rank: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub specials: Vec<Special>,
    pub provenance: Provenance
}

/// A stage rendered for match-history display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub name: String,
    pub kind: StageKind,
    pub standings: Vec<StandingItem>
}

/// Everything the presentation layer needs to render one tournament page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub name: String,
    pub date: String,
    pub kind: TournamentKind,
    pub stages: Vec<StageReport>,
    pub placements: Vec<PlacementRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replay_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    pub warnings: Vec<AggregationWarning>
}

/// One entry in a player's cross-event honor history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHonor {
    pub event: String,
    /// Rank label as recorded; empty when the player earned specials
    /// without a final placement
    pub rank: String,
    pub specials: Vec<Special>
}

/// One aggregated leaderboard record: a canonical identity with its summed
/// score and full honor history. Rebuilt wholesale on every run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPlayer {
    pub rank: u32,
    pub name: String,
    pub score: i32,
    pub avatar: String,
    pub honors: Vec<PlayerHonor>
}

/// The global leaderboard for one aggregation run, plus every warning the
/// run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub computed_at: DateTime<Utc>,
    pub players: Vec<LeaderboardPlayer>,
    pub warnings: Vec<AggregationWarning>
}

/// Full output of one processing run: per-tournament summaries for the
/// match-history pages and the global leaderboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub summaries: Vec<TournamentSummary>,
    pub leaderboard: AggregationReport
}
