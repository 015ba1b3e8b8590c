use serde::Serialize;
use thiserror::Error;

/// Structural defects in the raw records. Each one fails only the series or
/// stage it occurred in; sibling computations are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordError {
    #[error("cannot resolve a series from zero map records")]
    EmptySeries,

    #[error("map records pair different sides: expected '{expected_a}' vs '{expected_b}', found '{found_a}' vs '{found_b}'")]
    MismatchedSides {
        expected_a: String,
        expected_b: String,
        found_a: String,
        found_b: String
    },

    #[error("duplicate map index {index} for pairing '{side_a}' vs '{side_b}'")]
    DuplicateMapIndex { index: u32, side_a: String, side_b: String },

    #[error("multiple map records for '{side_a}' vs '{side_b}' require map indices")]
    MissingMapIndex { side_a: String, side_b: String },

    /// Not a data defect: the series simply has no deciding majority yet.
    /// Raised only when a caller demands a decided winner.
    #[error("series '{side_a}' vs '{side_b}' is undecided at {wins_a}-{wins_b}")]
    IncompleteSeries {
        side_a: String,
        side_b: String,
        wins_a: u32,
        wins_b: u32
    },

    #[error("duplicate rank label '{rank}' in stage '{stage}'")]
    DuplicateRank { rank: String, stage: String }
}

/// Referential gaps surfaced on the run report. Computation proceeds with
/// best-effort defaults; the presentation layer decides how loudly to flag
/// them.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AggregationWarning {
    #[error("no scoring rule declared for tournament '{tournament}'")]
    MissingScoringRule { tournament: String },

    #[error("'{name}' appears in the final results of '{tournament}' but in no roster or participant list")]
    UnknownParticipant { tournament: String, name: String },

    #[error("rank label '{rank}' in '{tournament}' carries no point value")]
    UnscoredPlacement { tournament: String, rank: String },

    #[error("stage '{stage}' of '{tournament}' was skipped: {source}")]
    InvalidStage {
        tournament: String,
        stage: String,
        #[source]
        source: RecordError
    }
}

#[cfg(test)]
mod tests {
    use super::{AggregationWarning, RecordError};

    #[test]
    fn test_record_error_display() {
        let err = RecordError::DuplicateMapIndex {
            index: 2,
            side_a: "八组".to_string(),
            side_b: "六组".to_string()
        };

        assert_eq!(err.to_string(), "duplicate map index 2 for pairing '八组' vs '六组'");
    }

    #[test]
    fn test_warning_carries_source() {
        let warning = AggregationWarning::InvalidStage {
            tournament: "第二届Major".to_string(),
            stage: "决赛".to_string(),
            source: RecordError::EmptySeries
        };

        assert!(warning.to_string().contains("决赛"));
        assert!(warning.to_string().contains("zero map records"));
    }

    #[test]
    fn test_warning_serializes_tagged() {
        let warning = AggregationWarning::MissingScoringRule {
            tournament: "第一届LBC".to_string()
        };

        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "missingScoringRule");
        assert_eq!(json["tournament"], "第一届LBC");
    }
}
