use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

/// A reported score is either an actual point total or a status sentinel
/// ("W", "Q", "OUT", ...). The source data mixes both in a single field;
/// keeping them in one tagged type forces every consumer to handle the
/// sentinel case instead of coercing it to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Points(i32),
    Status(ScoreStatus)
}

/// The closed set of status sentinels observed in the raw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ScoreStatus {
    /// Series or match credited without play (forfeit, walkover)
    #[serde(rename = "W", alias = "Win")]
    Win,
    #[serde(rename = "L", alias = "Loss")]
    Loss,
    /// Qualified out of a Swiss or group phase
    #[serde(rename = "Q")]
    Qualified,
    #[serde(rename = "OUT")]
    Eliminated,
    /// Placeholder for rows that carry no score at all
    #[serde(rename = "-")]
    Unplayed
}

impl Score {
    pub fn points(&self) -> Option<i32> {
        match self {
            Score::Points(p) => Some(*p),
            Score::Status(_) => None
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Score::Status(_))
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreStatus::Win => "W",
            ScoreStatus::Loss => "L",
            ScoreStatus::Qualified => "Q",
            ScoreStatus::Eliminated => "OUT",
            ScoreStatus::Unplayed => "-"
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Points(p) => write!(f, "{}", p),
            Score::Status(s) => write!(f, "{}", s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Score, ScoreStatus};

    #[test]
    fn test_deserialize_numeric() {
        let score: Score = serde_json::from_str("34").unwrap();
        assert_eq!(score, Score::Points(34));
    }

    #[test]
    fn test_deserialize_sentinel() {
        let score: Score = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(score, Score::Status(ScoreStatus::Win));
    }

    #[test]
    fn test_deserialize_sentinel_alias() {
        let score: Score = serde_json::from_str("\"Win\"").unwrap();
        assert_eq!(score, Score::Status(ScoreStatus::Win));

        let score: Score = serde_json::from_str("\"Loss\"").unwrap();
        assert_eq!(score, Score::Status(ScoreStatus::Loss));
    }

    #[test]
    fn test_deserialize_placeholder() {
        let score: Score = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(score, Score::Status(ScoreStatus::Unplayed));
    }

    #[test]
    fn test_deserialize_unknown_sentinel_fails() {
        let result: Result<Score, _> = serde_json::from_str("\"DNF\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_points_extraction() {
        assert_eq!(Score::Points(17).points(), Some(17));
        assert_eq!(Score::Status(ScoreStatus::Qualified).points(), None);
    }

    #[test]
    fn test_serialize_round_trip() {
        let json = serde_json::to_string(&Score::Status(ScoreStatus::Eliminated)).unwrap();
        assert_eq!(json, "\"OUT\"");

        let json = serde_json::to_string(&Score::Points(42)).unwrap();
        assert_eq!(json, "42");
    }
}
