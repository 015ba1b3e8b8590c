use crate::model::{
    aliases::AliasTable,
    avatars::AvatarDirectory,
    constants::DEFAULT_REPORT_TITLE,
    leaderboard::AggregationConfig,
    structures::{
        honors::{HonorDeclaration, HonorsTable},
        scoring::{DrawPolicy, RawScoringRule, ScoringConfig, ScoringRuleError}
    }
};
use records::Tournament;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

pub mod records;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Scoring(#[from] ScoringRuleError)
}

/// Wire form of the versioned dataset document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    tournaments: Vec<Tournament>,
    #[serde(default)]
    scoring_rules: Vec<RawScoringRule>,
    #[serde(default)]
    draw_policy: DrawPolicy,
    #[serde(default)]
    honors: Vec<HonorDeclaration>,
    #[serde(default)]
    aliases: AliasTable,
    #[serde(default)]
    avatars: AvatarDirectory
}

/// The full immutable input of one processing run: tournament records plus
/// all configuration (scoring rules, honors, aliases, avatars). Loaded
/// once at process start; the engine itself never touches I/O.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub tournaments: Vec<Tournament>,
    pub config: AggregationConfig
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Dataset, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let scoring = ScoringConfig::new(raw.scoring_rules, raw.draw_policy)?;
        let honors = HonorsTable::build(raw.honors, &raw.aliases);

        Ok(Dataset {
            tournaments: raw.tournaments,
            config: AggregationConfig {
                scoring,
                honors,
                aliases: raw.aliases,
                avatars: raw.avatars,
                title: raw.title.unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string()),
                year: raw.year
            }
        })
    }

    pub fn from_file(path: &Path) -> Result<Dataset, DatasetError> {
        let json = fs::read_to_string(path)?;
        Dataset::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;

    #[test]
    fn test_minimal_dataset() {
        let dataset = Dataset::from_json(r#"{ "tournaments": [] }"#).unwrap();
        assert!(dataset.tournaments.is_empty());
        assert_eq!(dataset.config.title, "Best Player");
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "title": "Best Player of 2025",
            "year": 2025,
            "tournaments": [
                {
                    "name": "第一届 MSI",
                    "date": "2025.8.22 - 8.23",
                    "type": "Solo",
                    "finalResults": [{ "rank": "1st", "name": "V." }]
                }
            ],
            "scoringRules": [
                { "event": "第一届MSI", "placements": { "冠军": 40 }, "specials": { "MVP": 30 } }
            ],
            "drawPolicy": "split",
            "honors": [{ "event": "第一届MSI", "player": "V.", "specials": ["MVP"] }],
            "aliases": { "Shinon": "Shin'on" },
            "avatars": { "V.": "3836872723 V.jpg" }
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.tournaments.len(), 1);
        assert_eq!(dataset.config.year, Some(2025));
        assert!(dataset.config.scoring.rule_for("第一届MSI").is_some());
        assert_eq!(dataset.config.avatars.path_for("v."), "/avatar/3836872723 V.jpg");
    }

    #[test]
    fn test_bad_rule_label_is_a_load_error() {
        let json = r#"{
            "tournaments": [],
            "scoringRules": [{ "event": "杯", "placements": { "王者": 40 } }]
        }"#;

        assert!(Dataset::from_json(json).is_err());
    }
}
