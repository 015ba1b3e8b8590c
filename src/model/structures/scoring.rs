use super::{placement::Placement, special::Special};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, str::FromStr};
use thiserror::Error;

/// How a drawn map counts when series tallies are credited.
///
/// The source history contains exactly one drawn overtime map and never says
/// how it should score, so the choice is configuration rather than a rule.
/// The series winner is unaffected either way; only the credited map-win
/// tally shown on bracket rows changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPolicy {
    /// A draw credits neither side
    #[default]
    Zero,
    /// Each side is credited half a map win
    Split,
    /// Drawn maps are excluded from the series log entirely
    Ignore
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringRuleError {
    #[error("scoring rule for '{event}' names unknown placement '{label}'")]
    UnknownPlacement { event: String, label: String },

    #[error("scoring rule for '{event}' names unknown special '{label}'")]
    UnknownSpecial { event: String, label: String }
}

/// Wire form of one event's scoring rule, as written in the dataset.
/// Placement keys are free-form labels; `ScoringRule` canonicalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScoringRule {
    pub event: String,
    #[serde(default)]
    pub placements: IndexMap<String, i32>,
    #[serde(default)]
    pub specials: IndexMap<String, i32>
}

/// One event's structured scoring table: base points per placement plus
/// bonus points per special honor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoringRule {
    placements: HashMap<Placement, i32>,
    specials: HashMap<Special, i32>
}

impl ScoringRule {
    /// Base points for a raw rank label, if the label is a placement the
    /// rule prices. Rows sharing a tied label each receive the full value.
    pub fn base_points(&self, rank_label: &str) -> Option<i32> {
        let placement = Placement::parse(rank_label)?;
        self.placements.get(&placement).copied()
    }

    /// Bonus points for one special; unpriced specials are worth nothing.
    pub fn bonus_points(&self, special: Special) -> i32 {
        self.specials.get(&special).copied().unwrap_or(0)
    }
}

impl TryFrom<RawScoringRule> for ScoringRule {
    type Error = ScoringRuleError;

    fn try_from(raw: RawScoringRule) -> Result<Self, Self::Error> {
        let mut placements = HashMap::with_capacity(raw.placements.len());
        for (label, points) in &raw.placements {
            let placement = Placement::parse(label).ok_or_else(|| ScoringRuleError::UnknownPlacement {
                event: raw.event.clone(),
                label: label.clone()
            })?;
            placements.insert(placement, *points);
        }

        let mut specials = HashMap::with_capacity(raw.specials.len());
        for (label, points) in &raw.specials {
            let special = Special::from_str(label).map_err(|_| ScoringRuleError::UnknownSpecial {
                event: raw.event.clone(),
                label: label.clone()
            })?;
            specials.insert(special, *points);
        }

        Ok(ScoringRule { placements, specials })
    }
}

/// All scoring configuration for one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    rules: HashMap<String, ScoringRule>,
    pub draw_policy: DrawPolicy
}

impl ScoringConfig {
    pub fn new(raw_rules: Vec<RawScoringRule>, draw_policy: DrawPolicy) -> Result<ScoringConfig, ScoringRuleError> {
        let mut rules = HashMap::with_capacity(raw_rules.len());
        for raw in raw_rules {
            let key = event_key(&raw.event);
            rules.insert(key, ScoringRule::try_from(raw)?);
        }

        Ok(ScoringConfig { rules, draw_policy })
    }

    pub fn rule_for(&self, event: &str) -> Option<&ScoringRule> {
        self.rules.get(&event_key(event))
    }
}

/// Lookup key for event names. The dataset spells the same event both with
/// and without interior spaces ("第一届 Major" vs "第一届Major"), so keys
/// drop whitespace.
pub fn event_key(name: &str) -> String {
    name.split_whitespace().collect()
}
