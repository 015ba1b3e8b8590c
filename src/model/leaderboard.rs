use crate::{
    data::records::Tournament,
    model::{
        aliases::{AliasTable, NameRegistry},
        avatars::AvatarDirectory,
        errors::AggregationWarning,
        finalize::finalize,
        structures::{
            honors::HonorsTable,
            placement::Placement,
            processing::{AggregationReport, LeaderboardPlayer, PlayerHonor},
            scoring::{ScoringConfig, ScoringRule},
            special::Special,
            tournament_kind::TournamentKind
        }
    }
};
use chrono::Utc;
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::warn;

/// Everything the aggregator needs besides the tournaments themselves.
#[derive(Debug, Clone, Default)]
pub struct AggregationConfig {
    pub scoring: ScoringConfig,
    pub honors: HonorsTable,
    pub aliases: AliasTable,
    pub avatars: AvatarDirectory,
    pub title: String,
    pub year: Option<i32>
}

/// One player's points earned from one tournament, before identity merge.
#[derive(Debug, Clone)]
struct Contribution {
    name: String,
    points: i32,
    honor: PlayerHonor
}

#[derive(Debug, Clone)]
struct TournamentTally {
    contributions: Vec<Contribution>,
    warnings: Vec<AggregationWarning>
}

/// Accumulates merged player records in insertion order; sorted once at
/// the end of the run. Owned exclusively by the aggregation pass — inputs
/// are never mutated, and each run rebuilds the board from scratch.
#[derive(Debug, Default)]
pub struct LeaderboardTracker {
    players: IndexMap<usize, TrackedPlayer>
}

#[derive(Debug, Default)]
struct TrackedPlayer {
    score: i32,
    honors: Vec<PlayerHonor>
}

impl LeaderboardTracker {
    pub fn new() -> LeaderboardTracker {
        LeaderboardTracker::default()
    }

    pub fn add(&mut self, id: usize, points: i32, honor: PlayerHonor) {
        let entry = self.players.entry(id).or_default();
        entry.score += points;
        entry.honors.push(honor);
    }

    /// Sorts, ranks and publishes the board. Ordering is fully
    /// deterministic: summed score, then 1st-place finishes, then MVP
    /// count, then canonical name.
    pub fn into_players(self, registry: &NameRegistry, avatars: &AvatarDirectory) -> Vec<LeaderboardPlayer> {
        let mut entries: Vec<(usize, TrackedPlayer)> = self.players.into_iter().collect();

        entries.sort_by(|(id_a, a), (id_b, b)| {
            b.score
                .cmp(&a.score)
                .then_with(|| first_places(b).cmp(&first_places(a)))
                .then_with(|| mvp_count(b).cmp(&mvp_count(a)))
                .then_with(|| registry.display(*id_a).cmp(registry.display(*id_b)))
        });

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (id, tracked))| {
                let name = registry.display(id).to_string();
                LeaderboardPlayer {
                    rank: i as u32 + 1,
                    avatar: avatars.path_for(&name),
                    name,
                    score: tracked.score,
                    honors: tracked.honors
                }
            })
            .collect()
    }
}

fn first_places(player: &TrackedPlayer) -> usize {
    player
        .honors
        .iter()
        .filter(|h| Placement::parse(&h.rank) == Some(Placement::Champion))
        .count()
}

fn mvp_count(player: &TrackedPlayer) -> usize {
    player
        .honors
        .iter()
        .filter(|h| h.specials.contains(&Special::Mvp))
        .count()
}

/// Builds the cross-tournament leaderboard.
///
/// Tournaments are scored independently (in parallel — per-event scoring
/// shares nothing), then merged serially by canonical player key so the
/// reduce step cannot lose updates. The whole board is recomputed from its
/// inputs on every call; nothing is retained between runs.
pub fn aggregate_leaderboard(tournaments: &[Tournament], config: &AggregationConfig) -> AggregationReport {
    let tallies: Vec<TournamentTally> = tournaments
        .par_iter()
        .map(|tournament| tally_tournament(tournament, config))
        .collect();

    let mut registry = NameRegistry::new();
    let mut tracker = LeaderboardTracker::new();
    let mut warnings = Vec::new();

    for tally in tallies {
        warnings.extend(tally.warnings);
        for contribution in tally.contributions {
            let id = registry.resolve(&contribution.name, &config.aliases);
            tracker.add(id, contribution.points, contribution.honor);
        }
    }

    AggregationReport {
        title: config.title.clone(),
        year: config.year,
        computed_at: Utc::now(),
        players: tracker.into_players(&registry, &config.avatars),
        warnings
    }
}

/// Scores one tournament's placements and stray honors against its rule.
/// A missing rule is flagged and the event contributes zero — never
/// silently skipped, so data gaps stay visible.
fn tally_tournament(tournament: &Tournament, config: &AggregationConfig) -> TournamentTally {
    let finalized = finalize(tournament, &config.honors, &config.aliases);
    let mut warnings = finalized.warnings;
    let mut contributions = Vec::new();

    let rule = config.scoring.rule_for(&tournament.name);
    if rule.is_none() {
        warn!(tournament = %tournament.name, "no scoring rule declared; contributions are zero");
        warnings.push(AggregationWarning::MissingScoringRule {
            tournament: tournament.name.clone()
        });
    }

    for row in &finalized.placements {
        let base = match rule {
            Some(rule) => match rule.base_points(&row.rank) {
                Some(points) => points,
                None => {
                    warnings.push(AggregationWarning::UnscoredPlacement {
                        tournament: tournament.name.clone(),
                        rank: row.rank.clone()
                    });
                    0
                }
            },
            None => 0
        };

        // Team placements fan out: every roster member earns the full
        // tied-rank value plus their own declared specials.
        let members: Vec<&str> = match (&tournament.kind, &row.players) {
            (TournamentKind::Team, Some(players)) if !players.is_empty() => players.iter().map(String::as_str).collect(),
            _ => vec![row.name.as_str()]
        };

        for member in members {
            let specials = if member == row.name {
                row.specials.clone()
            } else {
                config
                    .honors
                    .specials_for(&tournament.name, &config.aliases.key(member))
                    .to_vec()
            };

            let bonus = bonus_points(rule, &specials);
            contributions.push(Contribution {
                name: member.to_string(),
                points: base + bonus,
                honor: PlayerHonor {
                    event: tournament.name.clone(),
                    rank: row.rank.clone(),
                    specials
                }
            });
        }
    }

    for (player, specials) in &finalized.unplaced_honors {
        let bonus = bonus_points(rule, specials);
        contributions.push(Contribution {
            name: player.clone(),
            points: bonus,
            honor: PlayerHonor {
                event: tournament.name.clone(),
                rank: String::new(),
                specials: specials.clone()
            }
        });
    }

    TournamentTally { contributions, warnings }
}

fn bonus_points(rule: Option<&ScoringRule>, specials: &[Special]) -> i32 {
    match rule {
        Some(rule) => specials.iter().map(|s| rule.bonus_points(*s)).sum(),
        None => 0
    }
}

#[cfg(test)]
mod tests {
    use super::{aggregate_leaderboard, AggregationConfig};
    use crate::{
        model::{
            aliases::AliasTable,
            errors::AggregationWarning,
            structures::{
                honors::{HonorDeclaration, HonorsTable},
                scoring::{DrawPolicy, ScoringConfig},
                special::Special
            }
        },
        utils::test_utils::{
            generate_placement, generate_scoring_rule, generate_solo_tournament, generate_team_placement,
            generate_team_tournament
        }
    };
    use std::collections::HashMap;

    fn msi_config() -> AggregationConfig {
        let scoring = ScoringConfig::new(
            vec![generate_scoring_rule(
                "第一届MSI",
                &[("冠军", 40), ("亚军", 20), ("季军", 10), ("殿军", 5)],
                &[]
            )],
            DrawPolicy::Zero
        )
        .unwrap();

        AggregationConfig {
            scoring,
            title: "Best Player of 2025".to_string(),
            year: Some(2025),
            ..AggregationConfig::default()
        }
    }

    fn msi() -> crate::data::records::Tournament {
        generate_solo_tournament(
            "第一届MSI",
            &["V.", "Shin'on", "hobaka", "中华小当家"],
            vec![
                generate_placement("1st", "V."),
                generate_placement("2nd", "Shin'on"),
                generate_placement("3rd", "hobaka"),
                generate_placement("4th", "中华小当家"),
            ]
        )
    }

    #[test]
    fn test_per_event_rule_application() {
        let report = aggregate_leaderboard(&[msi()], &msi_config());

        let scores: Vec<(&str, i32)> = report.players.iter().map(|p| (p.name.as_str(), p.score)).collect();
        assert_eq!(
            scores,
            vec![("V.", 40), ("Shin'on", 20), ("hobaka", 10), ("中华小当家", 5)]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_rule_flags_and_isolates() {
        let mut unruled = msi();
        unruled.name = "第二届MSI".to_string();

        let report = aggregate_leaderboard(&[msi(), unruled], &msi_config());

        // The unruled event contributes zero everywhere but the ruled one
        // is untouched.
        let v = report.players.iter().find(|p| p.name == "V.").unwrap();
        assert_eq!(v.score, 40);
        assert_eq!(v.honors.len(), 2);
        assert!(report.warnings.contains(&AggregationWarning::MissingScoringRule {
            tournament: "第二届MSI".to_string()
        }));
    }

    #[test]
    fn test_tied_rank_rows_each_get_full_points() {
        let tournament = generate_solo_tournament(
            "第一届MSI",
            &["a", "b", "c"],
            vec![
                generate_placement("1st", "a"),
                generate_placement("3rd", "b"),
                generate_placement("3rd", "c"),
            ]
        );

        let report = aggregate_leaderboard(&[tournament], &msi_config());
        let b = report.players.iter().find(|p| p.name == "b").unwrap();
        let c = report.players.iter().find(|p| p.name == "c").unwrap();

        assert_eq!(b.score, 10);
        assert_eq!(c.score, 10);
    }

    #[test]
    fn test_alias_variants_merge_into_one_player() {
        let mut config = msi_config();
        config.aliases = AliasTable::from(HashMap::from([("Shinon".to_string(), "Shin'on".to_string())]));

        let mut second = msi();
        second.name = "第一届MSI".to_string();
        second.final_results[1].name = "Shinon".to_string();

        let report = aggregate_leaderboard(&[msi(), second], &config);

        let shinon: Vec<_> = report
            .players
            .iter()
            .filter(|p| p.name.to_lowercase().contains("shin"))
            .collect();
        assert_eq!(shinon.len(), 1);
        assert_eq!(shinon[0].name, "Shin'on");
        assert_eq!(shinon[0].score, 40);
        assert_eq!(shinon[0].honors.len(), 2);
    }

    #[test]
    fn test_deterministic_tie_break_order() {
        let scoring = ScoringConfig::new(
            vec![
                generate_scoring_rule("杯A", &[("冠军", 30), ("亚军", 30)], &[]),
                generate_scoring_rule("杯B", &[("冠军", 30), ("亚军", 30)], &[]),
            ],
            DrawPolicy::Zero
        )
        .unwrap();
        let config = AggregationConfig {
            scoring,
            ..AggregationConfig::default()
        };

        let a = generate_solo_tournament(
            "杯A",
            &[],
            vec![generate_placement("1st", "zeta"), generate_placement("2nd", "alpha")]
        );
        let b = generate_solo_tournament(
            "杯B",
            &[],
            vec![generate_placement("1st", "alpha"), generate_placement("2nd", "zeta")]
        );

        let report = aggregate_leaderboard(&[a, b], &config);

        // Equal score and equal 1st-place count: name breaks the tie.
        assert_eq!(report.players[0].name, "alpha");
        assert_eq!(report.players[0].rank, 1);
        assert_eq!(report.players[1].name, "zeta");
        assert_eq!(report.players[1].rank, 2);
    }

    #[test]
    fn test_team_rows_fan_out_to_rosters() {
        let scoring = ScoringConfig::new(
            vec![generate_scoring_rule(
                "第三届Major",
                &[("冠军", 110)],
                &[("MVP", 30), ("EVP", 10)]
            )],
            DrawPolicy::Zero
        )
        .unwrap();
        let honors = HonorsTable::build(
            vec![
                HonorDeclaration {
                    event: "第三届Major".to_string(),
                    player: "Shaw".to_string(),
                    specials: vec![Special::Mvp]
                },
                HonorDeclaration {
                    event: "第三届Major".to_string(),
                    player: "中华小当家".to_string(),
                    specials: vec![Special::Evp]
                },
            ],
            &AliasTable::default()
        );
        let config = AggregationConfig {
            scoring,
            honors,
            ..AggregationConfig::default()
        };

        let tournament = generate_team_tournament(
            "第三届Major",
            vec![generate_team_placement("1st", "老鸨组", &["Shaw", "云霄", "中华小当家"])]
        );

        let report = aggregate_leaderboard(&[tournament], &config);

        let score_of = |name: &str| report.players.iter().find(|p| p.name == name).map(|p| p.score);

        // Full tied-rank value per member, individual bonuses on top.
        assert_eq!(score_of("Shaw"), Some(140));
        assert_eq!(score_of("中华小当家"), Some(120));
        assert_eq!(score_of("云霄"), Some(110));

        // The team name itself never reaches the board.
        assert_eq!(score_of("老鸨组"), None);
    }

    #[test]
    fn test_honor_only_entry_scores_bonus() {
        let mut config = msi_config();
        let scoring = ScoringConfig::new(
            vec![generate_scoring_rule(
                "第三届Major",
                &[("冠军", 110)],
                &[("MVP", 30), ("EVP", 10)]
            )],
            DrawPolicy::Zero
        )
        .unwrap();
        config.scoring = scoring;
        config.honors = HonorsTable::build(
            vec![
                HonorDeclaration {
                    event: "第三届Major".to_string(),
                    player: "Shaw".to_string(),
                    specials: vec![Special::Mvp]
                },
                HonorDeclaration {
                    event: "第三届Major".to_string(),
                    player: "lese".to_string(),
                    specials: vec![Special::Evp]
                },
            ],
            &AliasTable::default()
        );

        let tournament = generate_solo_tournament("第三届Major", &[], vec![generate_placement("1st", "Shaw")]);

        let report = aggregate_leaderboard(&[tournament], &config);

        let shaw = report.players.iter().find(|p| p.name == "Shaw").unwrap();
        assert_eq!(shaw.score, 140);

        // lese never placed but the declared EVP still pays out.
        let lese = report.players.iter().find(|p| p.name == "lese").unwrap();
        assert_eq!(lese.score, 10);
        assert_eq!(lese.honors[0].rank, "");
    }

    #[test]
    fn test_avatar_fallback_on_report() {
        let report = aggregate_leaderboard(&[msi()], &msi_config());
        assert!(report.players.iter().all(|p| p.avatar == "/avatar/default.jpg"));
    }
}
