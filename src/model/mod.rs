use crate::{
    data::{records::Tournament, Dataset},
    model::{
        errors::AggregationWarning,
        finalize::finalize,
        leaderboard::{aggregate_leaderboard, AggregationConfig},
        standings::build_standings,
        structures::processing::{ProcessingResult, StageReport, TournamentSummary}
    },
    utils::progress_utils::progress_bar
};
use tracing::{info, warn};

/// The flow of the processor
pub mod aliases;
pub mod avatars;
pub mod constants;
pub mod errors;
pub mod finalize;
pub mod leaderboard;
pub mod series;
pub mod standings;
pub mod structures;

/// Runs one full processing pass over a dataset: every tournament is
/// reduced to a match-history summary, then all of them feed the global
/// leaderboard. Inputs are immutable for the duration of the pass and the
/// result replaces any prior snapshot wholesale.
pub fn process_dataset(dataset: &Dataset) -> ProcessingResult {
    let bar = progress_bar(dataset.tournaments.len() as u64, "Building tournament summaries");

    let summaries = dataset
        .tournaments
        .iter()
        .map(|tournament| {
            let summary = summarize_tournament(tournament, &dataset.config);
            bar.inc(1);
            summary
        })
        .collect();
    bar.finish();

    info!(tournaments = dataset.tournaments.len(), "aggregating leaderboard");
    let leaderboard = aggregate_leaderboard(&dataset.tournaments, &dataset.config);

    ProcessingResult { summaries, leaderboard }
}

/// Builds the match-history view of one tournament. A structural error in
/// a stage downgrades to a warning and skips that stage only — a bad
/// bracket must not take the rest of the tournament (or any other
/// tournament) down with it.
pub fn summarize_tournament(tournament: &Tournament, config: &AggregationConfig) -> TournamentSummary {
    let mut warnings = Vec::new();
    let mut stages = Vec::with_capacity(tournament.stages.len());

    for stage in &tournament.stages {
        match build_standings(stage) {
            Ok(standings) => stages.push(StageReport {
                name: stage.name.clone(),
                kind: stage.kind,
                standings: standings.rows(config.scoring.draw_policy)
            }),
            Err(source) => {
                warn!(
                    tournament = %tournament.name,
                    stage = %stage.name,
                    error = %source,
                    "skipping stage with structural error"
                );
                warnings.push(AggregationWarning::InvalidStage {
                    tournament: tournament.name.clone(),
                    stage: stage.name.clone(),
                    source
                });
            }
        }
    }

    let finalized = finalize(tournament, &config.honors, &config.aliases);
    warnings.extend(finalized.warnings);

    TournamentSummary {
        name: tournament.name.clone(),
        date: tournament.date.clone(),
        kind: tournament.kind,
        stages,
        placements: finalized.placements,
        replay_link: tournament.replay_link.clone(),
        comments: tournament.comments.clone(),
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::summarize_tournament;
    use crate::{
        model::{errors::AggregationWarning, leaderboard::AggregationConfig},
        utils::test_utils::{generate_bracket_stage, generate_map, generate_placement, generate_solo_tournament}
    };

    #[test]
    fn test_bad_stage_is_isolated() {
        let mut tournament = generate_solo_tournament(
            "第二届Major",
            &["Shinon", "Hobaka"],
            vec![generate_placement("1st", "Shinon")]
        );
        tournament.stages = vec![
            generate_bracket_stage(
                "决赛",
                vec![
                    generate_map(1, "Shinon", 53, "Hobaka", 40, 1),
                    generate_map(1, "Shinon", 30, "Hobaka", 20, 1),
                ]
            ),
            generate_bracket_stage("胜者组", vec![generate_map(1, "Shinon", 34, "Hobaka", 27, 1)]),
        ];

        let summary = summarize_tournament(&tournament, &AggregationConfig::default());

        // The duplicate-map stage is dropped, the healthy one survives.
        assert_eq!(summary.stages.len(), 1);
        assert_eq!(summary.stages[0].name, "胜者组");
        assert!(matches!(
            summary.warnings[0],
            AggregationWarning::InvalidStage { ref stage, .. } if stage == "决赛"
        ));
        assert_eq!(summary.placements.len(), 1);
    }
}
