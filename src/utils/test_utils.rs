use crate::{
    data::records::{FinalPlacement, MapResult, Side, Stage, StandingItem, Tournament},
    model::structures::{
        score::{Score, ScoreStatus},
        scoring::RawScoringRule,
        stage_kind::StageKind,
        tournament_kind::TournamentKind,
        winner_mark::WinnerMark
    }
};
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn generate_side(name: &str, score: Score) -> Side {
    Side {
        name: name.to_string(),
        players: None,
        score
    }
}

/// One map of a best-of-N series. `winner` follows the raw encoding:
/// 0 draw, 1 first side, 2 second side; anything else means unrecorded.
pub fn generate_map(map: u32, name1: &str, score1: i32, name2: &str, score2: i32, winner: i32) -> MapResult {
    MapResult {
        map: Some(map),
        ..generate_map_no_index(name1, score1, name2, score2, winner)
    }
}

pub fn generate_map_no_index(name1: &str, score1: i32, name2: &str, score2: i32, winner: i32) -> MapResult {
    MapResult {
        date: None,
        map: None,
        team1: generate_side(name1, Score::Points(score1)),
        team2: generate_side(name2, Score::Points(score2)),
        is_ot: false,
        overtime: None,
        winner: WinnerMark::try_from(winner).ok(),
        note: None
    }
}

/// An aggregate walkover record: sentinel scores, winner trusted as-is.
pub fn generate_forfeit(name1: &str, name2: &str, winner: i32) -> MapResult {
    MapResult {
        date: Some("Auto".to_string()),
        map: Some(1),
        team1: generate_side(name1, Score::Status(ScoreStatus::Win)),
        team2: generate_side(name2, Score::Status(ScoreStatus::Loss)),
        is_ot: false,
        overtime: None,
        winner: WinnerMark::try_from(winner).ok(),
        note: None
    }
}

pub fn generate_bracket_stage(name: &str, matches: Vec<MapResult>) -> Stage {
    Stage {
        name: name.to_string(),
        kind: StageKind::Bracket,
        matches,
        standings: Vec::new()
    }
}

pub fn generate_table_stage(name: &str, rows: Vec<(&str, &str)>) -> Stage {
    let standings = rows
        .into_iter()
        .map(|(rank, group)| StandingItem {
            rank: rank.to_string(),
            name: group.to_string(),
            players: None,
            score: Score::Status(ScoreStatus::Qualified),
            record: None
        })
        .collect();

    Stage {
        name: name.to_string(),
        kind: StageKind::Swiss,
        matches: Vec::new(),
        standings
    }
}

pub fn generate_placement(rank: &str, name: &str) -> FinalPlacement {
    FinalPlacement {
        rank: rank.to_string(),
        name: name.to_string(),
        players: None,
        score: None,
        note: None
    }
}

pub fn generate_team_placement(rank: &str, name: &str, players: &[&str]) -> FinalPlacement {
    FinalPlacement {
        players: Some(players.iter().map(|p| p.to_string()).collect()),
        ..generate_placement(rank, name)
    }
}

pub fn generate_solo_tournament(name: &str, participants: &[&str], final_results: Vec<FinalPlacement>) -> Tournament {
    Tournament {
        name: name.to_string(),
        date: "2025.1.1".to_string(),
        kind: TournamentKind::Solo,
        participants: if participants.is_empty() {
            None
        } else {
            Some(participants.iter().map(|p| p.to_string()).collect())
        },
        stages: Vec::new(),
        final_results,
        comments: None,
        replay_link: None
    }
}

pub fn generate_team_tournament(name: &str, final_results: Vec<FinalPlacement>) -> Tournament {
    Tournament {
        kind: TournamentKind::Team,
        ..generate_solo_tournament(name, &[], final_results)
    }
}

pub fn generate_scoring_rule(event: &str, placements: &[(&str, i32)], specials: &[(&str, i32)]) -> RawScoringRule {
    RawScoringRule {
        event: event.to_string(),
        placements: placements
            .iter()
            .map(|(label, points)| (label.to_string(), *points))
            .collect::<IndexMap<_, _>>(),
        specials: specials
            .iter()
            .map(|(label, points)| (label.to_string(), *points))
            .collect::<IndexMap<_, _>>()
    }
}

/// A reproducible best-of-N sequence between two sides. Scores are random
/// but each map's winner mark agrees with its scores, so the fixtures look
/// like regulation (non-overtime) data.
pub fn generate_random_series(name1: &str, name2: &str, n_maps: u32, seed: u64) -> Vec<MapResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut maps = Vec::with_capacity(n_maps as usize);

    for map in 1..=n_maps {
        let score1 = rng.random_range(10..=45);
        let mut score2 = rng.random_range(10..=45);
        while score2 == score1 {
            score2 = rng.random_range(10..=45);
        }

        let winner = if score1 > score2 { 1 } else { 2 };
        maps.push(generate_map(map, name1, score1, name2, score2, winner));
    }

    maps
}

#[cfg(test)]
mod tests {
    use super::generate_random_series;
    use crate::model::structures::winner_mark::WinnerMark;

    #[test]
    fn test_random_series_is_reproducible() {
        let a = generate_random_series("A", "B", 5, 42);
        let b = generate_random_series("A", "B", 5, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_series_winners_match_scores() {
        for record in generate_random_series("A", "B", 9, 7) {
            let (s1, s2) = (record.team1.score.points().unwrap(), record.team2.score.points().unwrap());
            match record.winner {
                Some(WinnerMark::SideOne) => assert!(s1 > s2),
                Some(WinnerMark::SideTwo) => assert!(s2 > s1),
                other => panic!("unexpected winner mark {:?}", other)
            }
        }
    }
}
