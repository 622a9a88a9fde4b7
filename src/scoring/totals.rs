use super::convert::convert;
use crate::snapshot::{QuizSettings, Round, Score, Team};

/// Raw points a team recorded against a round, 0.0 when no record
/// exists. The (round, team) pair is unique per validation, so the
/// first match is the only match.
pub fn raw_points(team_id: u64, round_id: u64, scores: &[Score]) -> f64 {
    scores
        .iter()
        .find(|s| s.team_id == team_id && s.round_id == round_id)
        .map(|s| s.points)
        .unwrap_or(0.0)
}

/// A team's total: converted points summed over every scoring round.
///
/// Tiebreak rounds never contribute. Missing score records count as 0.
/// Summation runs in round order, which makes the result deterministic
/// for a given snapshot regardless of how the score list is arranged.
pub fn total_for(team_id: u64, rounds: &[Round], scores: &[Score], settings: &QuizSettings) -> f64 {
    rounds
        .iter()
        .filter(|r| !r.is_tiebreak)
        .map(|r| convert(raw_points(team_id, r.id, scores), r, settings))
        .sum()
}

/// The raw (unconverted) points a team recorded against the tiebreak
/// round. 0.0 when the quiz has no tiebreak round or the team has no
/// record on it.
pub fn tiebreak_value_for(team_id: u64, rounds: &[Round], scores: &[Score]) -> f64 {
    rounds
        .iter()
        .find(|r| r.is_tiebreak)
        .map(|r| raw_points(team_id, r.id, scores))
        .unwrap_or(0.0)
}

/// Number of non-excluded teams, i.e. the field the ranking runs over.
pub fn field_size(teams: &[Team]) -> usize {
    teams.iter().filter(|t| !t.excluded).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: u64, max_score: f64, exclude_from_scale: bool, is_tiebreak: bool) -> Round {
        Round {
            id,
            title: format!("Round {}", id),
            sequence_nr: id as u32,
            max_score,
            exclude_from_scale,
            is_tiebreak,
        }
    }

    fn score(round_id: u64, team_id: u64, points: f64) -> Score {
        Score {
            round_id,
            team_id,
            points,
        }
    }

    fn scaled_settings() -> QuizSettings {
        QuizSettings {
            scale_conversion_enabled: true,
            standard_scale: Some(10.0),
            ..QuizSettings::default()
        }
    }

    #[test]
    fn test_total_mixes_converted_and_raw_rounds() {
        // Round A: max 20, converted; Round B: max 10, excluded from scale.
        // 10 in A converts to 5, 5 in B stays 5 -> total 10.
        let rounds = vec![round(1, 20.0, false, false), round(2, 10.0, true, false)];
        let scores = vec![score(1, 1, 10.0), score(2, 1, 5.0)];
        let total = total_for(1, &rounds, &scores, &scaled_settings());
        assert!((total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_missing_records_count_as_zero() {
        let rounds = vec![round(1, 20.0, false, false), round(2, 10.0, false, false)];
        let scores = vec![score(1, 1, 20.0)];
        let total = total_for(1, &rounds, &scores, &scaled_settings());
        assert!((total - 10.0).abs() < 1e-9);
        // A team with no records at all totals zero
        assert_eq!(total_for(2, &rounds, &scores, &scaled_settings()), 0.0);
    }

    #[test]
    fn test_total_skips_tiebreak_round() {
        let rounds = vec![round(1, 20.0, false, false), round(2, 100.0, false, true)];
        let scores = vec![score(1, 1, 10.0), score(2, 1, 99.0)];
        let total = total_for(1, &rounds, &scores, &QuizSettings::default());
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_total_order_independent_within_tolerance() {
        let rounds = vec![
            round(1, 30.0, false, false),
            round(2, 7.0, false, false),
            round(3, 13.0, false, false),
        ];
        let scores = vec![score(1, 1, 11.0), score(2, 1, 3.0), score(3, 1, 9.0)];
        let mut shuffled = scores.clone();
        shuffled.reverse();
        let a = total_for(1, &rounds, &scores, &scaled_settings());
        let b = total_for(1, &rounds, &shuffled, &scaled_settings());
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_total_monotone_in_any_single_score() {
        let rounds = vec![round(1, 20.0, false, false), round(2, 10.0, true, false)];
        let before = total_for(1, &rounds, &[score(1, 1, 8.0)], &scaled_settings());
        let after = total_for(1, &rounds, &[score(1, 1, 9.0)], &scaled_settings());
        assert!(after > before);
    }

    #[test]
    fn test_tiebreak_value() {
        let rounds = vec![round(1, 20.0, false, false), round(2, 100.0, false, true)];
        let scores = vec![score(2, 1, 42.0)];
        assert_eq!(tiebreak_value_for(1, &rounds, &scores), 42.0);
        // No record on the tiebreak round
        assert_eq!(tiebreak_value_for(2, &rounds, &scores), 0.0);
        // No tiebreak round at all
        assert_eq!(tiebreak_value_for(1, &rounds[..1], &scores), 0.0);
    }

    #[test]
    fn test_field_size_ignores_excluded_teams() {
        let teams = vec![
            Team {
                id: 1,
                display_nr: 1,
                name: "A".to_string(),
                excluded: false,
            },
            Team {
                id: 2,
                display_nr: 2,
                name: "B".to_string(),
                excluded: true,
            },
        ];
        assert_eq!(field_size(&teams), 1);
    }
}
