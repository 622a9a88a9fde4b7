use crate::snapshot::Quiz;
use std::collections::HashSet;

/// Validate a quiz snapshot before the engine touches it.
/// Returns all violations at once (not just the first).
///
/// The engine itself never re-checks these: it assumes points are in
/// range, (round, team) pairs are unique, and at most one tiebreak
/// round exists.
pub fn validate_quiz(quiz: &Quiz) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut sequence_nrs = HashSet::new();
    let mut tiebreak_count = 0usize;
    for (i, round) in quiz.rounds.iter().enumerate() {
        if round.max_score <= 0.0 {
            errors.push(format!(
                "rounds[{}] '{}': max_score must be positive, got {}",
                i, round.title, round.max_score
            ));
        }
        if round.sequence_nr == 0 {
            errors.push(format!(
                "rounds[{}] '{}': sequence_nr must be at least 1",
                i, round.title
            ));
        }
        if !sequence_nrs.insert(round.sequence_nr) {
            errors.push(format!(
                "rounds[{}] '{}': duplicate sequence_nr {}",
                i, round.title, round.sequence_nr
            ));
        }
        if round.is_tiebreak {
            tiebreak_count += 1;
        }
    }
    if tiebreak_count > 1 {
        errors.push(format!(
            "rounds: at most one tiebreak round allowed, found {}",
            tiebreak_count
        ));
    }

    let mut display_nrs = HashSet::new();
    for (i, team) in quiz.teams.iter().enumerate() {
        if !display_nrs.insert(team.display_nr) {
            errors.push(format!(
                "teams[{}] '{}': duplicate display_nr {}",
                i, team.name, team.display_nr
            ));
        }
    }

    let mut score_keys = HashSet::new();
    for (i, score) in quiz.scores.iter().enumerate() {
        let round = quiz.round(score.round_id);
        if round.is_none() {
            errors.push(format!(
                "scores[{}]: unknown round_id {}",
                i, score.round_id
            ));
        }
        if quiz.team(score.team_id).is_none() {
            errors.push(format!("scores[{}]: unknown team_id {}", i, score.team_id));
        }
        if score.points < 0.0 {
            errors.push(format!(
                "scores[{}]: points must be non-negative, got {}",
                i, score.points
            ));
        }
        if let Some(round) = round {
            if score.points > round.max_score {
                errors.push(format!(
                    "scores[{}]: points {} exceed max_score {} of round '{}'",
                    i, score.points, round.max_score, round.title
                ));
            }
        }
        if !score_keys.insert((score.round_id, score.team_id)) {
            errors.push(format!(
                "scores[{}]: duplicate record for round {} / team {}",
                i, score.round_id, score.team_id
            ));
        }
    }

    let settings = &quiz.settings;
    if settings.scale_conversion_enabled {
        match settings.standard_scale {
            Some(scale) if scale > 0.0 => {}
            Some(scale) => errors.push(format!(
                "settings.standard_scale: must be positive when scale conversion is enabled, got {}",
                scale
            )),
            None => errors.push(
                "settings.standard_scale: required when scale conversion is enabled".to_string(),
            ),
        }
    }
    if settings.ex_aequo_enabled {
        if settings.ex_aequo_target.is_none() {
            errors.push("settings.ex_aequo_target: required when ex aequo is enabled".to_string());
        }
        if tiebreak_count == 0 {
            errors.push(
                "settings.ex_aequo_enabled: no round is marked is_tiebreak".to_string(),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
