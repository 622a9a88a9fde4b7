use super::{tiebreak, totals};
use crate::snapshot::{QuizSettings, Round, Score, Team};
use std::cmp::Ordering;

/// One team's derived standing. Recomputed on every query, never
/// persisted or cached across snapshot changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamResult {
    pub team_id: u64,
    pub display_nr: u32,
    pub name: String,
    /// Converted total over all scoring rounds.
    pub total: f64,
    /// Raw score on the tiebreak round, 0.0 without one.
    pub tiebreak_value: f64,
    /// Dense 1-based rank; always a strict order, never shared.
    pub rank: u32,
}

/// Rank the field: filter excluded teams, compute totals and tiebreak
/// values, order by total descending, and assign dense ranks 1..N.
///
/// Ties on total go through the ex aequo comparator; whatever remains
/// tied falls back to `display_nr` ascending, so the output is a total
/// order and two calls on the same snapshot produce identical results.
/// Shared ranks are never assigned. An empty field yields an empty vec.
pub fn rank(
    teams: &[Team],
    rounds: &[Round],
    scores: &[Score],
    settings: &QuizSettings,
) -> Vec<TeamResult> {
    let mut results: Vec<TeamResult> = teams
        .iter()
        .filter(|team| !team.excluded)
        .map(|team| TeamResult {
            team_id: team.id,
            display_nr: team.display_nr,
            name: team.name.clone(),
            total: totals::total_for(team.id, rounds, scores, settings),
            tiebreak_value: totals::tiebreak_value_for(team.id, rounds, scores),
            rank: 0,
        })
        .collect();

    results.sort_by(|a, b| {
        if !tiebreak::totals_tied(a.total, b.total) {
            return b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal);
        }
        tiebreak::compare(a, b, settings).then_with(|| a.display_nr.cmp(&b.display_nr))
    });

    for (index, result) in results.iter_mut().enumerate() {
        result.rank = (index + 1) as u32;
    }

    results
}
