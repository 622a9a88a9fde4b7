use super::engine::TeamResult;
use crate::snapshot::QuizSettings;
use std::cmp::Ordering;

/// Totals within this distance compare as tied. Conversion runs on
/// f64, so exact equality is too strict after a handful of divisions.
pub const TOTAL_EPSILON: f64 = 1e-9;

/// Whether two totals count as equal for ranking purposes.
pub fn totals_tied(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOTAL_EPSILON
}

/// Order two teams whose totals are tied.
///
/// `Ordering::Less` means `a` ranks ahead of `b`. With ex aequo
/// disabled or no target configured the teams stay tied (`Equal`);
/// the caller falls back to `display_nr` ascending, which keeps the
/// ordering stable and deterministic. With ex aequo on, the team whose
/// tiebreak-round score lies closer to the target ranks higher. Equal
/// distances are again `Equal` for the same fallback.
///
/// Note the rule is closest-to-target, not highest-wins: the tiebreak
/// round asks teams to estimate a value, and the best estimate wins.
pub fn compare(a: &TeamResult, b: &TeamResult, settings: &QuizSettings) -> Ordering {
    debug_assert!(totals_tied(a.total, b.total));

    if !settings.ex_aequo_enabled {
        return Ordering::Equal;
    }
    let Some(target) = settings.ex_aequo_target else {
        return Ordering::Equal;
    };

    let a_distance = (a.tiebreak_value - target).abs();
    let b_distance = (b.tiebreak_value - target).abs();
    a_distance.partial_cmp(&b_distance).unwrap_or(Ordering::Equal)
}
