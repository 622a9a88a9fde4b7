use crate::snapshot::{QuizSettings, Round};

/// Map a raw point value for one round onto the quiz's standard scale.
///
/// Returns the points unchanged when conversion does not apply: scaling
/// disabled, round excluded from scale, tiebreak round (always raw),
/// no usable standard scale, or a zero max score (which would otherwise
/// divide to NaN). Otherwise `(points / max_score) * standard_scale`.
///
/// Points outside [0, max_score] are clamped rather than rejected;
/// range enforcement belongs to snapshot validation, not here.
pub fn convert(points: f64, round: &Round, settings: &QuizSettings) -> f64 {
    if !conversion_applies(round, settings) {
        return points;
    }
    let scale = settings.standard_scale.unwrap_or_default();

    let points = points.clamp(0.0, round.max_score);
    (points / round.max_score) * scale
}

/// Whether conversion actually rescales this round under the given
/// settings. Views use this to decide between raw and two-decimal
/// formatting, mirroring the convert() guards exactly.
pub fn conversion_applies(round: &Round, settings: &QuizSettings) -> bool {
    settings.scale_conversion_enabled
        && !round.exclude_from_scale
        && !round.is_tiebreak
        && settings.standard_scale.filter(|s| *s > 0.0).is_some()
        && round.max_score > 0.0
}

/// The maximum achievable score of a round on the display scale:
/// `standard_scale` when conversion applies to it, the raw `max_score`
/// otherwise.
pub fn converted_max_score(round: &Round, settings: &QuizSettings) -> f64 {
    if conversion_applies(round, settings) {
        settings.standard_scale.unwrap_or(round.max_score)
    } else {
        round.max_score
    }
}

/// The theoretical maximum total over all scoring rounds. Used as the
/// reference line in the chart view. Tiebreak rounds contribute
/// nothing, matching how totals are computed.
pub fn field_max_total(rounds: &[Round], settings: &QuizSettings) -> f64 {
    rounds
        .iter()
        .filter(|r| !r.is_tiebreak)
        .map(|r| converted_max_score(r, settings))
        .sum()
}
