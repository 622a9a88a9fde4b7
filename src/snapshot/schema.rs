use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full quiz snapshot: settings, rounds, teams, and scores.
///
/// This is the one input document the engine operates on. Views never
/// mutate it; rankings are recomputed wholesale from it on every query.
///
/// Example YAML:
/// ```yaml
/// name: "Pub Quiz Finals"
/// settings:
///   scale_conversion_enabled: true
///   standard_scale: 10
///   gradient_enabled: true
/// rounds:
///   - { id: 1, title: "General Knowledge", sequence_nr: 1, max_score: 20 }
///   - { id: 2, title: "Music", sequence_nr: 2, max_score: 10, exclude_from_scale: true }
/// teams:
///   - { id: 1, display_nr: 1, name: "The Quizzards" }
/// scores:
///   - { round_id: 1, team_id: 1, points: 10 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Quiz {
    pub name: String,

    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub settings: QuizSettings,

    #[serde(default)]
    pub rounds: Vec<Round>,

    #[serde(default)]
    pub teams: Vec<Team>,

    #[serde(default)]
    pub scores: Vec<Score>,
}

impl Quiz {
    /// The designated tiebreak round, if the quiz has one.
    ///
    /// Validation guarantees at most one; this returns the first match.
    pub fn tiebreak_round(&self) -> Option<&Round> {
        self.rounds.iter().find(|r| r.is_tiebreak)
    }

    pub fn round(&self, round_id: u64) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == round_id)
    }

    pub fn team(&self, team_id: u64) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}

/// Quiz-level scoring and presentation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizSettings {
    /// Rescale every included round onto `standard_scale` before summing.
    #[serde(default)]
    pub scale_conversion_enabled: bool,

    /// Common scale that each included round's max score maps onto.
    #[serde(default)]
    pub standard_scale: Option<f64>,

    /// Color ranks along the green-to-red gradient.
    #[serde(default = "default_gradient_enabled")]
    pub gradient_enabled: bool,

    /// Break equal totals using the tiebreak round.
    #[serde(default)]
    pub ex_aequo_enabled: bool,

    /// Target value for the tiebreak round; closest raw score wins.
    #[serde(default)]
    pub ex_aequo_target: Option<f64>,
}

fn default_gradient_enabled() -> bool {
    true
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            scale_conversion_enabled: false,
            standard_scale: None,
            gradient_enabled: true,
            ex_aequo_enabled: false,
            ex_aequo_target: None,
        }
    }
}

/// One scored segment of the quiz.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Round {
    pub id: u64,

    pub title: String,

    /// 1-based position in the running order.
    pub sequence_nr: u32,

    pub max_score: f64,

    /// Keep this round on its raw scale even when conversion is enabled.
    #[serde(default)]
    pub exclude_from_scale: bool,

    /// Tiebreak ("ex aequo") round: raw comparison value only, never
    /// part of the total and never rescaled.
    #[serde(default)]
    pub is_tiebreak: bool,
}

/// A team participating in the quiz.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub id: u64,

    /// Table number shown to the audience; also the stable tie fallback.
    pub display_nr: u32,

    pub name: String,

    /// Excluded teams are removed from ranking and reveal entirely.
    #[serde(default)]
    pub excluded: bool,
}

/// Points one team earned in one round. Unique per (round, team);
/// a missing record counts as 0 points.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Score {
    pub round_id: u64,
    pub team_id: u64,
    pub points: f64,
}
