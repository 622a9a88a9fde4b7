pub mod convert;
pub mod engine;
pub mod tiebreak;
pub mod totals;
pub mod validation;

pub use convert::{convert, conversion_applies, converted_max_score, field_max_total};
pub use engine::{rank, TeamResult};
pub use totals::{field_size, raw_points, tiebreak_value_for, total_for};
pub use validation::validate_quiz;
