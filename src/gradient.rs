//! Rank-to-color mapping shared by every view.
//!
//! The board, the chart, and the reveal screen must agree on each
//! team's color, so the mapping lives here and nowhere else. It is a
//! pure function of (rank, field size, gradient flag).

/// An RGB color, channels 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Best end of the gradient.
pub const GREEN: Rgb = Rgb { r: 76, g: 175, b: 80 };
/// Midpoint of the gradient.
pub const YELLOW: Rgb = Rgb { r: 255, g: 235, b: 59 };
/// Worst end of the gradient.
pub const RED: Rgb = Rgb { r: 255, g: 82, b: 82 };
/// Uniform accent when the gradient is disabled or meaningless.
pub const NEUTRAL: Rgb = Rgb { r: 25, g: 118, b: 210 };

const GOLD: Rgb = Rgb { r: 255, g: 215, b: 0 };
const SILVER: Rgb = Rgb { r: 192, g: 192, b: 192 };
const BRONZE: Rgb = Rgb { r: 205, g: 127, b: 50 };

/// Color for a rank within a field of `field_size` teams.
///
/// Rank 1 is pure green, rank N pure red, with a linear walk through
/// yellow in between. Disabled gradients and single-team fields get the
/// neutral accent so every row looks the same. Deterministic: identical
/// inputs always produce identical output.
pub fn color_for(rank: u32, field_size: usize, gradient_enabled: bool) -> Rgb {
    if !gradient_enabled || field_size <= 1 {
        return NEUTRAL;
    }

    // 0.0 = best, 1.0 = worst; ranks outside 1..N clamp to the ends
    let position = (rank.max(1) - 1) as f64 / (field_size - 1) as f64;
    let position = position.clamp(0.0, 1.0);

    if position < 0.5 {
        lerp(GREEN, YELLOW, position * 2.0)
    } else {
        lerp(YELLOW, RED, (position - 0.5) * 2.0)
    }
}

/// Podium accent for the top three ranks (gold, silver, bronze), used
/// by the showcase views. None for everyone else.
pub fn podium_color(rank: u32) -> Option<Rgb> {
    match rank {
        1 => Some(GOLD),
        2 => Some(SILVER),
        3 => Some(BRONZE),
        _ => None,
    }
}

fn lerp(start: Rgb, end: Rgb, t: f64) -> Rgb {
    Rgb {
        r: lerp_channel(start.r, end.r, t),
        g: lerp_channel(start.g, end.g, t),
        b: lerp_channel(start.b, end.b, t),
    }
}

fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let value = start as f64 + (end as f64 - start as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}
