//! Score, rank, and reveal team-based quiz competitions.
//!
//! The heart of the crate is a pure scoring engine: raw (team, round,
//! points) records plus quiz settings go in, normalized totals, dense
//! ranks, and deterministic colors come out. The board, chart, top and
//! reveal views are thin consumers of that one engine.

pub mod gradient;
pub mod output;
pub mod reveal;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod tui;
