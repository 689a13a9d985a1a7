//! Business logic services.

pub mod api_key;
pub mod scoring;

pub use api_key::generate_api_key;
pub use scoring::{RandomScores, ScoreSource, SequenceScores};
