//! Weighted decision-support scoring for choosing between a separate,
//! independently owned instance and integration into a shared enterprise
//! instance.
//!
//! The [`engine::ScoringEngine`] turns five category [`types::scoring::ResponseSet`]s
//! into per-category composites and one banded overall recommendation.
//! Everything else in the crate (configuration, response loading, report
//! rendering) consumes the engine's output.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod responses;
pub mod sample;
pub mod types;
