//! Presentation-facing glue for the sEaDNA site, minus any rendering.
//!
//! This crate provides:
//! - `state`: the UI selection a dashboard is derived from
//! - `dashboard`: one parameterized payload builder for all page variants
//! - `events`: the station-selected channel between map and UI layers
//! - `sources`: the data-sources panel model and its auto-dismiss rule
//! - `content`: static hero/mission copy and per-year target labels

pub mod content;
pub mod dashboard;
pub mod events;
pub mod sources;
pub mod state;
