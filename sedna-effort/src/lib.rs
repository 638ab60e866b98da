//! Fishing-effort aggregation for the sEaDNA dashboards.
//!
//! Every operation here is a pure function over an already-resident
//! record slice: the caller picks a dataset from the catalog, narrows it
//! with the month/vessel filters, and re-derives cards, locations and
//! markers from scratch on each selection change. At a few hundred
//! records per dataset that re-derivation is cheap; there is
//! deliberately no caching layer in front of it.

pub mod filter;
pub mod models;
pub mod query;
