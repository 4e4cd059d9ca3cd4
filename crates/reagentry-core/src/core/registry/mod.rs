//! # Registry Module
//!
//! The two registries extensions write into during start-up.
//!
//! - [`substances`] - Upsert-by-name map of substance definitions (last writer wins)
//! - [`reactions`] - Append-only, ordered list of reactions validated against the substances
//!
//! Registration order is meaningful in both: it decides which definition survives a name
//! collision, and which reaction wins when several compete for the same reactant.
//! Deterministic load order is the caller's responsibility.

pub mod reactions;
pub mod substances;
