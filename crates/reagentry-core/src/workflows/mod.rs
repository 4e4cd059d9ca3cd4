//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] and [`crate::engine`] layers together.
//!
//! - **Bootstrap** ([`bootstrap`]) - Load content packs from disk in a fixed order, install them
//!   into a builder that may already hold code-registered content, and freeze the result.
//! - **Simulate** ([`simulate`]) - Run explicit, bounded resolution passes until the pool
//!   settles, for callers that want reactions to chain.

pub mod bootstrap;
pub mod simulate;
