//! # Core Module
//!
//! The stateless foundation of Reagentry: what a substance and a reaction are, where they are
//! stored, how their registration input is validated, how extensions describe their content on
//! disk, and how an installation's content set is condensed into a comparable fingerprint.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Substances, reactions, localization tables and consumption behavior
//! - **Registries** ([`registry`]) - Upsert-by-name substance registry and ordered reaction registry
//! - **Validation** ([`validation`]) - The `ValidationError` taxonomy shared by every registration path
//! - **Content Packs** ([`io`]) - TOML manifests describing one extension's contributions
//! - **Fingerprinting** ([`fingerprint`]) - Order-independent compatibility strings and content digests
//!
//! Nothing in this layer holds process-wide state. Registries are plain values owned by
//! whoever builds them, normally the [`crate::engine::context::EngineBuilder`].

pub mod fingerprint;
pub mod io;
pub mod models;
pub mod registry;
pub mod validation;
