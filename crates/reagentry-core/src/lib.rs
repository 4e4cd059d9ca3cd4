//! # Reagentry Core Library
//!
//! A registry and resolver for reagents and reactions contributed by independently loaded
//! extensions, plus the compatibility fingerprint that lets separate processes agree on
//! whether their installed content is identical before they share a session.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Substance`, `Reaction`,
//!   `Localization`), the two registries with their validation rules, content-pack I/O and
//!   the pure fingerprint functions.
//!
//! - **[`engine`]: The Logic Core.** The registration context (`EngineBuilder`) that
//!   extensions write into during start-up, the frozen read-only `ReagentEngine` it produces,
//!   and the single-pass `ReactionResolver` that runs on the simulation cadence.
//!
//! - **[`workflows`]: The Public API.** Entry points that tie the layers together: bootstrap an
//!   engine from a list of content packs, or run a bounded series of resolution passes.

pub mod core;
pub mod engine;
pub mod workflows;
