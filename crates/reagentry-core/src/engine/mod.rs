//! # Engine Module
//!
//! The stateful layer of Reagentry: the registration context extensions write into during
//! start-up, the frozen engine it produces, and the resolver that runs reactions on the
//! simulation cadence.
//!
//! ## Lifecycle
//!
//! 1. **Registration.** The host creates an [`context::EngineBuilder`] and hands it (or a
//!    [`shared::SharedBuilder`] if extensions load concurrently) to every extension in turn.
//!    Extensions register substances, reactions, localization entries, consumption handlers
//!    and their contributor identifier. Invalid registrations are reported and dropped.
//! 2. **Freeze.** [`context::EngineBuilder::build`] turns the builder into an immutable,
//!    cheaply clonable [`context::ReagentEngine`] and computes the compatibility fingerprint
//!    exactly once.
//! 3. **Simulation.** The engine is read-only. [`resolver::ReactionResolver`] performs one
//!    non-blocking resolution pass per call over a caller-owned [`pool::ReagentPool`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Base version, resolver tolerance, digest folding
//! - **Registration & Freeze** ([`context`]) - `EngineBuilder` and `ReagentEngine`
//! - **Concurrent Registration** ([`shared`]) - Mutex-guarded builder handle
//! - **Quantities** ([`pool`]) - Substance name to quantity map
//! - **Resolution** ([`resolver`]) - Registration-ordered, commit-as-you-go single pass
//! - **Event Reporting** ([`events`]) - Caller-owned hooks for fired reactions
//! - **Error Handling** ([`error`]) - Engine-level error type

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod pool;
pub mod resolver;
pub mod shared;
