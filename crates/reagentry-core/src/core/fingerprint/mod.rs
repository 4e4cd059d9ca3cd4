//! # Fingerprint Module
//!
//! Condenses an installation's content set into a token that separate processes can compare
//! before sharing a session, without exchanging the registries themselves.
//!
//! - [`contributors`] - The contributor identifier set and the compatibility string built from it
//! - [`digest`] - A SHA-256 digest over the registered substances and reactions
//!
//! The compatibility string has the form `<base-version>+<id>+<id>...` with identifiers in
//! sorted order, so load order never changes it.

pub mod contributors;
pub mod digest;

pub use contributors::{ContributorSet, Fingerprint, compute_fingerprint};
pub use digest::ContentDigest;
