//! # Content Pack I/O
//!
//! Extensions that carry no code of their own describe their contributions in a TOML
//! manifest ("content pack"): an extension identifier, localization entries, substances and
//! reactions. [`manifest::ContentPack`] parses such a file; installing it into an engine is
//! the job of [`crate::engine::context::EngineBuilder::install`].
//!
//! ```ignore
//! use reagentry::core::io::manifest::ContentPack;
//!
//! let pack = ContentPack::load(Path::new("packs/sweat.toml"))?;
//! println!("{} contributes {} substance(s)", pack.extension.id, pack.substances.len());
//! ```

pub mod manifest;
