//! # Core Models Module
//!
//! Data structures describing the content extensions contribute: substances (reagents), the
//! reactions that convert them, the localization tables that name them, and the behavior a
//! substance exhibits when a body metabolizes it.
//!
//! ## Key Components
//!
//! - [`substance`] - A named material with display, economic and metabolic attributes
//! - [`reaction`] - Ordered reactant quantities producing one product quantity
//! - [`localization`] - Translation tables keyed by localization key and language tag
//! - [`consumption`] - Default and custom consumption behaviors, plus half-life decay
//!
//! ## Usage
//!
//! ```ignore
//! use reagentry::core::models::{reaction::Reaction, substance::Substance};
//!
//! let sweat = Substance::new("Sweat").with_value(0.25).with_half_life(60.0);
//! let reaction = Reaction::new(vec![("Water", 1.0).into(), ("Love", 0.1).into()], ("Sweat", 1.0).into());
//! ```

pub mod consumption;
pub mod localization;
pub mod reaction;
pub mod substance;
