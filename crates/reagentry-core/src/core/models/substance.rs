use super::consumption::ConsumptionBehavior;
use super::localization::{Localization, LocalizationKey};
use crate::core::validation::{ValidationError, validate_name};
use serde::Deserialize;

pub const DEFAULT_HALF_LIFE_SECONDS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f32>")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn components(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<Vec<f32>> for Color {
    type Error = String;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
            other => Err(format!(
                "expected 3 (RGB) or 4 (RGBA) color components, found {}",
                other.len()
            )),
        }
    }
}

/// Opaque reference to a visual asset owned by the host's display service.
///
/// The engine never loads or inspects the asset; it only carries the handle so that hosts can
/// look it up when rendering a substance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayHandle(Option<String>);

impl DisplayHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(Some(handle.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// A named simulated material (reagent).
///
/// The name is fixed at construction and is the registry key; every other attribute is public
/// and may be tuned before registration. Registering a second `Substance` with the same name
/// replaces this one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Substance {
    name: String,
    /// Key into the localization table for the human-readable name.
    pub display_name: LocalizationKey,
    /// Fluid color (RGBA).
    pub color: Color,
    /// Emission/glow color (RGBA).
    pub emission: Color,
    /// Economic value per unit when sold.
    pub value: f64,
    /// Metabolization half-life in seconds. Lower is faster.
    pub half_life: f64,
    /// Cleaning agents wash away decals instead of leaving them when spilled.
    pub cleaning_agent: bool,
    pub display: DisplayHandle,
    pub consumption: ConsumptionBehavior,
}

impl Substance {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: LocalizationKey::new(name.clone()),
            name,
            color: Color::WHITE,
            emission: Color::WHITE,
            value: 0.0,
            half_life: DEFAULT_HALF_LIFE_SECONDS,
            cleaning_agent: false,
            display: DisplayHandle::none(),
            consumption: ConsumptionBehavior::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_display_name(mut self, key: impl Into<LocalizationKey>) -> Self {
        self.display_name = key.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_half_life(mut self, half_life: f64) -> Self {
        self.half_life = half_life;
        self
    }

    pub fn with_cleaning_agent(mut self, cleaning_agent: bool) -> Self {
        self.cleaning_agent = cleaning_agent;
        self
    }

    pub fn with_display(mut self, display: DisplayHandle) -> Self {
        self.display = display;
        self
    }

    pub fn with_consumption(mut self, consumption: ConsumptionBehavior) -> Self {
        self.consumption = consumption;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if !self.value.is_finite() {
            return Err(ValidationError::InvalidValue {
                substance: self.name.clone(),
                value: self.value,
            });
        }
        if !self.half_life.is_finite() || self.half_life <= 0.0 {
            return Err(ValidationError::InvalidHalfLife {
                substance: self.name.clone(),
                value: self.half_life,
            });
        }
        Ok(())
    }

    /// Worth of `amount` units of this substance.
    pub fn worth(&self, amount: f64) -> f64 {
        amount * self.value
    }

    /// Amount left un-metabolized after `dt` seconds of exponential decay.
    pub fn remaining_after(&self, amount: f64, dt: f64) -> f64 {
        if dt <= 0.0 {
            return amount;
        }
        amount * 0.5_f64.powf(dt / self.half_life)
    }

    /// Display text for `language_tag`, falling back to the substance name when the
    /// localization table has no entry for this substance's key.
    pub fn display_text<'a>(&'a self, localization: &'a Localization, language_tag: &str) -> &'a str {
        localization
            .lookup(&self.display_name, language_tag)
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_substance_uses_name_as_display_key_and_defaults() {
        let s = Substance::new("Sweat");
        assert_eq!(s.name(), "Sweat");
        assert_eq!(s.display_name.as_str(), "Sweat");
        assert_eq!(s.color, Color::WHITE);
        assert_eq!(s.half_life, DEFAULT_HALF_LIFE_SECONDS);
        assert!(!s.cleaning_agent);
        assert_eq!(s.display.as_str(), None);
        assert!(matches!(s.consumption, ConsumptionBehavior::DefaultEnergyFill));
    }

    #[test]
    fn validate_rejects_empty_name() {
        assert_eq!(Substance::new("").validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn validate_rejects_non_positive_half_life() {
        let s = Substance::new("Water").with_half_life(0.0);
        assert!(matches!(
            s.validate(),
            Err(ValidationError::InvalidHalfLife { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_value() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let s = Substance::new("Sweat").with_value(value);
            assert!(matches!(
                s.validate(),
                Err(ValidationError::InvalidValue { .. })
            ));
        }
        assert!(Substance::new("Sweat").with_value(-0.5).validate().is_ok());
    }

    #[test]
    fn remaining_after_one_half_life_is_half() {
        let s = Substance::new("Sweat").with_half_life(60.0);
        assert!((s.remaining_after(2.0, 60.0) - 1.0).abs() < 1e-12);
        assert_eq!(s.remaining_after(2.0, 0.0), 2.0);
    }

    #[test]
    fn worth_scales_with_amount() {
        let s = Substance::new("Sweat").with_value(0.25);
        assert!((s.worth(100.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn color_converts_from_three_or_four_components() {
        assert_eq!(
            Color::try_from(vec![1.0, 0.5, 0.0]).unwrap(),
            Color::rgba(1.0, 0.5, 0.0, 1.0)
        );
        assert_eq!(
            Color::try_from(vec![1.0, 1.0, 1.0, 0.2]).unwrap(),
            Color::rgba(1.0, 1.0, 1.0, 0.2)
        );
        assert!(Color::try_from(vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn display_text_falls_back_to_name_without_entry() {
        let localization = Localization::new();
        let s = Substance::new("Sweat").with_display_name("REAGENT_SWEAT");
        assert_eq!(s.display_text(&localization, "de"), "Sweat");
    }

    #[test]
    fn display_text_uses_translation_when_present() {
        let mut localization = Localization::new();
        let key = localization.add_key_entry("REAGENT_SWEAT", "Sweat");
        localization.add_translation(&key, "de", "Schweiß").unwrap();
        let s = Substance::new("Sweat").with_display_name(key);
        assert_eq!(s.display_text(&localization, "de"), "Schweiß");
        assert_eq!(s.display_text(&localization, "ja"), "Sweat");
    }
}
