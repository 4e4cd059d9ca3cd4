use std::collections::BTreeMap;
use std::fmt;

/// Available quantity of each substance, e.g. the contents of one container.
///
/// Iteration is ordered by substance name so that anything derived from a pool is
/// deterministic. Absent substances read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReagentPool {
    quantities: BTreeMap<String, f64>,
}

impl ReagentPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, substance: &str) -> f64 {
        self.quantities.get(substance).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, substance: &str) -> bool {
        self.quantities.contains_key(substance)
    }

    /// Sets the quantity of `substance`; negative or non-finite input is stored as zero.
    pub fn set(&mut self, substance: impl Into<String>, quantity: f64) {
        self.quantities
            .insert(substance.into(), sanitize(quantity));
    }

    pub fn add(&mut self, substance: &str, quantity: f64) {
        let current = self.get(substance);
        self.set(substance.to_string(), current + quantity);
    }

    /// Subtracts `quantity`, snapping the result to zero when it lands within
    /// `quantity * tolerance` of zero.
    pub(crate) fn take(&mut self, substance: &str, quantity: f64, tolerance: f64) {
        let mut remaining = self.get(substance) - quantity;
        if remaining.abs() <= quantity * tolerance {
            remaining = 0.0;
        }
        self.set(substance.to_string(), remaining);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn total_volume(&self) -> f64 {
        self.quantities.values().sum()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

fn sanitize(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ReagentPool {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut pool = Self::new();
        for (substance, quantity) in iter {
            pool.set(substance, quantity);
        }
        pool
    }
}

impl fmt::Display for ReagentPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, qty)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {qty}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_substance_reads_as_zero() {
        let pool = ReagentPool::new();
        assert_eq!(pool.get("Water"), 0.0);
        assert!(!pool.contains("Water"));
    }

    #[test]
    fn set_clamps_invalid_quantities_to_zero() {
        let mut pool = ReagentPool::new();
        pool.set("Water", -2.0);
        pool.set("Love", f64::NAN);
        assert_eq!(pool.get("Water"), 0.0);
        assert_eq!(pool.get("Love"), 0.0);
    }

    #[test]
    fn add_accumulates() {
        let mut pool = ReagentPool::from_iter([("Water", 1.0)]);
        pool.add("Water", 0.5);
        pool.add("Sweat", 1.0);
        assert_eq!(pool.get("Water"), 1.5);
        assert_eq!(pool.get("Sweat"), 1.0);
        assert_eq!(pool.total_volume(), 2.5);
    }

    #[test]
    fn take_snaps_near_zero_results() {
        let mut pool = ReagentPool::from_iter([("Water", 0.3)]);
        pool.take("Water", 0.1 + 0.2, 1e-9);
        assert_eq!(pool.get("Water"), 0.0);
        assert!(pool.contains("Water"));
    }

    #[test]
    fn take_keeps_leftovers_beyond_relative_tolerance() {
        let mut pool = ReagentPool::from_iter([("Love", 1e-6)]);
        pool.take("Love", 1e-7, 1e-6);
        assert!((pool.get("Love") - 9e-7).abs() < 1e-15);
    }

    #[test]
    fn display_lists_substances_in_name_order() {
        let pool = ReagentPool::from_iter([("Water", 1.0), ("Love", 0.1)]);
        assert_eq!(pool.to_string(), "{Love: 0.1, Water: 1}");
    }
}
