use super::substance::Substance;
use std::fmt;
use std::sync::Arc;

/// Energy and fat reserves of a consuming body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetabolicState {
    pub energy: f64,
    pub max_energy: f64,
    pub fat: f64,
}

impl MetabolicState {
    pub fn new(max_energy: f64) -> Self {
        Self {
            energy: 0.0,
            max_energy,
            fat: 0.0,
        }
    }

    /// Fills energy up to capacity; whatever does not fit is stored as fat.
    pub fn fill_energy(&mut self, amount: f64) {
        let room = (self.max_energy - self.energy).max(0.0);
        let into_energy = amount.min(room);
        self.energy += into_energy;
        self.fat += amount - into_energy;
    }
}

/// Extension-supplied behavior run when a substance is metabolized.
pub trait ConsumptionHandler: fmt::Debug + Send + Sync {
    /// Stable name, used by content packs to refer to the handler and by the content digest.
    fn name(&self) -> &str;

    fn consume(&self, substance: &Substance, amount: f64, state: &mut MetabolicState);
}

#[derive(Clone, Default)]
pub enum ConsumptionBehavior {
    /// Fills energy with the consumed amount, overflowing into fat.
    #[default]
    DefaultEnergyFill,
    Custom(Arc<dyn ConsumptionHandler>),
}

impl ConsumptionBehavior {
    pub const DEFAULT_NAME: &'static str = "default-energy-fill";

    pub fn custom(handler: impl ConsumptionHandler + 'static) -> Self {
        Self::Custom(Arc::new(handler))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::DefaultEnergyFill => Self::DEFAULT_NAME,
            Self::Custom(handler) => handler.name(),
        }
    }

    pub fn apply(&self, substance: &Substance, amount: f64, state: &mut MetabolicState) {
        match self {
            Self::DefaultEnergyFill => state.fill_energy(amount),
            Self::Custom(handler) => handler.consume(substance, amount, state),
        }
    }
}

impl fmt::Debug for ConsumptionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultEnergyFill => f.write_str("DefaultEnergyFill"),
            Self::Custom(handler) => f.debug_tuple("Custom").field(&handler.name()).finish(),
        }
    }
}

impl PartialEq for ConsumptionBehavior {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DefaultEnergyFill, Self::DefaultEnergyFill) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b) || a.name() == b.name(),
            _ => false,
        }
    }
}

/// Metabolizes `amount` of `substance` for `dt` seconds.
///
/// The decayed portion is handed to the substance's consumption behavior; the amount still
/// left in the body is returned.
pub fn metabolize(substance: &Substance, amount: f64, dt: f64, state: &mut MetabolicState) -> f64 {
    let remaining = substance.remaining_after(amount, dt);
    let consumed = amount - remaining;
    if consumed > 0.0 {
        substance.consumption.apply(substance, consumed, state);
    }
    remaining
}
