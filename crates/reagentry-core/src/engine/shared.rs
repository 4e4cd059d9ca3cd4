use super::config::EngineConfig;
use super::context::{EngineBuilder, ReagentEngine};
use super::error::EngineError;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, mutex-guarded handle to an [`EngineBuilder`] for hosts that load extensions on
/// several threads.
///
/// Every registration takes the lock for its duration, so concurrent extensions can never
/// interleave inside a single upsert or append. Building requires that every other handle has
/// been dropped.
#[derive(Debug, Clone, Default)]
pub struct SharedBuilder {
    inner: Arc<Mutex<EngineBuilder>>,
}

impl SharedBuilder {
    pub fn new(builder: EngineBuilder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, EngineBuilder> {
        self.inner.lock()
    }

    /// Runs `f` with exclusive access to the builder.
    pub fn with<R>(&self, f: impl FnOnce(&mut EngineBuilder) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_builder(self) -> Result<EngineBuilder, EngineError> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|shared| {
                EngineError::Initialization(format!(
                    "{} registration handle(s) still alive at freeze time",
                    Arc::strong_count(&shared) - 1
                ))
            })
    }

    pub fn build(self, config: &EngineConfig) -> Result<ReagentEngine, EngineError> {
        self.into_builder()?.build(config)
    }
}
