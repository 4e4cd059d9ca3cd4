use crate::core::models::reaction::ReactionId;

/// Emitted during resolution. A resolver pass reports each firing; the pass boundaries come
/// from [`crate::workflows::simulate`], which numbers the passes it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionEvent {
    PassStart { pass: usize },
    ReactionFired {
        id: ReactionId,
        product: String,
        produced: f64,
    },
    PassFinish { fired: usize },
}

pub type EventCallback<'a> = Box<dyn Fn(ResolutionEvent) + Send + Sync + 'a>;

#[derive(Default)]
pub struct EventReporter<'a> {
    callback: Option<EventCallback<'a>>,
}

impl<'a> EventReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: EventCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: ResolutionEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
