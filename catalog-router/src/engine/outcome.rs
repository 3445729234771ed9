/// What a top-level handler did with one event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventOutcome {
    /// Records were handed to the routing service.
    Registered { records: usize },
    /// The event produced nothing to register, e.g. a tenant without bindings.
    NothingToRegister,
    /// Search URLs were processed; `failed` ones kept no canonical path.
    Canonicalized { canonicalized: usize, failed: usize },
    /// Processing failed and the rest of the event's work was dropped.
    Dropped { reason: &'static str },
}

impl EventOutcome {
    pub fn is_dropped(&self) -> bool {
        matches!(self, EventOutcome::Dropped { .. })
    }
}
