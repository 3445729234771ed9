//! Event layer.
//!
//! Owns the per-event pipelines: category events fan out across store bindings,
//! product and brand events render one flat route, search URL batches are
//! canonicalized in place. Each event is independent and is recomputed from
//! scratch.

mod binding_fanout;
mod catalog_event;
mod outcome;
mod route_engine;

pub use catalog_event::{BrandEvent, CategoryEvent, ProductEvent};
pub use outcome::EventOutcome;
pub use route_engine::{EngineCollaborators, RouteEngine};
