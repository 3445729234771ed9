//! Route record layer.
//!
//! Records are the unit registered with the routing service. Their identity is
//! `(binding, entity id, page type)`, so registering the same key twice
//! overwrites instead of duplicating.

mod internal_route;
mod page_type;
mod record_builder;

pub use internal_route::{InternalRouteRecord, QueryEncoding, RouteKey};
pub use page_type::PageType;
pub use record_builder::InternalRecordBuilder;
