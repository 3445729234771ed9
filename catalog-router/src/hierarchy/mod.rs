//! Category hierarchy layer.
//!
//! Turns a changed category into its typed ancestor chain. Each level carries the
//! slugged label, the route parameters accumulated from the root and the positional
//! encoding string the search layer uses to decode category paths.

mod hierarchy_level;
mod hierarchy_resolver;

pub use hierarchy_level::{
    CategoryNode, HierarchyKind, HierarchyLevel, HierarchyParams, CATEGORY_TOKEN,
};
pub use hierarchy_resolver::HierarchyResolver;

pub(crate) use hierarchy_level::blank_as_none;
