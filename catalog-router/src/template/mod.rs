//! Route template layer.
//!
//! Maps page types to parameterized path patterns held by the external template
//! store and reverse-formats them into concrete paths.
//!
//! ```
//! use catalog_router::template::{RouteParams, RouteTemplate};
//!
//! let template = RouteTemplate::parse("store.search#category", "/:department/:category").unwrap();
//! let params = RouteParams::from([
//!     ("department".to_string(), "home".to_string()),
//!     ("category".to_string(), "kitchen".to_string()),
//! ]);
//!
//! assert_eq!(template.render(&params).unwrap(), "/home/kitchen");
//! ```

mod route_template;
mod template_resolver;

pub use route_template::{RouteParams, RouteTemplate};
pub use template_resolver::TemplateResolver;
