//! Multi-locale label translation.
//!
//! Category labels are translated from the tenant locale into every binding
//! locale before being slugged into binding paths. Calls to the translation
//! service are batched, bounded by one engine-wide permit pool, time-limited and
//! retried on transient failures.

mod segment;
mod translator;

pub use segment::LabeledSegment;
pub use translator::MultiLocaleTranslator;
