//! Search URL canonicalization.
//!
//! Faceted search URLs pair every path segment with one token of their `map`
//! query. Specification-filter tokens are resolved to their field names so the
//! canonical path reads `/color_red` instead of an opaque `/red`.
//!
//! ```
//! use catalog_router::canonical::{CanonicalSearchUrl, MapToken};
//!
//! let url = CanonicalSearchUrl::parse("/eletronicos/roxo?map=specificationFilter_55,c");
//!
//! assert_eq!(url.segments(), vec!["eletronicos", "roxo"]);
//! assert_eq!(
//!     url.tokens(),
//!     vec![MapToken::SpecificationFilter(55), MapToken::Category]
//! );
//! ```

mod enrichment_decoder;
mod map_token;
mod search_url;

pub use enrichment_decoder::CanonicalEnrichmentDecoder;
pub use map_token::MapToken;
pub use search_url::CanonicalSearchUrl;
