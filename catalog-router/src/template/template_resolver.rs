//! Page-type template lookup over the external template store.

use crate::collaborators::TemplateStore;
use crate::error::{RouteError, UpstreamErrorKind};
use crate::observability::events;
use crate::records::PageType;
use crate::template::RouteTemplate;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "template_resolver";

/// Resolves page types into parsed [`RouteTemplate`]s.
///
/// Every call goes to the store; caching belongs to the store implementation.
#[derive(Clone)]
pub struct TemplateResolver {
    store: Arc<dyn TemplateStore>,
}

impl TemplateResolver {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Returns the canonical-path template registered for `page_type`.
    pub async fn resolve(&self, page_type: PageType) -> Result<RouteTemplate, RouteError> {
        let definition = match self.store.route_definition(page_type.as_str()).await {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                return Err(RouteError::TemplateNotFound {
                    page_type: page_type.to_string(),
                })
            }
            Err(err) if err.kind == UpstreamErrorKind::NotFound => {
                return Err(RouteError::TemplateNotFound {
                    page_type: page_type.to_string(),
                })
            }
            Err(err) => {
                warn!(
                    event = events::TEMPLATE_LOOKUP_FAILED,
                    component = COMPONENT,
                    page_type = page_type.as_str(),
                    err = %err,
                    "template store lookup failed"
                );
                return Err(RouteError::lookup("template", page_type.as_str(), err));
            }
        };

        let template = RouteTemplate::parse(page_type.as_str(), &definition.canonical)?;
        debug!(
            event = events::TEMPLATE_RESOLVED,
            component = COMPONENT,
            page_type = page_type.as_str(),
            pattern = template.pattern(),
            "template resolved"
        );
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateResolver;
    use crate::collaborators::{RouteDefinition, TemplateStore};
    use crate::error::{RouteError, UpstreamError};
    use crate::records::PageType;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct MapStore(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl TemplateStore for MapStore {
        async fn route_definition(
            &self,
            page_type: &str,
        ) -> Result<Option<RouteDefinition>, UpstreamError> {
            if page_type == PageType::Brand.as_str() {
                return Err(UpstreamError::transient("store unavailable"));
            }
            Ok(self.0.get(page_type).map(|canonical| RouteDefinition {
                canonical: canonical.to_string(),
                internal: None,
            }))
        }
    }

    fn resolver() -> TemplateResolver {
        TemplateResolver::new(Arc::new(MapStore(HashMap::from([
            ("store.product", "/:slug/p"),
            ("store.search#department", "/:department/d"),
            ("store.search#category", "/:department/:category("),
        ]))))
    }

    #[tokio::test]
    async fn resolves_registered_page_type() {
        let template = resolver().resolve(PageType::Product).await.unwrap();

        assert_eq!(template.page_type(), "store.product");
        assert_eq!(template.parameters(), vec!["slug"]);
    }

    #[tokio::test]
    async fn unknown_page_type_is_template_not_found() {
        let err = resolver().resolve(PageType::Subcategory).await.unwrap_err();

        assert_eq!(
            err,
            RouteError::TemplateNotFound {
                page_type: "store.search#subcategory".to_string()
            }
        );
    }

    #[tokio::test]
    async fn store_failure_and_malformed_pattern_are_reported() {
        let resolver = resolver();

        assert_eq!(
            resolver.resolve(PageType::Brand).await.unwrap_err().reason(),
            "upstream_lookup_failed"
        );
        assert_eq!(
            resolver.resolve(PageType::Category).await.unwrap_err().reason(),
            "template_invalid"
        );
    }
}
