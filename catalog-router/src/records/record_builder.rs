//! Pure assembly of route records from resolved paths.

use crate::hierarchy::HierarchyLevel;
use crate::records::{InternalRouteRecord, PageType, QueryEncoding};

/// Query encoding brand routes resolve with.
const BRAND_TOKEN: &str = "b";

/// Stamps records with the engine's declarer and origin.
#[derive(Clone, Debug)]
pub struct InternalRecordBuilder {
    declarer: String,
    origin: String,
}

impl InternalRecordBuilder {
    pub fn new(declarer: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            declarer: declarer.into(),
            origin: origin.into(),
        }
    }

    /// Record for one binding of a category.
    ///
    /// Active categories resolve as their level's search page with the level's
    /// encoding; inactive ones resolve as a search not-found page with no query.
    pub fn category(
        &self,
        leaf: &HierarchyLevel,
        is_active: bool,
        binding_path: String,
        tenant_path: &str,
        binding_id: &str,
    ) -> InternalRouteRecord {
        let (page_type, query) = if is_active {
            (
                leaf.kind.page_type(),
                Some(QueryEncoding::new(leaf.encoding.as_str())),
            )
        } else {
            (PageType::SearchNotFound, None)
        };

        InternalRouteRecord {
            canonical_target: Some(tenant_path.to_string()),
            binding_id: Some(binding_id.to_string()),
            ..self.record(&leaf.id, page_type, binding_path, query)
        }
    }

    pub fn product(&self, entity_id: &str, is_active: bool, path: String) -> InternalRouteRecord {
        let page_type = if is_active {
            PageType::Product
        } else {
            PageType::ProductNotFound
        };
        self.record(entity_id, page_type, path, None)
    }

    pub fn brand(&self, entity_id: &str, is_active: bool, path: String) -> InternalRouteRecord {
        if is_active {
            self.record(
                entity_id,
                PageType::Brand,
                path,
                Some(QueryEncoding::new(BRAND_TOKEN)),
            )
        } else {
            self.record(entity_id, PageType::SearchNotFound, path, None)
        }
    }

    fn record(
        &self,
        entity_id: &str,
        page_type: PageType,
        path: String,
        query: Option<QueryEncoding>,
    ) -> InternalRouteRecord {
        InternalRouteRecord {
            declarer: self.declarer.clone(),
            origin: self.origin.clone(),
            entity_id: entity_id.to_string(),
            page_type,
            path,
            query,
            canonical_target: None,
            binding_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InternalRecordBuilder;
    use crate::hierarchy::{CategoryNode, HierarchyLevel};
    use crate::records::{PageType, QueryEncoding};

    fn builder() -> InternalRecordBuilder {
        InternalRecordBuilder::new("catalog-router", "catalog-indexer")
    }

    fn kitchen_level() -> HierarchyLevel {
        HierarchyLevel::root(&CategoryNode::new("1", "Home", None))
            .child(&CategoryNode::new("2", "Kitchen", Some("1")))
    }

    #[test]
    fn active_category_carries_level_type_and_encoding() {
        let leaf = kitchen_level();

        let record = builder().category(
            &leaf,
            true,
            "/casa/cocina".to_string(),
            "/home/kitchen",
            "b-es",
        );

        assert_eq!(record.page_type, PageType::Category);
        assert_eq!(record.query, Some(QueryEncoding::new("c,c")));
        assert_eq!(record.path, "/casa/cocina");
        assert_eq!(record.canonical_target.as_deref(), Some("/home/kitchen"));
        assert_eq!(record.binding_id.as_deref(), Some("b-es"));
        assert_eq!(record.origin, "catalog-indexer");
    }

    #[test]
    fn inactive_category_is_search_not_found_without_query() {
        let leaf = kitchen_level();

        let record = builder().category(
            &leaf,
            false,
            "/home/kitchen".to_string(),
            "/home/kitchen",
            "b-en",
        );

        assert_eq!(record.page_type, PageType::SearchNotFound);
        assert_eq!(record.query, None);
        assert_eq!(record.entity_id, "2");
    }

    #[test]
    fn product_records_never_carry_query_or_binding() {
        let active = builder().product("7", true, "/pan/p".to_string());
        let inactive = builder().product("7", false, "/pan/p".to_string());

        assert_eq!(active.page_type, PageType::Product);
        assert_eq!(inactive.page_type, PageType::ProductNotFound);
        for record in [active, inactive] {
            assert_eq!(record.query, None);
            assert_eq!(record.binding_id, None);
            assert_eq!(record.entity_id, "7");
        }
    }

    #[test]
    fn brand_records_use_brand_token_only_when_active() {
        let active = builder().brand("3", true, "/acme/b".to_string());
        let inactive = builder().brand("3", false, "/acme/b".to_string());

        assert_eq!(active.page_type, PageType::Brand);
        assert_eq!(active.query, Some(QueryEncoding::new("b")));
        assert_eq!(inactive.page_type, PageType::SearchNotFound);
        assert_eq!(inactive.query, None);
    }
}
