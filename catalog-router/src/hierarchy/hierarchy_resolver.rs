/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Ancestor ascent for category events.

use crate::collaborators::CategoryLookup;
use crate::error::{RouteError, UpstreamError};
use crate::hierarchy::{CategoryNode, HierarchyLevel};
use crate::observability::{events, fields};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "hierarchy_resolver";

/// Walks a category's ancestors to the root and types every level.
///
/// The ascent is iterative: the chain is collected leaf-first with a visited-id
/// set and a hard ceiling on its length, then folded root-first into
/// [`HierarchyLevel`]s. Ancestor data comes from an external catalog and is not
/// trusted to be acyclic.
#[derive(Clone)]
pub struct HierarchyResolver {
    lookup: Arc<dyn CategoryLookup>,
    max_depth: usize,
}

impl HierarchyResolver {
    /// `max_depth` caps the number of levels, the leaf included. Values below one
    /// are raised to one so departments always resolve.
    pub fn new(lookup: Arc<dyn CategoryLookup>, max_depth: usize) -> Self {
        Self {
            lookup,
            max_depth: max_depth.max(1),
        }
    }

    /// Resolves `leaf` into its levels, root first and leaf last.
    pub async fn resolve(&self, leaf: &CategoryNode) -> Result<Vec<HierarchyLevel>, RouteError> {
        let chain = self.ascend(leaf).await?;

        let mut levels: Vec<HierarchyLevel> = Vec::with_capacity(chain.len());
        for node in chain.iter().rev() {
            let level = match levels.last() {
                Some(parent) => parent.child(node),
                None => HierarchyLevel::root(node),
            };
            levels.push(level);
        }

        if let Some(leaf_level) = levels.last() {
            debug!(
                event = events::HIERARCHY_RESOLVED,
                component = COMPONENT,
                entity_id = leaf.id.as_str(),
                parent_id = fields::or_none(leaf.parent()),
                depth = levels.len(),
                encoding = leaf_level.encoding.as_str(),
                "category hierarchy resolved"
            );
        }
        Ok(levels)
    }

    /// Collects `leaf` and its ancestors, leaf first.
    async fn ascend(&self, leaf: &CategoryNode) -> Result<Vec<CategoryNode>, RouteError> {
        let mut visited: HashSet<String> = HashSet::from([leaf.id.clone()]);
        let mut chain = vec![leaf.clone()];

        loop {
            let Some(parent_id) = chain.last().and_then(|node| node.parent()).map(str::to_string)
            else {
                return Ok(chain);
            };

            if !visited.insert(parent_id.clone()) {
                return Err(self.cycle(leaf, parent_id));
            }
            if chain.len() >= self.max_depth {
                warn!(
                    event = events::HIERARCHY_DEPTH_EXCEEDED,
                    component = COMPONENT,
                    entity_id = leaf.id.as_str(),
                    max_depth = self.max_depth,
                    "category ancestor chain exceeds depth ceiling"
                );
                return Err(RouteError::MaxDepthExceeded {
                    category_id: leaf.id.clone(),
                    max_depth: self.max_depth,
                });
            }

            let parent = self
                .lookup
                .category(&parent_id)
                .await
                .and_then(|found| {
                    found.ok_or_else(|| {
                        UpstreamError::not_found(format!("category '{parent_id}' does not exist"))
                    })
                })
                .map_err(|err| {
                    warn!(
                        event = events::HIERARCHY_ANCESTOR_LOOKUP_FAILED,
                        component = COMPONENT,
                        entity_id = leaf.id.as_str(),
                        parent_id = parent_id.as_str(),
                        err = %err,
                        "ancestor lookup failed"
                    );
                    RouteError::lookup("category", parent_id.as_str(), err)
                })?;

            // A lookup may answer with a node under a different id than requested.
            if parent.id != parent_id && !visited.insert(parent.id.clone()) {
                return Err(self.cycle(leaf, parent.id));
            }
            chain.push(parent);
        }
    }

    fn cycle(&self, leaf: &CategoryNode, repeated_id: String) -> RouteError {
        warn!(
            event = events::HIERARCHY_CYCLE_DETECTED,
            component = COMPONENT,
            entity_id = leaf.id.as_str(),
            repeated_id = repeated_id.as_str(),
            "category ancestor chain is cyclic"
        );
        RouteError::CyclicHierarchy {
            category_id: repeated_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HierarchyResolver;
    use crate::collaborators::CategoryLookup;
    use crate::error::{RouteError, UpstreamError};
    use crate::hierarchy::{CategoryNode, HierarchyKind};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct MapLookup {
        nodes: HashMap<String, CategoryNode>,
        calls: AtomicUsize,
    }

    impl MapLookup {
        fn with(nodes: &[CategoryNode]) -> Arc<Self> {
            Arc::new(Self {
                nodes: nodes
                    .iter()
                    .map(|node| (node.id.clone(), node.clone()))
                    .collect(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CategoryLookup for MapLookup {
        async fn category(&self, category_id: &str) -> Result<Option<CategoryNode>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if category_id == "unreachable" {
                return Err(UpstreamError::transient("catalog timeout"));
            }
            Ok(self.nodes.get(category_id).cloned())
        }
    }

    /// Builds a linear chain `n0 <- n1 <- ... <- n{depth}` and returns the leaf.
    fn linear_chain(depth: usize) -> (Vec<CategoryNode>, CategoryNode) {
        let nodes: Vec<CategoryNode> = (0..=depth)
            .map(|i| {
                let parent = i.checked_sub(1).map(|p| format!("n{p}"));
                CategoryNode::new(&format!("n{i}"), &format!("Level {i}"), parent.as_deref())
            })
            .collect();
        let leaf = nodes[depth].clone();
        (nodes, leaf)
    }

    #[tokio::test]
    async fn root_category_resolves_to_single_department() {
        let lookup = MapLookup::with(&[]);
        let resolver = HierarchyResolver::new(lookup.clone(), 8);

        let levels = resolver
            .resolve(&CategoryNode::new("1", "Eletrônicos", None))
            .await
            .unwrap();

        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].kind, HierarchyKind::Department);
        assert_eq!(levels[0].params.department(), Some("eletronicos"));
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn chain_of_depth_d_yields_d_plus_one_levels() {
        for depth in 0..6 {
            let (nodes, leaf) = linear_chain(depth);
            let resolver = HierarchyResolver::new(MapLookup::with(&nodes), 32);

            let levels = resolver.resolve(&leaf).await.unwrap();

            assert_eq!(levels.len(), depth + 1);
            assert_eq!(levels[0].kind, HierarchyKind::Department);
            assert_eq!(levels[0].id, "n0");

            let leaf_level = levels.last().unwrap();
            assert_eq!(leaf_level.id, leaf.id);
            assert_eq!(leaf_level.encoding_tokens(), depth + 1);
            assert!(leaf_level.encoding.split(',').all(|token| token == "c"));

            let expected_terms: String = (3..=depth).map(|i| format!("level-{i}")).collect();
            assert_eq!(
                leaf_level.params.terms().unwrap_or_default(),
                expected_terms
            );
        }
    }

    #[tokio::test]
    async fn repeated_ancestor_fails_as_cycle() {
        let nodes = [
            CategoryNode::new("a", "A", Some("b")),
            CategoryNode::new("b", "B", Some("c")),
            CategoryNode::new("c", "C", Some("a")),
        ];
        let lookup = MapLookup::with(&nodes);
        let resolver = HierarchyResolver::new(lookup.clone(), 1000);

        let err = resolver.resolve(&nodes[0]).await.unwrap_err();

        assert_eq!(
            err,
            RouteError::CyclicHierarchy {
                category_id: "a".to_string()
            }
        );
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn self_parent_is_a_cycle_without_lookup() {
        let lookup = MapLookup::with(&[]);
        let resolver = HierarchyResolver::new(lookup.clone(), 8);

        let err = resolver
            .resolve(&CategoryNode::new("x", "X", Some("x")))
            .await
            .unwrap_err();

        assert_eq!(err.reason(), "cyclic_hierarchy");
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn depth_ceiling_stops_the_ascent() {
        let (nodes, leaf) = linear_chain(10);
        let lookup = MapLookup::with(&nodes);
        let resolver = HierarchyResolver::new(lookup.clone(), 4);

        let err = resolver.resolve(&leaf).await.unwrap_err();

        assert_eq!(
            err,
            RouteError::MaxDepthExceeded {
                category_id: "n10".to_string(),
                max_depth: 4
            }
        );
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 3);
    }

    #[tokio::test]
    async fn blank_parent_ids_end_the_ascent() {
        let lookup = MapLookup::with(&[CategoryNode::new("2", "Celulares", Some(""))]);
        let resolver = HierarchyResolver::new(lookup.clone(), 8);

        let root = resolver
            .resolve(&CategoryNode::new("1", "Eletrônicos", Some("  ")))
            .await
            .unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].kind, HierarchyKind::Department);
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 0);

        let child = resolver
            .resolve(&CategoryNode::new("3", "Smartphones", Some("2")))
            .await
            .unwrap();
        assert_eq!(child.len(), 2);
        assert_eq!(child[0].id, "2");
        assert_eq!(child[1].kind, HierarchyKind::Category);
        assert_eq!(lookup.calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn missing_or_failing_ancestor_aborts_resolution() {
        let resolver = HierarchyResolver::new(MapLookup::with(&[]), 8);

        let missing = resolver
            .resolve(&CategoryNode::new("2", "Shoes", Some("404")))
            .await
            .unwrap_err();
        let failing = resolver
            .resolve(&CategoryNode::new("2", "Shoes", Some("unreachable")))
            .await
            .unwrap_err();

        assert_eq!(missing.reason(), "upstream_lookup_failed");
        assert_eq!(failing.reason(), "upstream_lookup_failed");
    }
}
