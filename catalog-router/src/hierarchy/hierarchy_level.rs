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

//! Typed hierarchy levels and their positional parameter/encoding accumulation.

use crate::records::PageType;
use crate::slug::slugify;
use crate::template::RouteParams;
use serde::{Deserialize, Deserializer, Serialize};

/// Encoding token contributed by every category level.
pub const CATEGORY_TOKEN: &str = "c";
const TOKEN_SEPARATOR: char = ',';

/// Reads an optional parent id, treating an empty or blank id as no parent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|id| !id.trim().is_empty()))
}

/// Catalog category as delivered by the catalog broadcaster.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "parentCategoryId", deserialize_with = "blank_as_none")]
    pub parent_id: Option<String>,
}

impl CategoryNode {
    pub fn new(id: &str, name: &str, parent_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    /// Parent id, if any. A blank id means the node is a root.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}

/// Position of a level in the category tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HierarchyKind {
    Department,
    Category,
    Subcategory,
}

impl HierarchyKind {
    /// Kind of the level directly below a level of kind `parent` (`None` for roots).
    pub fn below(parent: Option<HierarchyKind>) -> Self {
        match parent {
            None => HierarchyKind::Department,
            Some(HierarchyKind::Department) => HierarchyKind::Category,
            Some(HierarchyKind::Category | HierarchyKind::Subcategory) => {
                HierarchyKind::Subcategory
            }
        }
    }

    pub fn page_type(&self) -> PageType {
        match self {
            HierarchyKind::Department => PageType::Department,
            HierarchyKind::Category => PageType::Category,
            HierarchyKind::Subcategory => PageType::Subcategory,
        }
    }
}

/// Route parameters accumulated from the root down to one level.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct HierarchyParams {
    department: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    terms: Option<String>,
}

impl HierarchyParams {
    pub const DEPARTMENT: &'static str = "department";
    pub const CATEGORY: &'static str = "category";
    pub const SUBCATEGORY: &'static str = "subcategory";
    pub const TERMS: &'static str = "terms";

    /// Folds already-slugged labels, root first, into parameters.
    ///
    /// Applies the same positional rules as hierarchy resolution, so translated
    /// labels land on the same parameters as the tenant labels they replace.
    pub fn from_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = HierarchyParams::default();
        let mut kind = None;
        for slug in slugs {
            kind = Some(params.push_segment(kind, slug.as_ref()));
        }
        params
    }

    /// Records `slug` for the level below `parent` and returns that level's kind.
    fn push_segment(&mut self, parent: Option<HierarchyKind>, slug: &str) -> HierarchyKind {
        let kind = HierarchyKind::below(parent);
        match parent {
            None => self.department = Some(slug.to_string()),
            Some(HierarchyKind::Department) => self.category = Some(slug.to_string()),
            Some(HierarchyKind::Category) => self.subcategory = Some(slug.to_string()),
            // Deeper levels concatenate onto `terms` with no separator; the
            // search path templates expect that shape.
            Some(HierarchyKind::Subcategory) => {
                self.terms.get_or_insert_with(String::new).push_str(slug)
            }
        }
        kind
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn terms(&self) -> Option<&str> {
        self.terms.as_deref()
    }

    /// Set parameters in hierarchy order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (Self::DEPARTMENT, self.department.as_deref()),
            (Self::CATEGORY, self.category.as_deref()),
            (Self::SUBCATEGORY, self.subcategory.as_deref()),
            (Self::TERMS, self.terms.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    }

    pub fn to_route_params(&self) -> RouteParams {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

/// One resolved level of a category's ancestor chain.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HierarchyLevel {
    pub id: String,
    /// Display name, untranslated and unslugged.
    pub name: String,
    pub kind: HierarchyKind,
    pub slug: String,
    pub params: HierarchyParams,
    /// One `c` token per level from the root down to this one.
    pub encoding: String,
}

impl HierarchyLevel {
    /// Level for a node without parent.
    pub(crate) fn root(node: &CategoryNode) -> Self {
        let slug = slugify(&node.name);
        let mut params = HierarchyParams::default();
        let kind = params.push_segment(None, &slug);

        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind,
            slug,
            params,
            encoding: CATEGORY_TOKEN.to_string(),
        }
    }

    /// Level for `node`, a direct child of `self`.
    pub(crate) fn child(&self, node: &CategoryNode) -> Self {
        let slug = slugify(&node.name);
        let mut params = self.params.clone();
        let kind = params.push_segment(Some(self.kind), &slug);

        let mut encoding = String::with_capacity(self.encoding.len() + 2);
        encoding.push_str(&self.encoding);
        encoding.push(TOKEN_SEPARATOR);
        encoding.push_str(CATEGORY_TOKEN);

        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind,
            slug,
            params,
            encoding,
        }
    }

    /// Number of encoding tokens, equal to the number of path segments this level spans.
    pub fn encoding_tokens(&self) -> usize {
        self.encoding.split(TOKEN_SEPARATOR).count()
    }
}
