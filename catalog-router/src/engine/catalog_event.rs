//! Catalog change notifications as delivered by the catalog broadcaster.

use crate::hierarchy::{blank_as_none, CategoryNode};
use serde::{Deserialize, Serialize};

fn active() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEvent {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "parentCategoryId", deserialize_with = "blank_as_none")]
    pub parent_id: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl CategoryEvent {
    pub fn new(id: &str, name: &str, parent_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
            is_active: true,
        }
    }

    /// The changed category as the leaf of its hierarchy.
    pub fn node(&self) -> CategoryNode {
        CategoryNode::new(&self.id, &self.name, self.parent_id.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEvent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub link_id: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl ProductEvent {
    pub fn new(id: &str, name: &str, link_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            link_id: link_id.map(str::to_string),
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandEvent {
    pub id: String,
    pub name: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl BrandEvent {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_active: true,
        }
    }
}
