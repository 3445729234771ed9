//! Page-type identifiers shared by template lookup and route records.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storefront page type a route resolves to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PageType {
    #[serde(rename = "store.search#department")]
    Department,
    #[serde(rename = "store.search#category")]
    Category,
    #[serde(rename = "store.search#subcategory")]
    Subcategory,
    #[serde(rename = "store.search#brand")]
    Brand,
    #[serde(rename = "store.product")]
    Product,
    #[serde(rename = "store.not-found#product")]
    ProductNotFound,
    #[serde(rename = "store.not-found#search")]
    SearchNotFound,
}

impl PageType {
    pub const ALL: [PageType; 7] = [
        PageType::Department,
        PageType::Category,
        PageType::Subcategory,
        PageType::Brand,
        PageType::Product,
        PageType::ProductNotFound,
        PageType::SearchNotFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Department => "store.search#department",
            PageType::Category => "store.search#category",
            PageType::Subcategory => "store.search#subcategory",
            PageType::Brand => "store.search#brand",
            PageType::Product => "store.product",
            PageType::ProductNotFound => "store.not-found#product",
            PageType::SearchNotFound => "store.not-found#search",
        }
    }
}

impl Display for PageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|page_type| page_type.as_str() == value)
            .ok_or_else(|| format!("unknown page type '{value}'"))
    }
}
