use std::fmt::{Display, Formatter};

const CATEGORY: &str = "c";
const BRAND: &str = "b";
const SPECIFICATION_FILTER: &str = "specificationFilter";

/// One comma-separated unit of a search URL's `map` query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MapToken {
    Category,
    Brand,
    /// `specificationFilter_<id>` with a numeric id. Anything after a further
    /// `_` is ignored.
    SpecificationFilter(u64),
    /// Anything else, including specification filters with a non-numeric id.
    Raw(String),
}

impl MapToken {
    pub fn parse(token: &str) -> Self {
        match token {
            CATEGORY => MapToken::Category,
            BRAND => MapToken::Brand,
            other => Self::specification_id(other)
                .map(MapToken::SpecificationFilter)
                .unwrap_or_else(|| MapToken::Raw(other.to_string())),
        }
    }

    fn specification_id(token: &str) -> Option<u64> {
        let mut parts = token.split('_');
        match (parts.next(), parts.next()) {
            (Some(SPECIFICATION_FILTER), Some(id)) => id.parse().ok(),
            _ => None,
        }
    }
}

impl Display for MapToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MapToken::Category => f.write_str(CATEGORY),
            MapToken::Brand => f.write_str(BRAND),
            MapToken::SpecificationFilter(id) => write!(f, "{SPECIFICATION_FILTER}_{id}"),
            MapToken::Raw(token) => f.write_str(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapToken;

    #[test]
    fn parses_structural_and_filter_tokens() {
        assert_eq!(MapToken::parse("c"), MapToken::Category);
        assert_eq!(MapToken::parse("b"), MapToken::Brand);
        assert_eq!(
            MapToken::parse("specificationFilter_55"),
            MapToken::SpecificationFilter(55)
        );
        assert_eq!(MapToken::parse("ft"), MapToken::Raw("ft".to_string()));
    }

    #[test]
    fn non_numeric_filter_id_stays_raw() {
        assert_eq!(
            MapToken::parse("specificationFilter_color"),
            MapToken::Raw("specificationFilter_color".to_string())
        );
        assert_eq!(MapToken::parse("priceFrom_10").to_string(), "priceFrom_10");
        assert_eq!(
            MapToken::parse("specificationFilter__55"),
            MapToken::Raw("specificationFilter__55".to_string())
        );
    }

    #[test]
    fn trailing_filter_suffix_is_ignored() {
        assert_eq!(
            MapToken::parse("specificationFilter_55_x"),
            MapToken::SpecificationFilter(55)
        );
        assert_eq!(
            MapToken::parse("specificationFilter_x_55"),
            MapToken::Raw("specificationFilter_x_55".to_string())
        );
    }
}
