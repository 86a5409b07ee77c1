//! Comparison query parsing
//!
//! Turns the raw `ids` query parameter into an ordered list of product IDs.

use crate::state::ProductId;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Digit groups separated by commas; whitespace is allowed around each group
static IDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[0-9]+\s*(?:,\s*[0-9]+\s*)*$").expect("ids pattern is valid"));

/// Message returned when `ids` is missing or blank
pub const IDS_REQUIRED_MESSAGE: &str = "ids parameter is required";

/// Message returned when `ids` does not match the expected shape
pub const IDS_FORMAT_MESSAGE: &str = "ids must contain comma-separated numbers (e.g. 1,2,3)";

/// Validation failures for the compare query string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdsError {
    /// Parameter absent, empty or whitespace only
    #[error("{}", IDS_REQUIRED_MESSAGE)]
    Missing,

    /// Parameter is not a comma-separated list of numbers
    #[error("{}", IDS_FORMAT_MESSAGE)]
    Malformed,

    /// A digit group does not fit in a product ID
    #[error("id {0} is out of range")]
    OutOfRange(String),

    /// The query string carries a parameter other than `ids`
    #[error("property {0} should not exist")]
    UnknownParameter(String),
}

/// Query parameters for `GET /products/compare`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CompareQuery {
    /// Comma-separated product IDs, e.g. `1,2,3`
    pub ids: Option<String>,
}

impl CompareQuery {
    /// Build the query from decoded `key=value` pairs
    ///
    /// Only `ids` is accepted, at most once. Any other key is rejected by name.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, IdsError> {
        if let Some((key, _)) = pairs.iter().find(|(key, _)| key != "ids") {
            return Err(IdsError::UnknownParameter(key.clone()));
        }

        let mut query = Self::default();
        for (_, value) in pairs {
            if query.ids.replace(value).is_some() {
                return Err(IdsError::Malformed);
            }
        }
        Ok(query)
    }

    /// Validate and parse the `ids` parameter
    ///
    /// # Returns
    /// * `Ok(Vec<ProductId>)` - IDs in the order given, duplicates kept
    /// * `Err(IdsError)` - The first validation rule that failed
    pub fn parse_ids(&self) -> Result<Vec<ProductId>, IdsError> {
        parse_ids(self.ids.as_deref())
    }
}

/// Validate and parse a raw `ids` value
pub fn parse_ids(raw: Option<&str>) -> Result<Vec<ProductId>, IdsError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(IdsError::Missing),
    };

    if !IDS_PATTERN.is_match(raw) {
        return Err(IdsError::Malformed);
    }

    raw.split(',')
        .map(str::trim)
        .map(|group| {
            group
                .parse::<ProductId>()
                .map_err(|_| IdsError::OutOfRange(group.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        assert_eq!(parse_ids(Some("1,2,3")), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_single_id() {
        assert_eq!(parse_ids(Some("42")), Ok(vec![42]));
    }

    #[test]
    fn test_parse_allows_whitespace_around_groups() {
        assert_eq!(parse_ids(Some("1, 2, 3")), Ok(vec![1, 2, 3]));
        assert_eq!(parse_ids(Some(" 4 ,5\t, 6 ")), Ok(vec![4, 5, 6]));
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        assert_eq!(parse_ids(Some("3,1,3")), Ok(vec![3, 1, 3]));
    }

    #[test]
    fn test_missing_or_blank_is_required_error() {
        assert_eq!(parse_ids(None), Err(IdsError::Missing));
        assert_eq!(parse_ids(Some("")), Err(IdsError::Missing));
        assert_eq!(parse_ids(Some("   ")), Err(IdsError::Missing));
    }

    #[test]
    fn test_malformed_values() {
        for raw in ["abc", "abc,def", "1,,2", "1,", ",1", "1;2", "1 2", "-1", "1.5", "1,a"] {
            assert_eq!(parse_ids(Some(raw)), Err(IdsError::Malformed), "{:?}", raw);
        }
    }

    #[test]
    fn test_out_of_range_id() {
        let err = parse_ids(Some("1,99999999999999999999999")).unwrap_err();
        assert_eq!(err, IdsError::OutOfRange("99999999999999999999999".to_string()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(IdsError::Missing.to_string(), IDS_REQUIRED_MESSAGE);
        assert!(IdsError::Malformed.to_string().contains("comma-separated numbers"));
    }

    #[test]
    fn test_compare_query_parse_ids() {
        let query = CompareQuery {
            ids: Some("7, 8".to_string()),
        };
        assert_eq!(query.parse_ids(), Ok(vec![7, 8]));
        assert_eq!(CompareQuery::default().parse_ids(), Err(IdsError::Missing));
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_accepts_ids_only() {
        let query = CompareQuery::from_pairs(pairs(&[("ids", "1,2")])).unwrap();
        assert_eq!(query.ids.as_deref(), Some("1,2"));
        assert_eq!(CompareQuery::from_pairs(vec![]), Ok(CompareQuery::default()));
    }

    #[test]
    fn test_from_pairs_rejects_unknown_parameter() {
        let err = CompareQuery::from_pairs(pairs(&[("ids", "1"), ("foo", "bar")])).unwrap_err();
        assert_eq!(err, IdsError::UnknownParameter("foo".to_string()));
        assert_eq!(err.to_string(), "property foo should not exist");
    }

    #[test]
    fn test_from_pairs_rejects_repeated_ids() {
        let err = CompareQuery::from_pairs(pairs(&[("ids", "1"), ("ids", "2")])).unwrap_err();
        assert_eq!(err, IdsError::Malformed);
    }

    #[test]
    fn test_from_pairs_unknown_parameter_checked_first() {
        let err = CompareQuery::from_pairs(pairs(&[("ids", "1"), ("ids", "2"), ("sort", "asc")]))
            .unwrap_err();
        assert_eq!(err, IdsError::UnknownParameter("sort".to_string()));

        let err = CompareQuery::from_pairs(pairs(&[("limit", "5")])).unwrap_err();
        assert_eq!(err, IdsError::UnknownParameter("limit".to_string()));
    }
}
