//! URL query-string parsing and rebuilding.
//!
//! Navigation state (page type, page number, movie id, auth callback signals)
//! travels entirely in the query string, so both the router glue and the auth
//! callback handling funnel through here.

use std::borrow::Cow;

/// Decoded `key=value` pairs of a query string, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without its leading `?`.
    ///
    /// Malformed percent-escapes are kept verbatim rather than dropped; a
    /// bad pair should never take down navigation.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present with the literal value `true`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// `page` parameter as a number, defaulting to 1 for absent or junk input.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.get("page")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1)
    }

    /// Numeric id parameter.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.get("id").and_then(|v| v.parse().ok())
    }
}

fn decode_component(raw: &str) -> String {
    // `+` is how form submission encodes spaces in search queries.
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(Cow::Borrowed(_)) => raw,
        Ok(Cow::Owned(decoded)) => decoded,
        Err(_) => raw,
    }
}

/// Rebuild `query` without the named keys, other pairs kept verbatim.
///
/// Returns an empty string when nothing remains, so callers can decide
/// whether to keep a `?` at all.
#[must_use]
pub fn without_keys(query: &str, keys: &[&str]) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .filter(|part| {
            let key = part.split_once('=').map_or(*part, |(k, _)| k);
            !keys.contains(&key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_decodes() {
        let params = QueryParams::parse("?type=top_rated&page=3&q=blade%20runner");
        assert_eq!(params.get("type"), Some("top_rated"));
        assert_eq!(params.page(), 3);
        assert_eq!(params.get("q"), Some("blade runner"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn plus_means_space_in_search_queries() {
        let params = QueryParams::parse("q=the+thing");
        assert_eq!(params.get("q"), Some("the thing"));
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(QueryParams::parse("").page(), 1);
        assert_eq!(QueryParams::parse("page=0").page(), 1);
        assert_eq!(QueryParams::parse("page=banana").page(), 1);
        assert_eq!(QueryParams::parse("page=12").page(), 12);
    }

    #[test]
    fn flag_requires_literal_true() {
        assert!(QueryParams::parse("approved=true").flag("approved"));
        assert!(!QueryParams::parse("approved=1").flag("approved"));
        assert!(!QueryParams::parse("denied").flag("denied"));
    }

    #[test]
    fn without_keys_strips_only_the_named_pairs() {
        let cleaned = without_keys(
            "?id=5&request_token=abc&approved=true&denied=true",
            &["request_token", "approved", "denied"],
        );
        assert_eq!(cleaned, "id=5");

        assert_eq!(without_keys("request_token=abc", &["request_token"]), "");
    }
}
