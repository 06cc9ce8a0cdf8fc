//! Navigation locations
//!
//! A location is a path plus an ordered query-parameter list. Locations are
//! immutable snapshots: every edit returns a new value and the host decides
//! when to apply it.

use crate::error::{Error, Result};
use crate::types::QueryPairs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use url::{form_urlencoded, Url};

/// Base used to resolve `path?query` inputs
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("static base URL is valid"));

/// Path and query parameters that select what the list displays
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationLocation {
    /// URL path, percent-encoded
    pub path: String,
    /// Decoded query parameters in their original order
    #[serde(default)]
    pub query: QueryPairs,
}

impl NavigationLocation {
    /// Create a location without query parameters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parse an absolute URL or a `path?query` string.
    ///
    /// Scheme, host and fragment are not part of a location and are dropped.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_location(input, "location is empty"));
        }

        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => RELATIVE_BASE.join(trimmed)?,
            Err(e) => return Err(e.into()),
        };

        if url.cannot_be_a_base() {
            return Err(Error::invalid_location(input, "URL has no path"));
        }

        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    /// Append a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value for a query key
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Copy of this location with `key` set to `value`, or removed when
    /// `value` is `None`.
    ///
    /// A replaced key keeps the position of its first occurrence; further
    /// occurrences are dropped. Every other pair is carried over as-is.
    #[must_use]
    pub fn with_query_param(&self, key: &str, value: Option<&str>) -> Self {
        let mut query = Vec::with_capacity(self.query.len() + 1);
        let mut placed = false;

        for (k, v) in &self.query {
            if k != key {
                query.push((k.clone(), v.clone()));
                continue;
            }
            if let (Some(value), false) = (value, placed) {
                query.push((k.clone(), value.to_string()));
                placed = true;
            }
        }

        if let (Some(value), false) = (value, placed) {
            query.push((key.to_string(), value.to_string()));
        }

        Self {
            path: self.path.clone(),
            query,
        }
    }
}

impl fmt::Display for NavigationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}

impl FromStr for NavigationLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_relative_location() {
        let loc = NavigationLocation::parse("/issues/42/events/?query=is:unresolved&cursor=0:100:0")
            .unwrap();
        assert_eq!(loc.path, "/issues/42/events/");
        assert_eq!(
            loc.query,
            vec![
                ("query".to_string(), "is:unresolved".to_string()),
                ("cursor".to_string(), "0:100:0".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_absolute_location_drops_origin() {
        let loc = NavigationLocation::parse("https://example.com/issues/7/events/?environment=prod#top")
            .unwrap();
        assert_eq!(loc.path, "/issues/7/events/");
        assert_eq!(loc.query_param("environment"), Some("prod"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(NavigationLocation::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_opaque_url() {
        assert!(NavigationLocation::parse("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_with_query_param_replaces_in_place() {
        let loc = NavigationLocation::new("/events/")
            .with_query("a", "1")
            .with_query("cursor", "old")
            .with_query("b", "2")
            .with_query("cursor", "dup");

        let updated = loc.with_query_param("cursor", Some("new"));
        assert_eq!(
            updated.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("cursor".to_string(), "new".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
        // the source snapshot is untouched
        assert_eq!(loc.query.len(), 4);
    }

    #[test]
    fn test_with_query_param_appends_and_removes() {
        let loc = NavigationLocation::new("/events/").with_query("a", "1");

        let added = loc.with_query_param("cursor", Some("0:10:0"));
        assert_eq!(added.query_param("cursor"), Some("0:10:0"));

        let removed = added.with_query_param("cursor", None);
        assert_eq!(removed, loc);
    }

    #[test]
    fn test_display_round_trip() {
        let loc = NavigationLocation::new("/issues/1/events/")
            .with_query("query", "user.email:a b")
            .with_query("cursor", "0:20:0");
        let rendered = loc.to_string();
        assert!(rendered.starts_with("/issues/1/events/?"));
        assert_eq!(NavigationLocation::parse(&rendered).unwrap(), loc);
    }

    #[test]
    fn test_display_without_query() {
        assert_eq!(NavigationLocation::new("/a/b/").to_string(), "/a/b/");
    }
}
