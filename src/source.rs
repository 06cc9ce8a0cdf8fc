//! Data-source boundary
//!
//! The data source delivers one [`PageEvent`] per fetched page. Turning a raw
//! response into an event is the only fallible step; the controller only ever
//! sees successful events.

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::pagination::{parse_link_header, try_parse_link_header, PageStats, PaginationLinks};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Page-count event delivered by the data source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageEvent {
    /// Raw pagination header, if the source sent one
    pub link_header: Option<String>,
    pub page_item_count: u64,
    pub total_item_count: u64,
    pub is_loading: bool,
}

impl PageEvent {
    /// Event sent when a fetch starts
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    /// Event for a page that finished loading
    pub fn loaded(
        link_header: Option<&str>,
        page_item_count: u64,
        total_item_count: u64,
    ) -> Self {
        Self {
            link_header: link_header.map(String::from),
            page_item_count,
            total_item_count,
            is_loading: false,
        }
    }

    /// Build an event from a fetched response's status and headers.
    ///
    /// Non-success statuses become `Error::HttpStatus`. When the hits header
    /// is missing or unreadable, the page item count is used as the total.
    pub fn from_response(
        status: StatusCode,
        headers: &HeaderMap,
        page_item_count: u64,
        config: &PagerConfig,
    ) -> Result<Self> {
        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        let link_header = match headers.get(config.link_header.as_str()) {
            Some(value) => match value.to_str() {
                Ok(s) => Some(s.to_string()),
                Err(_) => {
                    tracing::warn!("Ignoring non-ASCII '{}' header", config.link_header);
                    None
                }
            },
            None => None,
        };

        let total_item_count = headers
            .get(config.hits_header.as_str())
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or_else(|| {
                tracing::debug!(
                    "No usable '{}' header, using page size as total",
                    config.hits_header
                );
                page_item_count
            });

        Ok(Self::loaded(
            link_header.as_deref(),
            page_item_count,
            total_item_count,
        ))
    }

    /// Counts carried by this event
    pub fn stats(&self) -> PageStats {
        PageStats {
            page_item_count: self.page_item_count,
            total_item_count: self.total_item_count,
            is_loading: self.is_loading,
        }
    }

    /// Links decoded from the header, skipping malformed entries
    pub fn links(&self) -> PaginationLinks {
        parse_link_header(self.link_header.as_deref())
    }

    /// Links decoded from the header, failing on any malformed entry.
    ///
    /// No header at all is not an error: both directions are unavailable.
    pub fn try_links(&self) -> Result<PaginationLinks> {
        match self.link_header.as_deref() {
            Some(header) => try_parse_link_header(header),
            None => Ok(PaginationLinks::none()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Direction;
    use reqwest::header::HeaderValue;

    const LINK: &str = r#"<https://example.com/api/0/issues/1/events/?cursor=0:0:1>; rel="previous"; results="false"; cursor="0:0:1", <https://example.com/api/0/issues/1/events/?cursor=0:50:0>; rel="next"; results="true"; cursor="0:50:0""#;

    #[test]
    fn test_from_response_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("link", HeaderValue::from_static(LINK));
        headers.insert("x-hits", HeaderValue::from_static("123"));

        let event =
            PageEvent::from_response(StatusCode::OK, &headers, 50, &PagerConfig::default()).unwrap();
        assert!(!event.is_loading);
        assert_eq!(event.page_item_count, 50);
        assert_eq!(event.total_item_count, 123);

        let links = event.links();
        assert!(!links.previous.results_available);
        assert_eq!(links.cursor_for(Direction::Next).unwrap(), "0:50:0");
    }

    #[test]
    fn test_from_response_without_hits_uses_page_size() {
        let mut headers = HeaderMap::new();
        headers.insert("x-hits", HeaderValue::from_static("lots"));

        let event =
            PageEvent::from_response(StatusCode::OK, &headers, 7, &PagerConfig::default()).unwrap();
        assert_eq!(event.total_item_count, 7);
        assert!(event.link_header.is_none());
        assert_eq!(event.links(), PaginationLinks::none());
    }

    #[test]
    fn test_from_response_custom_header_names() {
        let config = PagerConfig {
            link_header: "x-page-links".to_string(),
            hits_header: "x-total".to_string(),
            ..Default::default()
        };
        let mut headers = HeaderMap::new();
        headers.insert("x-page-links", HeaderValue::from_static(LINK));
        headers.insert("x-total", HeaderValue::from_static("9"));

        let event = PageEvent::from_response(StatusCode::OK, &headers, 5, &config).unwrap();
        assert_eq!(event.total_item_count, 9);
        assert!(event.link_header.is_some());
    }

    #[test]
    fn test_from_response_error_status() {
        let err = PageEvent::from_response(
            StatusCode::NOT_FOUND,
            &HeaderMap::new(),
            0,
            &PagerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
        assert!(!err.is_soft());
    }

    #[test]
    fn test_try_links_rejects_partial_header() {
        let event = PageEvent::loaded(
            Some(r#"<u>; rel="previous"; results="nope", <u>; rel="next"; results="true""#),
            10,
            57,
        );
        assert!(event.links().next.results_available);
        assert!(matches!(
            event.try_links().unwrap_err(),
            Error::MalformedHeader { .. }
        ));
    }

    #[test]
    fn test_try_links_without_header() {
        let event = PageEvent::loaded(None, 10, 57);
        assert_eq!(event.try_links().unwrap(), PaginationLinks::none());
    }

    #[test]
    fn test_loading_event_stats() {
        let stats = PageEvent::loading().stats();
        assert!(stats.is_loading);
        assert_eq!(stats.page_item_count, 0);
    }
}
