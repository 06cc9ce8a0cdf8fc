//! Cursor token codec
//!
//! Cursor tokens have the shape `value:offset:is_prev`, for example `0:100:0`.
//! The value may itself contain colons, so the token is split from the right.

use crate::error::{Error, Result};
use crate::location::NavigationLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decoded cursor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Sort-key value the page is anchored on
    pub value: String,
    /// Position of the first item of the page
    pub offset: u64,
    /// Cursor was produced by a backwards step
    pub is_prev: bool,
    /// Whether the data source reported results at this cursor
    pub has_results: bool,
}

impl Cursor {
    /// Create a forward cursor
    pub fn new(value: impl Into<String>, offset: u64) -> Self {
        Self {
            value: value.into(),
            offset,
            is_prev: false,
            has_results: true,
        }
    }

    /// Decode a `value:offset:is_prev` token
    pub fn parse(token: &str) -> Result<Self> {
        let mut parts = token.rsplitn(3, ':');
        let (Some(is_prev), Some(offset), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_cursor(
                token,
                "expected 'value:offset:is_prev'",
            ));
        };

        let offset = offset
            .parse::<u64>()
            .map_err(|e| Error::invalid_cursor(token, format!("bad offset: {e}")))?;

        let is_prev = match is_prev {
            "0" => false,
            "1" => true,
            other => {
                return Err(Error::invalid_cursor(
                    token,
                    format!("bad direction flag '{other}'"),
                ))
            }
        };

        Ok(Self {
            value: value.to_string(),
            offset,
            is_prev,
            has_results: true,
        })
    }

    /// Read the cursor from a location's query.
    ///
    /// An undecodable token counts as no cursor at all.
    pub fn from_location(location: &NavigationLocation, param: &str) -> Option<Self> {
        let token = location.query_param(param)?;
        match Self::parse(token) {
            Ok(cursor) => Some(cursor),
            Err(e) => {
                tracing::debug!("Ignoring cursor in location: {}", e);
                None
            }
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.value, self.offset, u8::from(self.is_prev))
    }
}

impl FromStr for Cursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
