//! Pagination types
//!
//! Defines the values the link header parser produces and the controller
//! consumes: directions, link descriptors, page statistics and display ranges.

use super::cursor::Cursor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

// ============================================================================
// Direction
// ============================================================================

/// Navigation direction relative to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the result set
    Previous,
    /// Towards the end of the result set
    Next,
}

impl Direction {
    /// Both directions, previous first
    pub const ALL: [Direction; 2] = [Direction::Previous, Direction::Next];

    /// Relation name used in the link header
    pub fn rel(self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }

    /// Map a link relation to a direction (`prev` is accepted for `previous`)
    pub fn from_rel(rel: &str) -> Option<Self> {
        if rel.eq_ignore_ascii_case("previous") || rel.eq_ignore_ascii_case("prev") {
            Some(Direction::Previous)
        } else if rel.eq_ignore_ascii_case("next") {
            Some(Direction::Next)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rel())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_rel(s.trim())
            .ok_or_else(|| Error::Other(format!("Unknown direction '{s}' (expected previous or next)")))
    }
}

// ============================================================================
// Link Descriptors
// ============================================================================

/// One directional link decoded from a pagination header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkDescriptor {
    /// Link target as sent by the data source
    pub href: Option<String>,
    /// Cursor token to put into the location
    pub cursor: Option<String>,
    /// False when the data source says nothing lies in this direction
    pub results_available: bool,
}

impl LinkDescriptor {
    /// Descriptor for a direction with nothing to navigate to
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Descriptor for an available direction
    pub fn available(cursor: Option<String>) -> Self {
        Self {
            href: None,
            cursor,
            results_available: true,
        }
    }

    /// Set the link target
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Cursor token, if any
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Decode the cursor token. `has_results` mirrors `results_available`.
    pub fn decoded_cursor(&self) -> Option<Cursor> {
        let token = self.cursor.as_deref()?;
        let mut cursor = Cursor::parse(token).ok()?;
        cursor.has_results = self.results_available;
        Some(cursor)
    }
}

/// Previous and next descriptors for one page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub previous: LinkDescriptor,
    pub next: LinkDescriptor,
}

impl PaginationLinks {
    /// Links with both directions unavailable
    pub fn none() -> Self {
        Self::default()
    }

    /// Descriptor for a direction
    pub fn get(&self, direction: Direction) -> &LinkDescriptor {
        match direction {
            Direction::Previous => &self.previous,
            Direction::Next => &self.next,
        }
    }

    pub(crate) fn get_mut(&mut self, direction: Direction) -> &mut LinkDescriptor {
        match direction {
            Direction::Previous => &mut self.previous,
            Direction::Next => &mut self.next,
        }
    }

    /// Cursor token for a direction, or `MissingCursor`
    pub fn cursor_for(&self, direction: Direction) -> Result<&str> {
        self.get(direction)
            .cursor()
            .ok_or_else(|| Error::missing_cursor(direction))
    }
}

impl Index<Direction> for PaginationLinks {
    type Output = LinkDescriptor;

    fn index(&self, direction: Direction) -> &LinkDescriptor {
        self.get(direction)
    }
}

// ============================================================================
// Page Statistics
// ============================================================================

/// Counts delivered with each rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageStats {
    /// Items on the current page
    pub page_item_count: u64,
    /// Items across all pages
    pub total_item_count: u64,
    /// A new page is in flight
    pub is_loading: bool,
}

impl PageStats {
    /// Stats for a page that finished loading
    pub fn loaded(page_item_count: u64, total_item_count: u64) -> Self {
        Self {
            page_item_count,
            total_item_count,
            is_loading: false,
        }
    }

    /// Stats while a page is in flight
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }
}

// ============================================================================
// Display Range
// ============================================================================

/// Zero-based item range shown on the current page.
///
/// Ranges from `compute_range` keep `end - start` equal to the page item
/// count. A deserialized range with `end < start` reads as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl DisplayRange {
    /// Number of items in the range
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// True when the page holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-based summary line, e.g. `Showing 11-30 of 57 matching events`
    pub fn summary(&self, noun: &str) -> String {
        let (first, last) = if self.is_empty() {
            (0, 0)
        } else {
            (self.start + 1, self.end)
        };
        let line = format!("Showing {first}-{last} of {}", self.total);
        if noun.is_empty() {
            line
        } else {
            format!("{line} {noun}")
        }
    }
}
