// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # event-pager
//!
//! Cursor-based pagination for the event list of an issue.
//!
//! The data source answers each page request with a pagination header such as
//!
//! ```text
//! <https://example.com/api/0/issues/1/events/?cursor=0:0:1>; rel="previous"; results="false"; cursor="0:0:1",
//! <https://example.com/api/0/issues/1/events/?cursor=0:100:0>; rel="next"; results="true"; cursor="0:100:0"
//! ```
//!
//! This crate turns that header, the page counts and the current location
//! into what the list header renders: a "Showing X-Y of N" summary, the
//! enabled state of the previous/next controls and the location each
//! control leads to.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_pager::{NavigationLocation, PageEvent, PaginationController, HeaderAction, Command};
//!
//! let header = r#"<u>; rel="previous"; results="false", <u>; rel="next"; results="true"; cursor="0:20:0""#;
//! let mut controller = PaginationController::default();
//! controller.on_page_event(&PageEvent::loaded(Some(header), 20, 57));
//!
//! let here = NavigationLocation::parse("/issues/1/events/?environment=prod").unwrap();
//! let view = controller.view(&here);
//! assert_eq!(view.summary.as_deref(), Some("Showing 1-20 of 57 matching events"));
//! assert!(!view.previous.enabled);
//!
//! match controller.handle(HeaderAction::Next, &here) {
//!     Some(Command::Navigate(next)) => assert_eq!(next.query_param("cursor"), Some("0:20:0")),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   PageEvent    ┌──────────────────────┐   Command    ┌──────┐
//! │ data source  │ ─────────────▶ │ PaginationController │ ───────────▶ │ host │
//! └──────────────┘                │  link_header::parse  │              └──────┘
//!                                 │  compute_range       │
//!                                 │  next_location       │ ◀── NavigationLocation
//!                                 └──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Link header parsing and the pagination controller
pub mod pagination;

/// Navigation locations
pub mod location;

/// Data-source boundary
pub mod source;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, PagerConfig};
pub use error::{Error, Result};
pub use location::NavigationLocation;
pub use pagination::{
    Command, Cursor, Direction, DisplayRange, HeaderAction, HeaderView, LinkDescriptor,
    PageStats, PaginationController, PaginationLinks,
};
pub use source::PageEvent;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
