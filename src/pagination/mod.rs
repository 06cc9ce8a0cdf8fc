//! Pagination module
//!
//! Cursor-based pagination for the event list header.
//!
//! # Overview
//!
//! The link header parser turns the data source's pagination header into one
//! descriptor per direction. The controller combines those descriptors with
//! the page counts and the current location to decide what the header shows
//! and where each control leads.

mod controller;
mod cursor;
pub mod link_header;
mod types;

pub use controller::{
    compute_range, is_direction_enabled, next_location, next_location_with_param, ActionView,
    Command, HeaderAction, HeaderView, PaginationController, WidgetState, DEFAULT_CURSOR_PARAM,
};
pub use cursor::Cursor;
pub use link_header::{parse as parse_link_header, try_parse as try_parse_link_header};
pub use types::{DisplayRange, Direction, LinkDescriptor, PageStats, PaginationLinks};
