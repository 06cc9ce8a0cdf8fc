//! Pagination controller
//!
//! Derives what the list header shows (summary, enabled controls, target
//! locations) from the latest page event and the current location. All
//! derivations are pure; the controller only stores the most recent event.

use super::cursor::Cursor;
use super::types::{Direction, DisplayRange, PageStats, PaginationLinks};
use crate::config::PagerConfig;
use crate::location::NavigationLocation;
use crate::source::PageEvent;
use serde::Serialize;

/// Query key holding the cursor token
pub const DEFAULT_CURSOR_PARAM: &str = "cursor";

// ============================================================================
// Pure Operations
// ============================================================================

/// Range of items on the current page, or `None` while loading.
///
/// A missing cursor means the page starts at offset 0. Offsets too close to
/// `u64::MAX` are pulled back so `end - start` still equals the page size.
pub fn compute_range(cursor: Option<&Cursor>, stats: &PageStats) -> Option<DisplayRange> {
    if stats.is_loading {
        return None;
    }

    let offset = cursor.map_or(0, |c| c.offset);
    let start = offset.min(u64::MAX - stats.page_item_count);
    Some(DisplayRange {
        start,
        end: start + stats.page_item_count,
        total: stats.total_item_count,
    })
}

/// Whether the control for `direction` may be used.
///
/// Disabled while loading and when the data source reports no results that
/// way. A missing cursor token does not disable the control.
pub fn is_direction_enabled(direction: Direction, links: &PaginationLinks, is_loading: bool) -> bool {
    !is_loading && links[direction].results_available
}

/// Location to apply when the `direction` control fires
pub fn next_location(
    direction: Direction,
    links: &PaginationLinks,
    current: &NavigationLocation,
) -> NavigationLocation {
    next_location_with_param(direction, links, current, DEFAULT_CURSOR_PARAM)
}

/// Same as [`next_location`] with a custom cursor query key.
///
/// Without a cursor token the key is removed, which sends the data source
/// back to its first page.
pub fn next_location_with_param(
    direction: Direction,
    links: &PaginationLinks,
    current: &NavigationLocation,
    cursor_param: &str,
) -> NavigationLocation {
    match links.cursor_for(direction) {
        Ok(cursor) => current.with_query_param(cursor_param, Some(cursor)),
        Err(e) => {
            tracing::debug!("{}, resetting pagination", e);
            current.with_query_param(cursor_param, None)
        }
    }
}

// ============================================================================
// Header Actions
// ============================================================================

/// Controls offered by the list header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
    Previous,
    Next,
    Close,
}

impl HeaderAction {
    /// Paging direction, `None` for close
    pub fn direction(self) -> Option<Direction> {
        match self {
            HeaderAction::Previous => Some(Direction::Previous),
            HeaderAction::Next => Some(Direction::Next),
            HeaderAction::Close => None,
        }
    }
}

impl From<Direction> for HeaderAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Previous => HeaderAction::Previous,
            Direction::Next => HeaderAction::Next,
        }
    }
}

/// What the host should do after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "location", rename_all = "lowercase")]
pub enum Command {
    /// Apply this location
    Navigate(NavigationLocation),
    /// Dismiss the event list
    Close,
}

/// State of one paging control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub enabled: bool,
    /// Target location, present only when enabled
    pub location: Option<NavigationLocation>,
}

/// Everything the header renders for the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub summary: Option<String>,
    pub range: Option<DisplayRange>,
    pub previous: ActionView,
    pub next: ActionView,
}

impl HeaderView {
    /// Control state for a direction
    pub fn action(&self, direction: Direction) -> &ActionView {
        match direction {
            Direction::Previous => &self.previous,
            Direction::Next => &self.next,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    /// A page is displayed
    Idle,
    /// A page is in flight
    Loading,
}

/// Pagination state for one list header.
///
/// Starts in [`WidgetState::Loading`] until the first page arrives. A page
/// whose header has any malformed entry renders fully disabled with no range.
#[derive(Debug, Clone)]
pub struct PaginationController {
    cursor_param: String,
    summary_noun: String,
    state: WidgetState,
    links: PaginationLinks,
    header_malformed: bool,
    stats: PageStats,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(&PagerConfig::default())
    }
}

impl PaginationController {
    /// Create a controller using the query key and wording from `config`
    pub fn new(config: &PagerConfig) -> Self {
        Self {
            cursor_param: config.cursor_param.clone(),
            summary_noun: config.summary_noun.clone(),
            state: WidgetState::Loading,
            links: PaginationLinks::none(),
            header_malformed: false,
            stats: PageStats::loading(),
        }
    }

    /// Record the latest page event
    pub fn on_page_event(&mut self, event: &PageEvent) {
        let next_state = if event.is_loading {
            WidgetState::Loading
        } else {
            WidgetState::Idle
        };
        if next_state != self.state {
            tracing::debug!("Pagination {:?} -> {:?}", self.state, next_state);
        }

        self.state = next_state;
        self.stats = event.stats();
        match event.try_links() {
            Ok(links) => {
                self.links = links;
                self.header_malformed = false;
            }
            Err(e) => {
                tracing::warn!("Disabling pagination: {}", e);
                self.links = PaginationLinks::none();
                self.header_malformed = true;
            }
        }
    }

    /// Current widget state
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Links from the latest page event
    pub fn links(&self) -> &PaginationLinks {
        &self.links
    }

    /// True when the latest page header could not be parsed
    pub fn is_header_malformed(&self) -> bool {
        self.header_malformed
    }

    /// Counts from the latest page event
    pub fn stats(&self) -> &PageStats {
        &self.stats
    }

    /// Query key the controller reads and writes
    pub fn cursor_param(&self) -> &str {
        &self.cursor_param
    }

    fn is_loading(&self) -> bool {
        self.state == WidgetState::Loading
    }

    /// Displayed range for `location`, `None` while loading or when the
    /// header was malformed
    pub fn range(&self, location: &NavigationLocation) -> Option<DisplayRange> {
        if self.header_malformed {
            return None;
        }
        let cursor = Cursor::from_location(location, &self.cursor_param);
        compute_range(cursor.as_ref(), &self.stats)
    }

    /// Whether the control for `direction` is enabled
    pub fn is_enabled(&self, direction: Direction) -> bool {
        is_direction_enabled(direction, &self.links, self.is_loading())
    }

    /// Build the header view for `location`
    pub fn view(&self, location: &NavigationLocation) -> HeaderView {
        let range = self.range(location);
        let summary = range.map(|r| r.summary(&self.summary_noun));

        let action = |direction| {
            let enabled = self.is_enabled(direction);
            ActionView {
                enabled,
                location: enabled.then(|| {
                    next_location_with_param(direction, &self.links, location, &self.cursor_param)
                }),
            }
        };

        HeaderView {
            summary,
            range,
            previous: action(Direction::Previous),
            next: action(Direction::Next),
        }
    }

    /// Turn a header action into a host command.
    ///
    /// Disabled paging actions yield `None`.
    pub fn handle(&self, action: HeaderAction, location: &NavigationLocation) -> Option<Command> {
        let Some(direction) = action.direction() else {
            return Some(Command::Close);
        };

        if !self.is_enabled(direction) {
            tracing::debug!("Ignoring {} while disabled", direction);
            return None;
        }

        Some(Command::Navigate(next_location_with_param(
            direction,
            &self.links,
            location,
            &self.cursor_param,
        )))
    }
}
