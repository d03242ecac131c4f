//! State logic for the scroll-following recommend widget.

use crate::config::{LABEL_DOWN, LABEL_UP, SCROLL_BOTTOM_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPosition {
    /// Default placement, header points down.
    Down,
    /// Page end reached, widget carries `move-up` and points up.
    Up,
}

impl WidgetPosition {
    pub fn label(self) -> &'static str {
        match self {
            WidgetPosition::Down => LABEL_DOWN,
            WidgetPosition::Up => LABEL_UP,
        }
    }
}

/// Whether the viewport bottom is within the threshold of the page end.
pub fn reached_bottom(inner_height: f64, scroll_y: f64, page_height: f64) -> bool {
    inner_height + scroll_y >= page_height - SCROLL_BOTTOM_THRESHOLD
}

/// The position to switch to, or `None` when the widget is already where it
/// belongs.
pub fn transition(at_bottom: bool, marked_up: bool) -> Option<WidgetPosition> {
    match (at_bottom, marked_up) {
        (true, false) => Some(WidgetPosition::Up),
        (false, true) => Some(WidgetPosition::Down),
        _ => None,
    }
}
