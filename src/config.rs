//! Compile-time tunables for the backdrop and the page bindings.

use std::f64::consts::TAU;
use std::ops::Range;

/// Number of particles allocated at startup. Never changes afterwards.
pub const PARTICLE_COUNT: usize = 100;

pub const SIZE: Range<f64> = 10.0..60.0;
pub const SPEED: Range<f64> = 0.5..1.5;
pub const ANGLE: Range<f64> = 0.0..TAU;
pub const ROTATION_SPEED: Range<f64> = -0.025..0.025;
pub const OPACITY: Range<f64> = 0.1..0.6;

/// A particle is recycled once it is this far past the left or bottom edge.
pub const EXIT_MARGIN: f64 = 100.0;

/// Top-edge respawn: `y` is fixed, `x` spans the width plus this much.
pub const TOP_SPAWN_Y: f64 = -50.0;
pub const TOP_SPAWN_EXTRA_WIDTH: f64 = 100.0;

/// Right-edge respawn: `x` sits this far past the width, `y` spans
/// `[RIGHT_SPAWN_MIN_Y, height)`.
pub const RIGHT_SPAWN_OFFSET_X: f64 = 50.0;
pub const RIGHT_SPAWN_MIN_Y: f64 = -100.0;

pub const CROSS_LINE_WIDTH: f64 = 2.0;

pub const CANVAS_ID: &str = "bg-canvas";

pub const SPROUT_TRIGGER_ID: &str = "sprout-trigger";
pub const SECRET_OVERLAY_ID: &str = "secret-overlay";
pub const VIDEO_TRIGGER_ID: &str = "video-trigger";
pub const GALLERY_OVERLAY_ID: &str = "gallery-overlay";
pub const GALLERY_TRACK_ID: &str = "gallery-track";
pub const WIDGET_SELECTOR: &str = ".recommend-widget";
pub const WIDGET_HEADER_SELECTOR: &str = ".widget-header";

pub const ACTIVE_CLASS: &str = "active";
pub const MOVE_UP_CLASS: &str = "move-up";

/// How close (px) the viewport bottom must get to the page end before the
/// widget moves up.
pub const SCROLL_BOTTOM_THRESHOLD: f64 = 50.0;

pub const LABEL_UP: &str = "👆 おすすめ！";
pub const LABEL_DOWN: &str = "👇 おすすめ！";
