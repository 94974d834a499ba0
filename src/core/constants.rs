//! Engine-wide defaults

/// Lowest scale the user may zoom out to.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Highest scale the user may zoom in to.
pub const DEFAULT_MAX_SCALE: f64 = 8.0;

/// Scale applied on first layout and by `reset`.
pub const DEFAULT_INITIAL_SCALE: f64 = 1.0;

/// Exponent step for the +/- buttons: `scale * e^step`.
pub const DEFAULT_ZOOM_STEP: f64 = 0.5;

/// Exponent step per wheel notch.
pub const DEFAULT_WHEEL_STEP: f64 = 0.2;

/// Duration of button zooms and resets.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Zoom level used when focusing a selected point.
pub const DEFAULT_FOCUS_SCALE: f64 = 3.0;

/// Duration of the focus animation.
pub const DEFAULT_FOCUS_DURATION_MS: u64 = 300;

/// Opacity of markers excluded by the active filter.
pub const DIMMED_OPACITY: f32 = 0.4;

/// Below this scale difference two transforms are considered equal.
pub const SCALE_EPSILON: f64 = 1e-3;

/// Smallest hit radius of a marker, in content pixels.
pub const MIN_HIT_RADIUS: f64 = 6.0;
