//! Configuration system for viewport and interaction behaviour
//!
//! Options are grouped by the component that consumes them. A `MapProfile`
//! resolves to a complete `MapOptions`; everything is serde-friendly so a
//! dataset file can carry its own options block.

use crate::core::constants::*;
use crate::layers::animation::EasingType;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum MapProfile {
    /// Wide canvas, gentle 2x focus, free zoom between 0.5x and 5x
    Overview,
    /// Focus snaps to 3x and centers inside the content box
    CloseUp,
    Custom(MapOptions),
}

impl MapProfile {
    pub fn resolve(&self) -> MapOptions {
        match self {
            Self::Overview => MapOptions {
                viewport: ViewportOptions {
                    min_scale: 0.5,
                    max_scale: 5.0,
                    initial_scale: 1.0,
                    zoom_step: DEFAULT_ZOOM_STEP,
                    wheel_step: 0.2,
                    animation_ms: DEFAULT_ANIMATION_MS,
                    easing: EasingType::EaseOut,
                },
                focus: FocusOptions {
                    target_scale: 2.0,
                    duration_ms: 300,
                    frame: FocusFrame::Container,
                },
                interaction: InteractionOptions::default(),
                label: LabelOptions {
                    placement: LabelPlacement::Right,
                },
            },
            Self::CloseUp => MapOptions {
                viewport: ViewportOptions::default(),
                focus: FocusOptions {
                    target_scale: 3.0,
                    duration_ms: 300,
                    frame: FocusFrame::Content,
                },
                interaction: InteractionOptions::default(),
                label: LabelOptions {
                    placement: LabelPlacement::Above,
                },
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for MapProfile {
    fn default() -> Self {
        Self::Custom(MapOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub viewport: ViewportOptions,
    pub focus: FocusOptions,
    pub interaction: InteractionOptions,
    pub label: LabelOptions,
}

impl MapOptions {
    /// Rejects option sets that would make the viewport math meaningless
    pub fn validate(&self) -> Result<()> {
        let v = &self.viewport;
        if !(v.min_scale.is_finite() && v.min_scale > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                v.min_scale
            )));
        }
        if !v.max_scale.is_finite() || v.max_scale < v.min_scale {
            return Err(MapError::InvalidConfig(format!(
                "max_scale {} is below min_scale {}",
                v.max_scale, v.min_scale
            )));
        }
        if !v.initial_scale.is_finite()
            || v.initial_scale < v.min_scale
            || v.initial_scale > v.max_scale
        {
            return Err(MapError::InvalidConfig(format!(
                "initial_scale {} outside [{}, {}]",
                v.initial_scale, v.min_scale, v.max_scale
            )));
        }
        if !(v.zoom_step > 0.0 && v.wheel_step > 0.0) {
            return Err(MapError::InvalidConfig(
                "zoom_step and wheel_step must be positive".to_string(),
            ));
        }
        let target = self.focus.target_scale;
        if !(target.is_finite() && target > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "focus target_scale must be positive, got {}",
                target
            )));
        }
        if target < v.min_scale || target > v.max_scale {
            log::warn!(
                "focus scale {} outside [{}, {}], it will be clamped",
                target,
                v.min_scale,
                v.max_scale
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportOptions {
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_scale: f64,
    /// Exponent applied per zoom button press: `scale * e^zoom_step`
    pub zoom_step: f64,
    /// Exponent applied per wheel notch
    pub wheel_step: f64,
    pub animation_ms: u64,
    pub easing: EasingType,
}

impl ViewportOptions {
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            initial_scale: DEFAULT_INITIAL_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_step: DEFAULT_WHEEL_STEP,
            animation_ms: DEFAULT_ANIMATION_MS,
            easing: EasingType::EaseOut,
        }
    }
}

/// Which measured box supplies the midpoint a focused point is centered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusFrame {
    /// The fixed viewport element
    #[default]
    Container,
    /// The content element's own laid-out box, for layouts where it fills the viewport
    Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusOptions {
    pub target_scale: f64,
    pub duration_ms: u64,
    pub frame: FocusFrame,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            target_scale: DEFAULT_FOCUS_SCALE,
            duration_ms: DEFAULT_FOCUS_DURATION_MS,
            frame: FocusFrame::Container,
        }
    }
}

/// How markers excluded by the active filter respond to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilteredPointPolicy {
    /// Dimmed and ignored by hover and select
    #[default]
    Inert,
    /// Dimmed but still hoverable and selectable
    DimmedInteractive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionOptions {
    pub filtered_policy: FilteredPointPolicy,
    pub show_popup_on_select: bool,
    pub dimmed_opacity: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            filtered_policy: FilteredPointPolicy::Inert,
            show_popup_on_select: true,
            dimmed_opacity: DIMMED_OPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    /// Centered horizontally, floating above the marker
    #[default]
    Above,
    /// Vertically centered, to the right of the marker
    Right,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub placement: LabelPlacement,
}
