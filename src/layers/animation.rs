use crate::core::viewport::Transform;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Convenience functions for common animations
pub fn ease_out_cubic(t: f64) -> f64 {
    EasingType::EaseOut.apply(t)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    EasingType::EaseInOut.apply(t)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    Smooth,
}

impl EasingType {
    /// Apply easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingType::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            // Smooth step (3t^2 - 2t^3)
            EasingType::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Interpolates the viewport from one transform to another.
///
/// The tween owns no clock: callers feed it elapsed time through `advance`,
/// which keeps it deterministic under test and lets the hosting surface
/// decide how frames are scheduled.
#[derive(Debug, Clone)]
pub struct TransformTween {
    from: Transform,
    to: Transform,
    duration: Duration,
    elapsed: Duration,
    easing: EasingType,
}

impl TransformTween {
    pub fn new(from: Transform, to: Transform, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Moves the tween forward and returns the transform to display
    pub fn advance(&mut self, dt: Duration) -> Transform {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.current()
    }

    pub fn current(&self) -> Transform {
        self.from
            .lerp_with_easing(&self.to, self.progress(), self.easing)
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> Transform {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingType::Linear,
            EasingType::EaseIn,
            EasingType::EaseOut,
            EasingType::EaseInOut,
            EasingType::Smooth,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(EasingType::Linear.apply(1.5), 1.0);
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn test_tween_reaches_target() {
        let to = Transform::new(-400.0, -80.0, 3.0);
        let mut tween = TransformTween::new(
            Transform::identity(),
            to,
            Duration::from_millis(300),
            EasingType::Linear,
        );

        let halfway = tween.advance(Duration::from_millis(150));
        assert!((halfway.scale - 2.0).abs() < 1e-9);
        assert!((halfway.translate_x + 200.0).abs() < 1e-9);
        assert!(!tween.is_finished());

        let end = tween.advance(Duration::from_millis(500));
        assert_eq!(end, to);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let to = Transform::new(10.0, 20.0, 2.0);
        let tween = TransformTween::new(Transform::identity(), to, Duration::ZERO, EasingType::EaseOut);
        assert!(tween.is_finished());
        assert_eq!(tween.current(), to);
    }
}
