use crate::core::config::ViewportOptions;
use crate::core::constants::SCALE_EPSILON;
use crate::core::focus::FocusPlan;
use crate::core::geo::{Point, Size};
use crate::layers::animation::EasingType;
use crate::surface::traits::{PanZoomSurface, SurfaceElement};
use crate::traits::Lerp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Affine mapping from content-plane pixels to container pixels:
/// `screen = content * scale + translate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    /// Create identity transform (no change)
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Maps a content-plane point to container coordinates
    pub fn apply(&self, content: Point) -> Point {
        content.multiply(self.scale).add(&self.translation())
    }

    /// Maps a container point back into the content plane
    pub fn invert(&self, screen: Point) -> Point {
        screen.subtract(&self.translation()).multiply(1.0 / self.scale)
    }

    /// Rescales while keeping the content under `anchor` (container coordinates) fixed
    pub fn zoomed_at(&self, anchor: Point, new_scale: f64) -> Transform {
        let content = self.invert(anchor);
        let translate = anchor.subtract(&content.multiply(new_scale));
        Transform::new(translate.x, translate.y, new_scale)
    }

    pub fn translated(&self, delta: Point) -> Transform {
        Transform::new(
            self.translate_x + delta.x,
            self.translate_y + delta.y,
            self.scale,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.translate_x.is_finite() && self.translate_y.is_finite() && self.scale.is_finite()
    }

    /// Check if two transforms are effectively equal
    pub fn approx_eq(&self, other: &Transform) -> bool {
        (self.scale - other.scale).abs() < SCALE_EPSILON
            && (self.translate_x - other.translate_x).abs() < 0.1
            && (self.translate_y - other.translate_y).abs() < 0.1
    }

    /// Interpolate between two transforms with easing
    pub fn lerp_with_easing(&self, other: &Transform, t: f64, easing: EasingType) -> Transform {
        let eased_t = easing.apply(t);
        Transform {
            translate_x: self.translate_x.lerp(&other.translate_x, eased_t),
            translate_y: self.translate_y.lerp(&other.translate_y, eased_t),
            scale: self.scale.lerp(&other.scale, eased_t),
        }
    }
}

/// Owns the pan offset and zoom scale of the content plane.
///
/// Commands are issued to an attached `PanZoomSurface`, which performs the
/// animation. Until a surface is attached and its container has been laid
/// out, every command is dropped.
pub struct ViewportController<S: PanZoomSurface> {
    options: ViewportOptions,
    surface: Option<S>,
    /// Last transform commanded, or reported back by the surface
    target: Transform,
}

impl<S: PanZoomSurface> ViewportController<S> {
    pub fn new(options: ViewportOptions) -> Self {
        let target = Transform::new(0.0, 0.0, options.initial_scale);
        Self {
            options,
            surface: None,
            target,
        }
    }

    /// Attaches the pan-zoom primitive and moves it to the initial transform
    pub fn attach(&mut self, mut surface: S) {
        let initial = Transform::new(0.0, 0.0, self.options.initial_scale);
        surface.set_easing(self.options.easing);
        surface.set_transform(initial, Duration::ZERO);
        self.target = initial;
        self.surface = Some(surface);
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// Replaces the zoom limits and steps. A current scale outside the new
    /// range is pulled back in on the next command.
    pub fn set_options(&mut self, options: ViewportOptions) {
        if let Some(surface) = &mut self.surface {
            surface.set_easing(options.easing);
        }
        self.options = options;
    }

    /// The transform the viewport is at or animating towards
    pub fn transform(&self) -> Transform {
        self.target
    }

    /// The transform the surface is currently displaying, mid-animation included
    pub fn displayed_transform(&self) -> Transform {
        self.surface
            .as_ref()
            .map(|s| s.current_transform())
            .unwrap_or(self.target)
    }

    /// Measured size of `element`, if it has been laid out
    pub fn measure(&self, element: SurfaceElement) -> Option<Size> {
        self.surface
            .as_ref()
            .and_then(|s| s.measure(element))
            .filter(|size| size.is_measurable())
    }

    pub fn is_live(&self) -> bool {
        self.measure(SurfaceElement::Container).is_some()
    }

    /// Animates to `(translate_x, translate_y, scale)`. Returns false when the
    /// command was dropped because the surface is not live.
    ///
    /// A scale outside the configured range is clamped around the container
    /// center, so whatever was centered stays centered.
    pub fn set_transform(
        &mut self,
        translate_x: f64,
        translate_y: f64,
        scale: f64,
        duration_ms: u64,
    ) -> bool {
        self.transform_to(
            Transform::new(translate_x, translate_y, scale),
            None,
            duration_ms,
        )
    }

    /// Runs a focus plan. A clamped scale is re-anchored at the plan's
    /// centering point rather than the container center.
    pub fn focus(&mut self, plan: &FocusPlan) -> bool {
        self.transform_to(plan.transform, Some(plan.anchor), plan.duration_ms)
    }

    fn transform_to(
        &mut self,
        requested: Transform,
        anchor: Option<Point>,
        duration_ms: u64,
    ) -> bool {
        if !requested.is_finite() || requested.scale <= 0.0 {
            log::debug!("dropping non-finite transform {:?}", requested);
            return false;
        }
        let Some(container) = self.measure(SurfaceElement::Container) else {
            log::debug!("viewport not attached to a measurable container, dropping set_transform");
            return false;
        };

        let clamped = self.options.clamp_scale(requested.scale);
        let transform = if (clamped - requested.scale).abs() > f64::EPSILON {
            log::debug!("clamping scale {:.3} to {:.3}", requested.scale, clamped);
            requested.zoomed_at(anchor.unwrap_or_else(|| container.center()), clamped)
        } else {
            requested
        };

        self.issue(transform, Duration::from_millis(duration_ms));
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(self.options.zoom_step, None, self.options.animation_ms)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(-self.options.zoom_step, None, self.options.animation_ms)
    }

    /// Wheel or pinch zoom anchored at `anchor` (container coordinates).
    /// Positive `notches` zoom in.
    pub fn zoom_at(&mut self, anchor: Point, notches: f64) -> bool {
        self.zoom_by(self.options.wheel_step * notches, Some(anchor), 0)
    }

    /// Returns to the initial transform
    pub fn reset(&mut self) -> bool {
        if !self.is_live() {
            log::debug!("viewport not live, dropping reset");
            return false;
        }
        let initial = Transform::new(0.0, 0.0, self.options.initial_scale);
        self.issue(initial, Duration::from_millis(self.options.animation_ms));
        true
    }

    /// Adopts the transform the surface reports after a user-driven gesture
    pub fn sync_from_surface(&mut self) {
        if let Some(surface) = &self.surface {
            self.target = surface.current_transform();
        }
    }

    fn zoom_by(&mut self, exponent: f64, anchor: Option<Point>, duration_ms: u64) -> bool {
        let Some(container) = self.measure(SurfaceElement::Container) else {
            log::debug!("viewport not live, dropping zoom");
            return false;
        };
        let anchor = anchor.unwrap_or_else(|| container.center());
        let base = self.base_transform();
        let new_scale = self.options.clamp_scale(base.scale * exponent.exp());
        if (new_scale - base.scale).abs() < f64::EPSILON {
            return false;
        }

        let transform = base.zoomed_at(anchor, new_scale);
        self.issue(transform, Duration::from_millis(duration_ms));
        true
    }

    /// Starting point for relative zooms. Gesture pans reach `target` only on
    /// `sync_from_surface`, so a resting surface is read directly. While a
    /// commanded animation runs, zooms build on the target.
    fn base_transform(&self) -> Transform {
        match &self.surface {
            Some(surface) if !surface.is_animating() => surface.current_transform(),
            _ => self.target,
        }
    }

    fn issue(&mut self, transform: Transform, duration: Duration) {
        self.target = transform;
        if let Some(surface) = &mut self.surface {
            surface.set_transform(transform, duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::animated::AnimatedSurface;

    fn live_controller() -> ViewportController<AnimatedSurface> {
        let mut controller = ViewportController::new(ViewportOptions::default());
        controller.attach(AnimatedSurface::new(
            Size::new(1000.0, 800.0),
            Size::new(1000.0, 800.0),
        ));
        controller
    }

    #[test]
    fn test_transform_apply_and_invert() {
        let transform = Transform::new(-400.0, -80.0, 3.0);
        let screen = transform.apply(Point::new(300.0, 160.0));
        assert_eq!(screen, Point::new(500.0, 400.0));

        let back = transform.invert(screen);
        assert!((back.x - 300.0).abs() < 1e-9);
        assert!((back.y - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoomed_at_keeps_anchor_fixed() {
        let transform = Transform::new(25.0, -10.0, 1.5);
        let anchor = Point::new(320.0, 240.0);
        let content = transform.invert(anchor);

        let zoomed = transform.zoomed_at(anchor, 4.0);
        let after = zoomed.apply(content);
        assert!((after.x - anchor.x).abs() < 1e-9);
        assert!((after.y - anchor.y).abs() < 1e-9);
    }

    #[test]
    fn test_unattached_controller_drops_commands() {
        let mut controller: ViewportController<AnimatedSurface> =
            ViewportController::new(ViewportOptions::default());

        assert!(!controller.set_transform(10.0, 10.0, 2.0, 300));
        assert!(!controller.zoom_in());
        assert!(!controller.reset());
        assert_eq!(controller.transform(), Transform::identity());
    }

    #[test]
    fn test_unmeasured_container_drops_commands() {
        let mut controller = ViewportController::new(ViewportOptions::default());
        controller.attach(AnimatedSurface::new(Size::default(), Size::new(1000.0, 800.0)));

        assert!(!controller.is_live());
        assert!(!controller.set_transform(10.0, 10.0, 2.0, 300));
    }

    #[test]
    fn test_zoom_limits() {
        let mut controller = live_controller();

        for _ in 0..20 {
            controller.zoom_in();
            assert!(controller.transform().scale <= controller.options().max_scale);
        }
        assert_eq!(controller.transform().scale, controller.options().max_scale);

        for _ in 0..20 {
            controller.zoom_out();
            assert!(controller.transform().scale >= controller.options().min_scale);
        }
        assert_eq!(controller.transform().scale, controller.options().min_scale);
    }

    #[test]
    fn test_zoom_in_anchors_at_container_center() {
        let mut controller = live_controller();
        assert!(controller.zoom_in());

        let transform = controller.transform();
        let center = transform.apply(Point::new(500.0, 400.0));
        assert!((center.x - 500.0).abs() < 1e-9);
        assert!((center.y - 400.0).abs() < 1e-9);
        assert!((transform.scale - 0.5_f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_zoom_anchors_at_pointer() {
        let mut controller = live_controller();
        let pointer = Point::new(100.0, 700.0);
        assert!(controller.zoom_at(pointer, 2.0));

        let transform = controller.transform();
        let under_pointer = transform.apply(Point::new(100.0, 700.0));
        assert!((under_pointer.x - pointer.x).abs() < 1e-9);
        assert!((under_pointer.y - pointer.y).abs() < 1e-9);
    }

    #[test]
    fn test_set_transform_clamps_around_center() {
        let mut controller = live_controller();
        // Centers content point (300, 160) at 20x, beyond max_scale
        let scale = 20.0;
        assert!(controller.set_transform(500.0 - 300.0 * scale, 400.0 - 160.0 * scale, scale, 0));

        let transform = controller.transform();
        assert_eq!(transform.scale, controller.options().max_scale);
        let centered = transform.apply(Point::new(300.0, 160.0));
        assert!((centered.x - 500.0).abs() < 1e-6);
        assert!((centered.y - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_returns_to_initial() {
        let mut controller = live_controller();
        controller.set_transform(-400.0, -80.0, 3.0, 0);
        assert!(controller.reset());
        assert_eq!(controller.transform(), Transform::identity());
    }

    #[test]
    fn test_sync_from_surface_after_pan() {
        let mut controller = live_controller();
        if let Some(surface) = controller.surface_mut() {
            surface.pan_by(Point::new(40.0, -15.0));
        }
        controller.sync_from_surface();
        assert_eq!(controller.transform(), Transform::new(40.0, -15.0, 1.0));
    }

    #[test]
    fn test_configured_easing_reaches_surface() {
        let mut controller = ViewportController::new(ViewportOptions {
            easing: EasingType::Linear,
            animation_ms: 1000,
            ..ViewportOptions::default()
        });
        controller.attach(AnimatedSurface::new(
            Size::new(1000.0, 800.0),
            Size::new(1000.0, 800.0),
        ));
        assert!(controller.zoom_in());

        let surface = controller.surface_mut().unwrap();
        let halfway = surface.advance(Duration::from_millis(500));
        let linear = 1.0 + (0.5_f64.exp() - 1.0) * 0.5;
        assert!((halfway.scale - linear).abs() < 1e-9, "scale {}", halfway.scale);
    }

    #[test]
    fn test_set_options_updates_surface_easing() {
        let mut controller = live_controller();
        controller.set_options(ViewportOptions {
            easing: EasingType::Linear,
            animation_ms: 1000,
            ..ViewportOptions::default()
        });
        assert!(controller.zoom_in());

        let target = controller.transform();
        let surface = controller.surface_mut().unwrap();
        let halfway = surface.advance(Duration::from_millis(500));
        assert!((halfway.scale - (1.0 + (target.scale - 1.0) * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_zoom_during_drag_keeps_pan() {
        let mut controller = live_controller();
        if let Some(surface) = controller.surface_mut() {
            surface.pan_by(Point::new(-200.0, 0.0));
        }
        let pointer = Point::new(500.0, 400.0);
        let under_pointer = controller.displayed_transform().invert(pointer);
        assert_eq!(under_pointer, Point::new(700.0, 400.0));

        // No sync_from_surface: the drag has not ended yet
        assert!(controller.zoom_at(pointer, 1.0));
        let after = controller.transform().invert(pointer);
        assert!(after.distance_to(&under_pointer) < 1e-9);
    }

    #[test]
    fn test_repeated_zoom_accumulates_while_animating() {
        let mut controller = live_controller();
        controller.zoom_in();
        controller.zoom_in();
        assert!((controller.transform().scale - 1.0_f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_focus_keeps_plan_anchor() {
        let mut controller = ViewportController::new(ViewportOptions::default());
        controller.attach(AnimatedSurface::new(
            Size::new(600.0, 400.0),
            Size::new(1000.0, 800.0),
        ));
        // Content-frame plan at 20x for content point (300, 160)
        let scale = 20.0;
        let plan = FocusPlan {
            transform: Transform::new(500.0 - 300.0 * scale, 400.0 - 160.0 * scale, scale),
            duration_ms: 0,
            anchor: Point::new(500.0, 400.0),
        };
        assert!(controller.focus(&plan));

        let transform = controller.transform();
        assert_eq!(transform.scale, controller.options().max_scale);
        let landed = transform.apply(Point::new(300.0, 160.0));
        assert!((landed.x - 500.0).abs() < 1e-6);
        assert!((landed.y - 400.0).abs() < 1e-6);
    }
}
