use crate::core::{
    geo::{Point, Size},
    viewport::Transform,
};
use crate::layers::animation::{EasingType, TransformTween};
use crate::surface::traits::{PanZoomSurface, SurfaceElement};
use instant::Instant;
use std::time::Duration;

/// In-memory pan/zoom primitive.
///
/// Holds the measured sizes handed to it by the host UI and tweens between
/// transforms. A new command always starts from whatever is on screen at
/// that moment, so the last command wins and nothing is queued.
#[derive(Debug, Clone)]
pub struct AnimatedSurface {
    container: Size,
    content: Size,
    displayed: Transform,
    tween: Option<TransformTween>,
    easing: EasingType,
    last_tick: Option<Instant>,
}

impl AnimatedSurface {
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container,
            content,
            displayed: Transform::identity(),
            tween: None,
            easing: EasingType::EaseOut,
            last_tick: None,
        }
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    /// Where the surface will come to rest
    pub fn resting_transform(&self) -> Transform {
        self.tween
            .as_ref()
            .map(|t| t.target())
            .unwrap_or(self.displayed)
    }

    /// Steps the running animation by `dt`
    pub fn advance(&mut self, dt: Duration) -> Transform {
        if let Some(tween) = &mut self.tween {
            self.displayed = tween.advance(dt);
            if tween.is_finished() {
                self.tween = None;
            }
        }
        self.displayed
    }

    /// Steps the running animation by the wall-clock time since the last call
    pub fn update(&mut self) -> Transform {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);
        self.advance(dt)
    }

    /// Drag gesture: interrupts any animation and moves the content by `delta`
    pub fn pan_by(&mut self, delta: Point) {
        self.tween = None;
        self.displayed = self.displayed.translated(delta);
    }
}

impl PanZoomSurface for AnimatedSurface {
    fn measure(&self, element: SurfaceElement) -> Option<Size> {
        let size = match element {
            SurfaceElement::Container => self.container,
            SurfaceElement::Content => self.content,
        };
        size.is_measurable().then_some(size)
    }

    fn set_transform(&mut self, transform: Transform, duration: Duration) {
        if duration.is_zero() {
            self.tween = None;
            self.displayed = transform;
            return;
        }
        self.tween = Some(TransformTween::new(
            self.displayed,
            transform,
            duration,
            self.easing,
        ));
        self.last_tick = None;
    }

    fn current_transform(&self) -> Transform {
        self.displayed
    }

    fn set_easing(&mut self, easing: EasingType) {
        self.easing = easing;
    }

    fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
