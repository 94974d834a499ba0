use crate::core::{geo::Size, viewport::Transform};
use crate::layers::animation::EasingType;
use std::time::Duration;

/// Elements of the rendering surface that can be measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceElement {
    /// The fixed-size viewport through which the content is seen
    Container,
    /// The unscaled content plane holding the image and markers
    Content,
}

/// The pan/zoom primitive the engine drives but does not implement.
///
/// Implementations own the actual animation and the raw drag, pinch and
/// wheel gestures. The engine only issues discrete transform commands and
/// reads measurements back.
pub trait PanZoomSurface {
    /// Laid-out, unscaled size of `element`, or `None` before layout
    fn measure(&self, element: SurfaceElement) -> Option<Size>;

    /// Animate to `transform` over `duration`, overriding any animation in flight
    fn set_transform(&mut self, transform: Transform, duration: Duration);

    /// The transform currently displayed, including gesture-driven changes
    fn current_transform(&self) -> Transform;

    /// Easing curve for subsequent animated transforms
    fn set_easing(&mut self, _easing: EasingType) {}

    /// True while a commanded transform is still being animated
    fn is_animating(&self) -> bool {
        false
    }
}

impl<T: PanZoomSurface + ?Sized> PanZoomSurface for Box<T> {
    fn measure(&self, element: SurfaceElement) -> Option<Size> {
        (**self).measure(element)
    }

    fn set_transform(&mut self, transform: Transform, duration: Duration) {
        (**self).set_transform(transform, duration)
    }

    fn current_transform(&self) -> Transform {
        (**self).current_transform()
    }

    fn set_easing(&mut self, easing: EasingType) {
        (**self).set_easing(easing)
    }

    fn is_animating(&self) -> bool {
        (**self).is_animating()
    }
}
