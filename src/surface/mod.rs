pub mod animated;
pub mod traits;

pub use animated::AnimatedSurface;
pub use traits::{PanZoomSurface, SurfaceElement};
