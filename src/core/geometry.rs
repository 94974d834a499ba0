//! Placement of points of interest in the unscaled content plane.
//!
//! Content dimensions must be the element's laid-out size, not its zoomed
//! on-screen size, or every derived position is off by the current scale.

use crate::core::geo::{Point, Size};
use crate::data::poi::{PointOfInterest, PositionUnit};

/// Resolves a point's authored position to content-plane pixels
pub fn resolve(point: &PointOfInterest, content_width: f64, content_height: f64) -> Point {
    match point.unit {
        PositionUnit::Percent => Point::new(
            point.left / 100.0 * content_width,
            point.top / 100.0 * content_height,
        ),
        PositionUnit::Pixel => Point::new(point.left, point.top),
    }
}

pub fn resolve_in(point: &PointOfInterest, content: Size) -> Point {
    resolve(point, content.width, content.height)
}

/// Marker diameter in content pixels. Percent widths are relative to the content width.
pub fn resolve_extent(point: &PointOfInterest, content: Size) -> f64 {
    match point.unit {
        PositionUnit::Percent => point.width / 100.0 * content.width,
        PositionUnit::Pixel => point.width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_percent() {
        let point = PointOfInterest::new(1, "Museum", "museum").at(30.0, 20.0);
        assert_eq!(resolve(&point, 1000.0, 800.0), Point::new(300.0, 160.0));
        assert_eq!(
            resolve_in(&point, Size::new(1500.0, 900.0)),
            Point::new(450.0, 180.0)
        );
    }

    #[test]
    fn test_resolve_pixel_ignores_content() {
        let point = PointOfInterest::new(1, "Gate", "entrance")
            .at(412.0, 96.0)
            .with_unit(PositionUnit::Pixel);
        assert_eq!(resolve(&point, 1000.0, 800.0), Point::new(412.0, 96.0));
        assert_eq!(resolve(&point, 0.0, 0.0), Point::new(412.0, 96.0));
    }

    #[test]
    fn test_resolve_extent() {
        let percent = PointOfInterest::new(1, "Museum", "museum").with_width(5.0);
        assert_eq!(resolve_extent(&percent, Size::new(1000.0, 800.0)), 50.0);

        let pixel = PointOfInterest::new(2, "Gate", "entrance")
            .with_width(24.0)
            .with_unit(PositionUnit::Pixel);
        assert_eq!(resolve_extent(&pixel, Size::new(1000.0, 800.0)), 24.0);
    }
}
