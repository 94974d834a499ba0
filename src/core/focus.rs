use crate::core::config::{FocusFrame, FocusOptions};
use crate::core::geo::{Point, Size};
use crate::core::geometry;
use crate::core::viewport::Transform;
use crate::data::poi::PointOfInterest;

/// Computes the transform that places `point` at the middle of the container
/// at `target_scale`.
///
/// Returns `None` when either box has not been laid out yet, so callers can
/// skip the focus instead of issuing a transform built from zeros or NaNs.
pub fn plan_focus(
    point: &PointOfInterest,
    container: Size,
    content: Size,
    target_scale: f64,
) -> Option<Transform> {
    if !container.is_measurable() || !content.is_measurable() {
        return None;
    }
    if !(target_scale.is_finite() && target_scale > 0.0) {
        return None;
    }

    let position = geometry::resolve_in(point, content);
    let transform = Transform::new(
        container.width / 2.0 - position.x * target_scale,
        container.height / 2.0 - position.y * target_scale,
        target_scale,
    );
    transform.is_finite().then_some(transform)
}

/// A focus command ready to hand to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPlan {
    pub transform: Transform,
    pub duration_ms: u64,
    /// Container point the focused point lands on
    pub anchor: Point,
}

/// Applies the configured focus scale, duration and centering frame
#[derive(Debug, Clone, Default)]
pub struct FocusPlanner {
    options: FocusOptions,
}

impl FocusPlanner {
    pub fn new(options: FocusOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FocusOptions {
        &self.options
    }

    pub fn plan(
        &self,
        point: &PointOfInterest,
        container: Option<Size>,
        content: Option<Size>,
    ) -> Option<FocusPlan> {
        let content = content?;
        let frame = match self.options.frame {
            FocusFrame::Container => container?,
            FocusFrame::Content => content,
        };
        plan_focus(point, frame, content, self.options.target_scale).map(|transform| FocusPlan {
            transform,
            duration_ms: self.options.duration_ms,
            anchor: frame.center(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::poi::PositionUnit;

    fn museum() -> PointOfInterest {
        PointOfInterest::new(1, "Museum", "museum").at(30.0, 20.0)
    }

    #[test]
    fn test_plan_focus_reference_arithmetic() {
        let size = Size::new(1000.0, 800.0);
        let transform = plan_focus(&museum(), size, size, 3.0).unwrap();

        assert!((transform.translate_x - (500.0 - 300.0 * 3.0)).abs() < 1e-9);
        assert!((transform.translate_y - (400.0 - 160.0 * 3.0)).abs() < 1e-9);
        assert!((transform.translate_x + 400.0).abs() < 1e-9);
        assert!((transform.translate_y + 80.0).abs() < 1e-9);
        assert_eq!(transform.scale, 3.0);
    }

    #[test]
    fn test_plan_focus_centers_point() {
        let points = [
            museum(),
            PointOfInterest::new(2, "Corner", "wall").at(0.0, 100.0),
            PointOfInterest::new(3, "Gate", "entrance")
                .at(1240.0, 35.5)
                .with_unit(PositionUnit::Pixel),
        ];
        let sizes = [
            (Size::new(1000.0, 800.0), Size::new(1000.0, 800.0)),
            (Size::new(1200.0, 700.0), Size::new(1500.0, 900.0)),
            (Size::new(333.0, 1021.0), Size::new(640.0, 480.0)),
        ];

        for point in &points {
            for (container, content) in sizes {
                for scale in [0.5, 1.0, 2.0, 3.0, 7.25] {
                    let transform = plan_focus(point, container, content, scale).unwrap();
                    let on_screen = transform.apply(geometry::resolve_in(point, content));
                    assert!((on_screen.x - container.width / 2.0).abs() < 1e-6);
                    assert!((on_screen.y - container.height / 2.0).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_plan_focus_skips_unmeasured() {
        let size = Size::new(1000.0, 800.0);
        assert!(plan_focus(&museum(), Size::new(0.0, 800.0), size, 3.0).is_none());
        assert!(plan_focus(&museum(), size, Size::default(), 3.0).is_none());
        assert!(plan_focus(&museum(), size, Size::new(f64::NAN, 1.0), 3.0).is_none());
        assert!(plan_focus(&museum(), size, size, 0.0).is_none());
    }

    #[test]
    fn test_planner_frames() {
        let container = Size::new(1200.0, 700.0);
        let content = Size::new(1500.0, 900.0);

        let in_container = FocusPlanner::new(FocusOptions {
            target_scale: 2.0,
            ..FocusOptions::default()
        });
        let plan = in_container
            .plan(&museum(), Some(container), Some(content))
            .unwrap();
        let centered = plan.transform.apply(Point::new(450.0, 180.0));
        assert!((centered.x - 600.0).abs() < 1e-9);
        assert!((centered.y - 350.0).abs() < 1e-9);

        let in_content = FocusPlanner::new(FocusOptions {
            frame: FocusFrame::Content,
            ..FocusOptions::default()
        });
        // Content frame does not need the container at all
        let plan = in_content.plan(&museum(), None, Some(content)).unwrap();
        let centered = plan.transform.apply(Point::new(450.0, 180.0));
        assert!((centered.x - 750.0).abs() < 1e-9);
        assert!((centered.y - 450.0).abs() < 1e-9);
        assert_eq!(plan.anchor, Point::new(750.0, 450.0));
    }

    #[test]
    fn test_planner_without_measurements() {
        let planner = FocusPlanner::default();
        assert!(planner.plan(&museum(), None, Some(Size::new(10.0, 10.0))).is_none());
        assert!(planner.plan(&museum(), Some(Size::new(10.0, 10.0)), None).is_none());
    }
}
