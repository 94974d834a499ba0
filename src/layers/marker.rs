use crate::core::{
    config::LabelPlacement,
    constants::MIN_HIT_RADIUS,
    geo::{Point, Size},
    geometry,
    viewport::Transform,
};
use crate::data::{dataset::Dataset, poi::PointId};
use crate::input::state::InteractionState;
use crate::layers::filter::FilterEngine;

/// Render state for one marker, in content-plane coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: PointId,
    pub center: Point,
    pub diameter: f64,
    pub opacity: f32,
    /// Matches the active filter
    pub visible: bool,
    /// Responds to hover and select
    pub interactive: bool,
    pub hovered: bool,
    pub active: bool,
    pub asset: Option<String>,
}

impl MarkerView {
    /// Active markers pulse to stand out
    pub fn pulsing(&self) -> bool {
        self.active
    }

    pub fn screen_center(&self, transform: &Transform) -> Point {
        transform.apply(self.center)
    }

    /// Hit radius in content pixels; tiny or zero-width markers stay clickable
    pub fn hit_radius(&self) -> f64 {
        (self.diameter / 2.0).max(MIN_HIT_RADIUS)
    }

    pub fn contains(&self, content_point: Point) -> bool {
        self.center.distance_to(&content_point) <= self.hit_radius()
    }
}

/// Hover label anchored at a marker
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub id: PointId,
    pub text: String,
    pub anchor: Point,
    pub placement: LabelPlacement,
}

impl LabelView {
    /// Offset of the label box from its anchor, as fractions of the box's own
    /// width and height
    pub fn offset_fraction(&self) -> (f64, f64) {
        match self.placement {
            LabelPlacement::Above => (-0.5, -1.3),
            LabelPlacement::Right => (1.1, -0.5),
        }
    }
}

pub fn build_markers(
    dataset: &Dataset,
    filter: &FilterEngine,
    interaction: &InteractionState,
    content: Size,
    dimmed_opacity: f32,
) -> Vec<MarkerView> {
    dataset
        .iter()
        .map(|point| {
            let visible = filter.is_visible(point);
            MarkerView {
                id: point.id.clone(),
                center: geometry::resolve_in(point, content),
                diameter: geometry::resolve_extent(point, content),
                opacity: if visible { 1.0 } else { dimmed_opacity },
                visible,
                interactive: filter.is_interactive(point),
                hovered: interaction.is_hovered(&point.id),
                active: interaction.is_active(&point.id),
                asset: point.asset.clone(),
            }
        })
        .collect()
}

pub fn build_label(
    dataset: &Dataset,
    interaction: &InteractionState,
    content: Size,
    placement: LabelPlacement,
) -> Option<LabelView> {
    let point = dataset.get(interaction.hovered.as_ref()?)?;
    Some(LabelView {
        id: point.id.clone(),
        text: point.name.clone(),
        anchor: geometry::resolve_in(point, content),
        placement,
    })
}

/// Topmost interactive marker under `content_point`. Later markers are drawn
/// above earlier ones.
pub fn hit_test(markers: &[MarkerView], content_point: Point) -> Option<&MarkerView> {
    markers
        .iter()
        .rev()
        .find(|m| m.interactive && m.contains(content_point))
}
