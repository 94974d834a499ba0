use crate::core::viewport::Transform;
use crate::data::poi::PointId;
use crate::layers::marker::{LabelView, MarkerView};

/// Entry in the side list of filtered points
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: PointId,
    pub name: String,
    pub active: bool,
}

/// A filter button. `category: None` is the "all" button.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub category: Option<String>,
    pub selected: bool,
}

/// Detail popup for the active point
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub id: PointId,
    pub name: String,
    pub category: String,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    /// Transform the viewport is at or heading to
    pub transform: Transform,
    /// Transform on screen right now, mid-animation included. Hit testing and
    /// drawing use this one.
    pub displayed: Transform,
    /// Every point, in dataset order; filtered-out ones are dimmed, not dropped
    pub markers: Vec<MarkerView>,
    pub label: Option<LabelView>,
    pub list: Vec<ListEntry>,
    pub filters: Vec<FilterOption>,
    pub popup: Option<PopupView>,
}

impl SceneSnapshot {
    pub fn marker(&self, id: &PointId) -> Option<&MarkerView> {
        self.markers.iter().find(|m| &m.id == id)
    }

    pub fn selected_filter(&self) -> Option<&FilterOption> {
        self.filters.iter().find(|f| f.selected)
    }
}
