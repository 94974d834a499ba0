use crate::core::geo::Point;
use crate::data::poi::PointId;
use serde::{Deserialize, Serialize};

/// Pointer gestures aimed at a single point of interest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// Pointer entered the marker's hit region
    PointerEnter(PointId),
    /// Pointer left the marker's hit region
    PointerLeave(PointId),
    /// Marker or list entry was clicked
    Select(PointId),
}

impl InteractionEvent {
    pub fn point_id(&self) -> &PointId {
        match self {
            InteractionEvent::PointerEnter(id)
            | InteractionEvent::PointerLeave(id)
            | InteractionEvent::Select(id) => id,
        }
    }
}

/// Everything the presentation layer can send to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapInput {
    Point(InteractionEvent),
    /// Filter button; `None` is the "all" button
    SetFilter(Option<String>),
    ZoomIn,
    ZoomOut,
    ResetView,
    /// Wheel or pinch zoom anchored at `position` (container coordinates)
    Wheel { position: Point, notches: f64 },
    /// The surface finished a drag or pinch and reports its new transform
    GestureEnd,
    DismissPopup,
}

impl From<InteractionEvent> for MapInput {
    fn from(event: InteractionEvent) -> Self {
        MapInput::Point(event)
    }
}

/// Whether an input was acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl From<bool> for EventHandled {
    fn from(handled: bool) -> Self {
        if handled {
            EventHandled::Handled
        } else {
            EventHandled::NotHandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id_accessor() {
        let event = InteractionEvent::PointerLeave(PointId::Int(7));
        assert_eq!(event.point_id(), &PointId::Int(7));
    }

    #[test]
    fn test_handled_from_bool() {
        assert_eq!(EventHandled::from(true), EventHandled::Handled);
        assert_eq!(EventHandled::from(false), EventHandled::NotHandled);
    }
}
