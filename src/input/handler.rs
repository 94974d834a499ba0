use crate::core::{geo::Point, viewport::Transform};
use crate::data::poi::PointId;
use crate::input::events::InteractionEvent;
use crate::layers::marker::{hit_test, MarkerView};

/// Turns raw pointer positions into enter/leave/select events.
///
/// Hosts that get per-marker enter and leave callbacks from their UI toolkit
/// can feed those straight into the session; hosts that only see pointer
/// coordinates run them through this adapter first.
#[derive(Debug, Default)]
pub struct InputHandler {
    under_pointer: Option<PointId>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn under_pointer(&self) -> Option<&PointId> {
        self.under_pointer.as_ref()
    }

    /// Pointer moved to `position` in container coordinates
    pub fn pointer_moved(
        &mut self,
        markers: &[MarkerView],
        transform: &Transform,
        position: Point,
    ) -> Vec<InteractionEvent> {
        let hit = hit_test(markers, transform.invert(position)).map(|m| m.id.clone());
        self.retarget(hit)
    }

    /// Pointer left the container entirely
    pub fn pointer_exited(&mut self) -> Vec<InteractionEvent> {
        self.retarget(None)
    }

    /// Click at `position`; selects the marker under the pointer, if any
    pub fn clicked(
        &self,
        markers: &[MarkerView],
        transform: &Transform,
        position: Point,
    ) -> Option<InteractionEvent> {
        hit_test(markers, transform.invert(position)).map(|m| InteractionEvent::Select(m.id.clone()))
    }

    fn retarget(&mut self, hit: Option<PointId>) -> Vec<InteractionEvent> {
        if hit == self.under_pointer {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.under_pointer.take() {
            events.push(InteractionEvent::PointerLeave(previous));
        }
        if let Some(id) = hit {
            events.push(InteractionEvent::PointerEnter(id.clone()));
            self.under_pointer = Some(id);
        }
        events
    }
}
