use crate::data::poi::PointId;
use crate::input::events::InteractionEvent;

/// Hover and selection state. The two flags are independent: a point can be
/// hovered and active at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: Option<PointId>,
    pub active: Option<PointId>,
    /// Detail popup for the active point is showing
    pub popup_visible: bool,
}

impl InteractionState {
    pub fn is_hovered(&self, id: &PointId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn is_active(&self, id: &PointId) -> bool {
        self.active.as_ref() == Some(id)
    }
}

/// Side effects requested by a transition, carried out by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Center and zoom the viewport on the point
    Focus(PointId),
}

/// Computes the next state for `event`. Pure: the caller decides what to do
/// with the returned effect.
pub fn transition(
    state: &InteractionState,
    event: &InteractionEvent,
    show_popup_on_select: bool,
) -> (InteractionState, Option<Effect>) {
    let mut next = state.clone();
    let effect = match event {
        InteractionEvent::PointerEnter(id) => {
            next.hovered = Some(id.clone());
            None
        }
        InteractionEvent::PointerLeave(id) => {
            // A leave for a point other than the hovered one is stale
            if next.hovered.as_ref() == Some(id) {
                next.hovered = None;
            }
            None
        }
        InteractionEvent::Select(id) => {
            next.active = Some(id.clone());
            if show_popup_on_select {
                next.popup_visible = true;
            }
            Some(Effect::Focus(id.clone()))
        }
    };
    (next, effect)
}

/// Owns the interaction state for the lifetime of a session
#[derive(Debug, Clone)]
pub struct InteractionStateMachine {
    state: InteractionState,
    show_popup_on_select: bool,
}

impl Default for InteractionStateMachine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InteractionStateMachine {
    pub fn new(show_popup_on_select: bool) -> Self {
        Self {
            state: InteractionState::default(),
            show_popup_on_select,
        }
    }

    pub fn set_show_popup_on_select(&mut self, show: bool) {
        self.show_popup_on_select = show;
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn hovered(&self) -> Option<&PointId> {
        self.state.hovered.as_ref()
    }

    pub fn active(&self) -> Option<&PointId> {
        self.state.active.as_ref()
    }

    pub fn popup_visible(&self) -> bool {
        self.state.popup_visible
    }

    pub fn apply(&mut self, event: &InteractionEvent) -> Option<Effect> {
        let (next, effect) = transition(&self.state, event, self.show_popup_on_select);
        self.state = next;
        effect
    }

    pub fn pointer_enter(&mut self, id: PointId) {
        self.apply(&InteractionEvent::PointerEnter(id));
    }

    pub fn pointer_leave(&mut self, id: PointId) {
        self.apply(&InteractionEvent::PointerLeave(id));
    }

    pub fn select(&mut self, id: PointId) -> Option<Effect> {
        self.apply(&InteractionEvent::Select(id))
    }

    /// Hides the detail popup; the point stays active
    pub fn dismiss_popup(&mut self) {
        self.state.popup_visible = false;
    }

    /// Drops a hover that no longer refers to an interactive point
    pub fn clear_hover(&mut self) {
        self.state.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> PointId {
        PointId::Int(n)
    }

    #[test]
    fn test_enter_then_leave() {
        let mut machine = InteractionStateMachine::default();
        machine.pointer_enter(id(1));
        assert_eq!(machine.hovered(), Some(&id(1)));

        machine.pointer_leave(id(1));
        assert_eq!(machine.hovered(), None);
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        let mut machine = InteractionStateMachine::default();
        machine.pointer_enter(id(1));
        machine.pointer_enter(id(2));
        machine.pointer_leave(id(1));

        assert_eq!(machine.hovered(), Some(&id(2)));
    }

    #[test]
    fn test_select_keeps_hover() {
        let mut machine = InteractionStateMachine::default();
        machine.pointer_enter(id(3));

        let effect = machine.select(id(1));
        assert_eq!(effect, Some(Effect::Focus(id(1))));
        assert_eq!(machine.active(), Some(&id(1)));
        assert_eq!(machine.hovered(), Some(&id(3)));
        assert!(machine.popup_visible());
    }

    #[test]
    fn test_active_survives_hover_elsewhere() {
        let mut machine = InteractionStateMachine::default();
        machine.select(id(1));
        machine.pointer_enter(id(2));
        machine.pointer_leave(id(2));

        assert_eq!(machine.active(), Some(&id(1)));
        assert!(machine.state().is_active(&id(1)));
        assert!(!machine.state().is_hovered(&id(2)));
    }

    #[test]
    fn test_hovered_and_active_together() {
        let mut machine = InteractionStateMachine::default();
        machine.pointer_enter(id(4));
        machine.select(id(4));

        assert!(machine.state().is_hovered(&id(4)));
        assert!(machine.state().is_active(&id(4)));
    }

    #[test]
    fn test_transition_is_pure() {
        let state = InteractionState::default();
        let (next, effect) = transition(&state, &InteractionEvent::Select(id(9)), false);

        assert_eq!(state, InteractionState::default());
        assert_eq!(next.active, Some(id(9)));
        assert!(!next.popup_visible);
        assert_eq!(effect, Some(Effect::Focus(id(9))));
    }

    #[test]
    fn test_dismiss_popup_keeps_active() {
        let mut machine = InteractionStateMachine::default();
        machine.select(id(1));
        machine.dismiss_popup();

        assert!(!machine.popup_visible());
        assert_eq!(machine.active(), Some(&id(1)));
    }
}
