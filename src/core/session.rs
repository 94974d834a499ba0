use crate::core::{
    config::{FilteredPointPolicy, MapOptions},
    focus::FocusPlanner,
    geo::Point,
    viewport::ViewportController,
};
use crate::data::{
    dataset::Dataset,
    poi::{PointId, PointOfInterest},
};
use crate::input::{
    events::{EventHandled, InteractionEvent, MapInput},
    state::{Effect, InteractionState, InteractionStateMachine},
};
use crate::layers::{
    filter::FilterEngine,
    marker::{build_label, build_markers},
    scene::{FilterOption, ListEntry, PopupView, SceneSnapshot},
};
use crate::surface::traits::{PanZoomSurface, SurfaceElement};
use crate::traits::Configurable;
use crate::Result;

/// One user's interactive view of a dataset.
///
/// The session is the single owner of the filter, the hover/selection state
/// and the viewport; UI adapters call its operations and render the
/// `SceneSnapshot` it produces.
pub struct MapSession<S: PanZoomSurface> {
    dataset: Dataset,
    options: MapOptions,
    filter: FilterEngine,
    interaction: InteractionStateMachine,
    planner: FocusPlanner,
    viewport: ViewportController<S>,
}

impl<S: PanZoomSurface> MapSession<S> {
    pub fn new(dataset: Dataset, options: MapOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            filter: FilterEngine::new(options.interaction.filtered_policy),
            interaction: InteractionStateMachine::new(options.interaction.show_popup_on_select),
            planner: FocusPlanner::new(options.focus.clone()),
            viewport: ViewportController::new(options.viewport.clone()),
            dataset,
            options,
        })
    }

    /// Connects the pan/zoom primitive once the host has created it
    pub fn attach_surface(&mut self, surface: S) {
        self.viewport.attach(surface);
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.viewport.detach()
    }

    pub fn surface(&self) -> Option<&S> {
        self.viewport.surface()
    }

    /// Host access for stepping animations, resizing and raw gestures
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.viewport.surface_mut()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn viewport(&self) -> &ViewportController<S> {
        &self.viewport
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn interaction(&self) -> &InteractionState {
        self.interaction.state()
    }

    pub fn hovered(&self) -> Option<&PointId> {
        self.interaction.hovered()
    }

    pub fn active(&self) -> Option<&PointId> {
        self.interaction.active()
    }

    pub fn popup_visible(&self) -> bool {
        self.interaction.popup_visible()
    }

    pub fn visible_points(&self) -> Vec<&PointOfInterest> {
        self.filter.visible_points(&self.dataset).collect()
    }

    pub fn pointer_enter(&mut self, id: PointId) -> EventHandled {
        self.handle_point_event(InteractionEvent::PointerEnter(id))
    }

    pub fn pointer_leave(&mut self, id: PointId) -> EventHandled {
        self.handle_point_event(InteractionEvent::PointerLeave(id))
    }

    /// Marks the point active and focuses the viewport on it. The focus is
    /// skipped, not the selection, when the surface has no layout yet.
    pub fn select(&mut self, id: PointId) -> EventHandled {
        self.handle_point_event(InteractionEvent::Select(id))
    }

    pub fn set_filter(&mut self, category: Option<String>) {
        self.filter.set_filter(category);
        let stale_hover = self
            .interaction
            .hovered()
            .and_then(|id| self.dataset.get(id))
            .is_some_and(|point| !self.filter.is_interactive(point));
        if stale_hover {
            self.interaction.clear_hover();
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.interaction.dismiss_popup();
    }

    pub fn zoom_in(&mut self) -> EventHandled {
        self.viewport.zoom_in().into()
    }

    pub fn zoom_out(&mut self) -> EventHandled {
        self.viewport.zoom_out().into()
    }

    pub fn reset_view(&mut self) -> EventHandled {
        self.viewport.reset().into()
    }

    pub fn wheel_zoom(&mut self, position: Point, notches: f64) -> EventHandled {
        self.viewport.zoom_at(position, notches).into()
    }

    /// Centers the viewport on `id` at the configured focus scale
    pub fn focus_on(&mut self, id: &PointId) -> bool {
        let Some(point) = self.dataset.get(id) else {
            log::debug!("focus requested for unknown point {}", id);
            return false;
        };
        let container = self.viewport.measure(SurfaceElement::Container);
        let content = self.viewport.measure(SurfaceElement::Content);
        match self.planner.plan(point, container, content) {
            Some(plan) => self.viewport.focus(&plan),
            None => {
                log::debug!("surface not laid out, skipping focus on {}", id);
                false
            }
        }
    }

    /// Single entry point for presentation-layer events
    pub fn handle_input(&mut self, input: MapInput) -> EventHandled {
        match input {
            MapInput::Point(event) => self.handle_point_event(event),
            MapInput::SetFilter(category) => {
                self.set_filter(category);
                EventHandled::Handled
            }
            MapInput::ZoomIn => self.zoom_in(),
            MapInput::ZoomOut => self.zoom_out(),
            MapInput::ResetView => self.reset_view(),
            MapInput::Wheel { position, notches } => self.wheel_zoom(position, notches),
            MapInput::GestureEnd => {
                self.viewport.sync_from_surface();
                EventHandled::Handled
            }
            MapInput::DismissPopup => {
                self.dismiss_popup();
                EventHandled::Handled
            }
        }
    }

    fn handle_point_event(&mut self, event: InteractionEvent) -> EventHandled {
        let Some(point) = self.dataset.get(event.point_id()) else {
            log::debug!("ignoring {:?}: unknown point", event);
            return EventHandled::NotHandled;
        };
        // Leaves are always honoured so a hover can never dangle
        let is_leave = matches!(event, InteractionEvent::PointerLeave(_));
        if !is_leave && !self.filter.is_interactive(point) {
            log::debug!("ignoring {:?}: point is filtered out", event);
            return EventHandled::NotHandled;
        }

        if let Some(Effect::Focus(id)) = self.interaction.apply(&event) {
            self.focus_on(&id);
        }
        EventHandled::Handled
    }

    /// Derives the render state for the current frame
    pub fn snapshot(&self) -> SceneSnapshot {
        let content = self
            .viewport
            .measure(SurfaceElement::Content)
            .unwrap_or_default();
        let state = self.interaction.state();

        let list = self
            .filter
            .visible_points(&self.dataset)
            .map(|p| ListEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                active: state.is_active(&p.id),
            })
            .collect();

        let active_filter = self.filter.active();
        let filters = std::iter::once(FilterOption {
            category: None,
            selected: active_filter.is_none(),
        })
        .chain(self.dataset.categories().into_iter().map(|c| FilterOption {
            category: Some(c.to_string()),
            selected: active_filter == Some(c),
        }))
        .collect();

        let popup = if state.popup_visible {
            state
                .active
                .as_ref()
                .and_then(|id| self.dataset.get(id))
                .map(|p| PopupView {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    category: p.category.clone(),
                })
        } else {
            None
        };

        SceneSnapshot {
            transform: self.viewport.transform(),
            displayed: self.viewport.displayed_transform(),
            markers: build_markers(
                &self.dataset,
                &self.filter,
                state,
                content,
                self.options.interaction.dimmed_opacity,
            ),
            label: build_label(&self.dataset, state, content, self.options.label.placement),
            list,
            filters,
            popup,
        }
    }

    pub fn filtered_policy(&self) -> FilteredPointPolicy {
        self.filter.policy()
    }
}

impl<S: PanZoomSurface> Configurable for MapSession<S> {
    type Config = MapOptions;

    fn config(&self) -> &MapOptions {
        &self.options
    }

    fn set_config(&mut self, config: MapOptions) -> Result<()> {
        config.validate()?;
        self.filter.set_policy(config.interaction.filtered_policy);
        self.interaction
            .set_show_popup_on_select(config.interaction.show_popup_on_select);
        self.planner = FocusPlanner::new(config.focus.clone());
        self.viewport.set_options(config.viewport.clone());
        self.options = config;
        Ok(())
    }

    fn validate_config(config: &MapOptions) -> Result<()> {
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FocusFrame;
    use crate::core::geo::Size;
    use crate::surface::animated::AnimatedSurface;

    fn session() -> MapSession<AnimatedSurface> {
        let dataset = Dataset::new(vec![
            PointOfInterest::new(1, "Museum", "museum").at(30.0, 20.0).with_width(4.0),
            PointOfInterest::new(2, "Wall", "wall").at(60.0, 50.0).with_width(4.0),
        ])
        .unwrap();
        let mut session = MapSession::new(dataset, MapOptions::default()).unwrap();
        session.attach_surface(AnimatedSurface::new(
            Size::new(1000.0, 800.0),
            Size::new(1000.0, 800.0),
        ));
        session
    }

    #[test]
    fn test_update_config_switches_policy_and_focus() {
        let mut session = session();
        session
            .update_config(|c| {
                c.interaction.filtered_policy = FilteredPointPolicy::DimmedInteractive;
                c.focus.target_scale = 2.0;
                c.focus.frame = FocusFrame::Container;
            })
            .unwrap();

        assert_eq!(session.filtered_policy(), FilteredPointPolicy::DimmedInteractive);
        session.set_filter(Some("wall".to_string()));
        assert_eq!(session.select(PointId::Int(1)), EventHandled::Handled);
        assert_eq!(session.viewport().transform().scale, 2.0);
    }

    #[test]
    fn test_update_config_rejects_invalid() {
        let mut session = session();
        let result = session.update_config(|c| c.viewport.min_scale = -1.0);
        assert!(result.is_err());
        assert_eq!(session.config().viewport.min_scale, 1.0);
    }

    #[test]
    fn test_popup_can_be_disabled() {
        let mut session = session();
        session
            .update_config(|c| c.interaction.show_popup_on_select = false)
            .unwrap();
        session.select(PointId::Int(2));

        assert_eq!(session.active(), Some(&PointId::Int(2)));
        assert!(!session.popup_visible());
        assert!(session.snapshot().popup.is_none());
    }
}
