//! Session builder for fluent configuration
//!
//! Options are layered: the explicit profile if one was given, otherwise the
//! dataset's own options block, otherwise the defaults. Individual overrides
//! are applied last.

use crate::{
    core::{
        config::{FilteredPointPolicy, FocusFrame, LabelPlacement, MapOptions, MapProfile},
        session::MapSession,
    },
    data::dataset::Dataset,
    surface::traits::PanZoomSurface,
    MapError, Result,
};

#[derive(Default)]
pub struct SessionBuilder {
    dataset: Option<Dataset>,
    profile: Option<MapProfile>,
    filtered_policy: Option<FilteredPointPolicy>,
    focus_scale: Option<f64>,
    focus_frame: Option<FocusFrame>,
    scale_limits: Option<(f64, f64)>,
    label_placement: Option<LabelPlacement>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Set the option profile, taking precedence over the dataset's options
    pub fn with_profile(mut self, profile: MapProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_options(self, options: MapOptions) -> Self {
        self.with_profile(MapProfile::Custom(options))
    }

    pub fn with_filtered_policy(mut self, policy: FilteredPointPolicy) -> Self {
        self.filtered_policy = Some(policy);
        self
    }

    pub fn with_focus_scale(mut self, scale: f64) -> Self {
        self.focus_scale = Some(scale);
        self
    }

    pub fn with_focus_frame(mut self, frame: FocusFrame) -> Self {
        self.focus_frame = Some(frame);
        self
    }

    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.scale_limits = Some((min_scale, max_scale));
        self
    }

    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.label_placement = Some(placement);
        self
    }

    /// Resolve the final options without building a session
    pub fn resolve_options(&self) -> MapOptions {
        let mut options = match (&self.profile, &self.dataset) {
            (Some(profile), _) => profile.resolve(),
            (None, Some(dataset)) => dataset.options().cloned().unwrap_or_default(),
            (None, None) => MapOptions::default(),
        };

        if let Some(policy) = self.filtered_policy {
            options.interaction.filtered_policy = policy;
        }
        if let Some(scale) = self.focus_scale {
            options.focus.target_scale = scale;
        }
        if let Some(frame) = self.focus_frame {
            options.focus.frame = frame;
        }
        if let Some((min_scale, max_scale)) = self.scale_limits {
            options.viewport.min_scale = min_scale;
            options.viewport.max_scale = max_scale;
        }
        if let Some(placement) = self.label_placement {
            options.label.placement = placement;
        }
        options
    }

    /// Build an unattached session; commands are dropped until a surface is attached
    pub fn build<S: PanZoomSurface>(self) -> Result<MapSession<S>> {
        let options = self.resolve_options();
        let dataset = self
            .dataset
            .ok_or_else(|| MapError::InvalidConfig("session requires a dataset".to_string()))?;
        MapSession::new(dataset, options)
    }

    pub fn build_attached<S: PanZoomSurface>(self, surface: S) -> Result<MapSession<S>> {
        let mut session = self.build()?;
        session.attach_surface(surface);
        Ok(session)
    }
}
