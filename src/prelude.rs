//! Prelude module for common mapspot types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapspot::prelude::*;`

pub use crate::core::{
    builder::SessionBuilder,
    config::{
        FilteredPointPolicy, FocusFrame, FocusOptions, InteractionOptions, LabelOptions,
        LabelPlacement, MapOptions, MapProfile, ViewportOptions,
    },
    focus::{plan_focus, FocusPlan, FocusPlanner},
    geo::{Point, Size},
    session::MapSession,
    viewport::{Transform, ViewportController},
};

pub use crate::data::{
    dataset::Dataset,
    poi::{PointId, PointOfInterest, PositionUnit},
};

pub use crate::input::{
    events::{EventHandled, InteractionEvent, MapInput},
    handler::InputHandler,
    state::{InteractionState, InteractionStateMachine},
};

pub use crate::layers::{
    animation::EasingType,
    filter::FilterEngine,
    marker::{LabelView, MarkerView},
    scene::{FilterOption, ListEntry, PopupView, SceneSnapshot},
};

pub use crate::surface::{
    animated::AnimatedSurface,
    traits::{PanZoomSurface, SurfaceElement},
};

pub use crate::traits::Configurable;

pub use crate::{Error as MapError, Result};

pub use std::time::Duration;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
