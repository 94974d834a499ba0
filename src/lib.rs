//! # mapspot
//!
//! Interaction engine for zoomable maps of named points of interest drawn
//! over a static image.
//!
//! The crate owns the coordinate model, the focus math that centers a point
//! at a target zoom, and the filter/hover/selection state. Drawing is left to
//! the host UI, which drives a [`MapSession`] with events and renders the
//! [`SceneSnapshot`](layers::scene::SceneSnapshot) it returns.

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod surface;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::SessionBuilder,
    config::{MapOptions, MapProfile},
    focus::{plan_focus, FocusPlanner},
    geo::{Point, Size},
    geometry::resolve,
    session::MapSession,
    viewport::{Transform, ViewportController},
};

pub use data::{
    dataset::Dataset,
    poi::{PointId, PointOfInterest, PositionUnit},
};

pub use input::{events::InteractionEvent, events::MapInput, state::InteractionStateMachine};

pub use layers::{filter::FilterEngine, scene::SceneSnapshot};

pub use surface::{animated::AnimatedSurface, traits::PanZoomSurface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate point id: {0}")]
    DuplicateId(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initialise `env_logger` for binaries and examples built with the `debug` feature
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("mapspot=debug"))
        .try_init();
}
