pub mod builder;
pub mod config;
pub mod constants;
pub mod focus;
pub mod geo;
pub mod geometry;
pub mod session;
pub mod viewport;
