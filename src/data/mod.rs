pub mod dataset;
pub mod poi;

pub use dataset::Dataset;
pub use poi::{PointId, PointOfInterest, PositionUnit};
