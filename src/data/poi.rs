use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a point of interest. Datasets use either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Int(i64),
    Str(String),
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Int(id) => write!(f, "{}", id),
            PointId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for PointId {
    fn from(id: i64) -> Self {
        PointId::Int(id)
    }
}

impl From<i32> for PointId {
    fn from(id: i32) -> Self {
        PointId::Int(id as i64)
    }
}

impl From<&str> for PointId {
    fn from(id: &str) -> Self {
        PointId::Str(id.to_string())
    }
}

impl From<String> for PointId {
    fn from(id: String) -> Self {
        PointId::Str(id)
    }
}

/// Unit in which a point's position and size hint were authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PositionUnit {
    /// Percentage of the content plane's width (left) and height (top)
    #[default]
    Percent,
    /// Absolute pixels in the unscaled content plane
    Pixel,
}

/// A named, categorised location on the map image.
///
/// Points are static configuration: they are loaded once and never mutated
/// during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: PointId,
    pub name: String,
    pub category: String,
    /// Horizontal position, measured from the content's left edge
    pub left: f64,
    /// Vertical position, measured from the content's top edge
    pub top: f64,
    /// Marker width hint, in the same unit as the position
    pub width: f64,
    pub unit: PositionUnit,
    /// Optional reference to an icon or image rendered for the marker
    pub asset: Option<String>,
}

impl PointOfInterest {
    pub fn new(id: impl Into<PointId>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            left: 0.0,
            top: 0.0,
            width: 0.0,
            unit: PositionUnit::Percent,
            asset: None,
        }
    }

    /// Position the point at `(left, top)`
    pub fn at(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_unit(mut self, unit: PositionUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id_untagged_serde() {
        let ids: Vec<PointId> = serde_json::from_str(r#"[1, "gate-north"]"#).unwrap();
        assert_eq!(ids, vec![PointId::Int(1), PointId::from("gate-north")]);
        assert_eq!(ids[0].to_string(), "1");
        assert_eq!(ids[1].to_string(), "gate-north");
    }

    #[test]
    fn test_point_builder() {
        let point = PointOfInterest::new(3, "Wall", "wall")
            .at(33.0, 66.0)
            .with_width(4.0)
            .with_asset("wall.png");

        assert_eq!(point.id, PointId::Int(3));
        assert_eq!(point.left, 33.0);
        assert_eq!(point.top, 66.0);
        assert_eq!(point.unit, PositionUnit::Percent);
        assert_eq!(point.asset.as_deref(), Some("wall.png"));
    }

    #[test]
    fn test_unit_names() {
        let unit: PositionUnit = serde_json::from_str(r#""pixel""#).unwrap();
        assert_eq!(unit, PositionUnit::Pixel);
    }
}
