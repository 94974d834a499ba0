//! Loading and indexing of the static point-of-interest dataset
//!
//! A dataset file looks like:
//!
//! ```json
//! {
//!   "unit": "percent",
//!   "options": { "focus": { "target_scale": 3.0 } },
//!   "points": [
//!     { "id": 1, "name": "Museum", "category": "museum", "left": 30, "top": 20, "width": 5 }
//!   ]
//! }
//! ```
//!
//! `unit` is the default for every point and may be overridden per point.

use crate::core::config::MapOptions;
use crate::data::poi::{PointId, PointOfInterest, PositionUnit};
use crate::prelude::{HashMap, HashSet};
use crate::{MapError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    unit: PositionUnit,
    #[serde(default)]
    options: Option<MapOptions>,
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    id: PointId,
    name: String,
    category: String,
    left: f64,
    top: f64,
    width: f64,
    #[serde(default)]
    unit: Option<PositionUnit>,
    #[serde(default, alias = "icon")]
    asset: Option<String>,
}

impl RawPoint {
    fn into_point(self, default_unit: PositionUnit) -> PointOfInterest {
        PointOfInterest {
            id: self.id,
            name: self.name,
            category: self.category,
            left: self.left,
            top: self.top,
            width: self.width,
            unit: self.unit.unwrap_or(default_unit),
            asset: self.asset,
        }
    }
}

/// Ordered, id-indexed set of points. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<PointOfInterest>,
    index: HashMap<PointId, usize>,
    options: Option<MapOptions>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate ids
    pub fn new(points: Vec<PointOfInterest>) -> Result<Self> {
        let mut index = HashMap::default();
        for (position, point) in points.iter().enumerate() {
            if index.insert(point.id.clone(), position).is_some() {
                return Err(MapError::DuplicateId(point.id.to_string()));
            }
        }
        Ok(Self {
            points,
            index,
            options: None,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "loaded {} points in {} categories from {}",
            dataset.len(),
            dataset.categories().len(),
            path.display()
        );
        Ok(dataset)
    }

    fn from_raw(raw: RawDataset) -> Result<Self> {
        let unit = raw.unit;
        let points = raw
            .points
            .into_iter()
            .map(|p| p.into_point(unit))
            .collect();
        let mut dataset = Self::new(points)?;
        if let Some(options) = &raw.options {
            options.validate()?;
        }
        dataset.options = raw.options;
        Ok(dataset)
    }

    pub fn get(&self, id: &PointId) -> Option<&PointOfInterest> {
        self.index.get(id).map(|&i| &self.points[i])
    }

    pub fn contains(&self, id: &PointId) -> bool {
        self.index.contains_key(id)
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::default();
        self.points
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Options block carried by the dataset file, if any
    pub fn options(&self) -> Option<&MapOptions> {
        self.options.as_ref()
    }
}
