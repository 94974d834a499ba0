use crate::core::config::FilteredPointPolicy;
use crate::data::{dataset::Dataset, poi::PointOfInterest};

/// Holds the active category filter.
///
/// Filtering never removes points from the scene: excluded markers are
/// dimmed so their transition can animate, and the policy decides whether
/// they still react to the pointer.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    category: Option<String>,
    policy: FilteredPointPolicy,
}

impl FilterEngine {
    pub fn new(policy: FilteredPointPolicy) -> Self {
        Self {
            category: None,
            policy,
        }
    }

    /// Selects a single category, or `None` to show everything
    pub fn set_filter(&mut self, category: Option<String>) {
        if self.category != category {
            log::debug!("filter changed: {:?} -> {:?}", self.category, category);
        }
        self.category = category;
    }

    pub fn clear(&mut self) {
        self.set_filter(None);
    }

    pub fn active(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn policy(&self) -> FilteredPointPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: FilteredPointPolicy) {
        self.policy = policy;
    }

    pub fn is_visible(&self, point: &PointOfInterest) -> bool {
        match &self.category {
            None => true,
            Some(category) => &point.category == category,
        }
    }

    /// Whether the point should respond to hover and select
    pub fn is_interactive(&self, point: &PointOfInterest) -> bool {
        match self.policy {
            FilteredPointPolicy::Inert => self.is_visible(point),
            FilteredPointPolicy::DimmedInteractive => true,
        }
    }

    /// Points matching the filter, in dataset order
    pub fn visible_points<'a>(
        &'a self,
        dataset: &'a Dataset,
    ) -> impl Iterator<Item = &'a PointOfInterest> + 'a {
        dataset.iter().filter(move |p| self.is_visible(p))
    }
}
