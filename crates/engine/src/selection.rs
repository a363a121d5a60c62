use std::collections::{BTreeMap, BTreeSet};

use facetnav_adapter::{Dimension, Filter, FilterSet, ProductCondition};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// An inclusive numeric band selected on a range facet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    min: f64,
    max: f64,
}

impl RangeSelection {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min > max {
            return Err(EngineError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// The caller-supplied set of active selections, one entry per facet.
///
/// The engine never mutates a selection. Builders work against filter views
/// derived from [`SelectionState::to_filters`], so the state a caller hands
/// in is exactly the state it gets back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub price: Option<RangeSelection>,
    pub weight: Option<RangeSelection>,
    pub conditions: BTreeSet<ProductCondition>,
    /// Availability bucket keys, 0 (not available) and/or 1 (in stock).
    pub quantity: BTreeSet<u8>,
    pub manufacturers: BTreeSet<u32>,
    /// Attribute ids selected per attribute-group id.
    pub attributes: BTreeMap<u32, BTreeSet<u32>>,
    /// Feature-value ids selected per feature id.
    pub features: BTreeMap<u32, BTreeSet<u32>>,
    pub categories: BTreeSet<u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, range: RangeSelection) -> Self {
        self.price = Some(range);
        self
    }

    pub fn with_weight(mut self, range: RangeSelection) -> Self {
        self.weight = Some(range);
        self
    }

    pub fn with_condition(mut self, condition: ProductCondition) -> Self {
        self.conditions.insert(condition);
        self
    }

    pub fn with_quantity(mut self, bucket: u8) -> Self {
        self.quantity.insert(bucket);
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: u32) -> Self {
        self.manufacturers.insert(manufacturer);
        self
    }

    pub fn with_attribute(mut self, group: u32, attribute: u32) -> Self {
        self.attributes.entry(group).or_default().insert(attribute);
        self
    }

    pub fn with_feature_value(mut self, feature: u32, value: u32) -> Self {
        self.features.entry(feature).or_default().insert(value);
        self
    }

    pub fn with_category(mut self, category: u32) -> Self {
        self.categories.insert(category);
        self
    }

    /// True when the attribute id appears under any group's selection entry,
    /// not just its own group's.
    pub fn attribute_checked(&self, attribute: u32) -> bool {
        self.attributes.values().any(|ids| ids.contains(&attribute))
    }

    /// True when the feature-value id appears under any feature's selection
    /// entry.
    pub fn feature_value_checked(&self, value: u32) -> bool {
        self.features.values().any(|ids| ids.contains(&value))
    }

    /// Translate the selection into the constraint set the search index
    /// understands. Attribute and feature-value ids are unioned across their
    /// owning groups; a dimension never carries more than one filter.
    pub fn to_filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(range) = &self.price {
            filters.set(Dimension::PriceMin, Filter::AtLeast(range.min()));
            filters.set(Dimension::PriceMax, Filter::AtMost(range.max()));
        }
        if let Some(range) = &self.weight {
            filters.set(Dimension::Weight, Filter::Within(range.min(), range.max()));
        }
        if !self.conditions.is_empty() {
            filters.set(Dimension::Condition, Filter::Conditions(self.conditions.clone()));
        }
        if !self.quantity.is_empty() {
            let buckets = self.quantity.iter().map(|&b| u32::from(b)).collect();
            filters.set(Dimension::Quantity, Filter::AnyOf(buckets));
        }
        if !self.manufacturers.is_empty() {
            filters.set(Dimension::Manufacturer, Filter::AnyOf(self.manufacturers.clone()));
        }
        let attributes: BTreeSet<u32> = self.attributes.values().flatten().copied().collect();
        if !attributes.is_empty() {
            filters.set(Dimension::Attribute, Filter::AnyOf(attributes));
        }
        let feature_values: BTreeSet<u32> = self.features.values().flatten().copied().collect();
        if !feature_values.is_empty() {
            filters.set(Dimension::FeatureValue, Filter::AnyOf(feature_values));
        }
        if !self.categories.is_empty() {
            filters.set(Dimension::Category, Filter::AnyOf(self.categories.clone()));
        }
        filters
    }
}
