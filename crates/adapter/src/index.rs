use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{Dimension, FilterSet};

/// One row of a grouped aggregation: a dimension value and how many matching
/// products carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: u32,
    pub count: u64,
}

/// A grouped aggregation row carrying an auxiliary key alongside the value.
/// Used when one query spans several owners, e.g. feature values keyed by
/// their feature id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedValueCount {
    pub value: u32,
    pub key: u32,
    pub count: u64,
}

/// Continuous product column a range facet can query bounds over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Price,
    Weight,
}

/// The count/aggregation executor the engine consumes.
///
/// Every operation takes the full set of active constraints by reference;
/// implementations hold no per-request filter state of their own, which keeps
/// derived views cheap and makes concurrent builders safe by construction.
pub trait SearchIndex {
    /// Total number of products matching the constraints.
    fn count(&self, filters: &FilterSet) -> Result<u64>;

    /// Grouped count over one dimension's values.
    fn value_count(&self, filters: &FilterSet, dimension: Dimension) -> Result<Vec<ValueCount>>;

    /// Grouped count over `dimension`, also reporting the `key` dimension's
    /// value for each row.
    fn keyed_value_count(
        &self,
        filters: &FilterSet,
        dimension: Dimension,
        key: Dimension,
    ) -> Result<Vec<KeyedValueCount>>;

    /// Bounds of a continuous column over the matching products, `(None, None)`
    /// when nothing matches.
    fn min_max(
        &self,
        filters: &FilterSet,
        field: NumericField,
    ) -> Result<(Option<f64>, Option<f64>)>;
}
