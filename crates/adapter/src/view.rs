use crate::error::Result;
use crate::filter::{Dimension, Filter, FilterSet};
use crate::index::{KeyedValueCount, NumericField, SearchIndex, ValueCount};

/// A read-only view of a [`SearchIndex`] under a fixed set of constraints.
///
/// Views are cheap values: deriving one copies the filter set and borrows the
/// index, so a builder can layer exclusions and hard filters without touching
/// the state any other builder sees. Nothing is ever restored because nothing
/// shared is ever mutated.
#[derive(Debug)]
pub struct FilteredView<'a, I> {
    index: &'a I,
    filters: FilterSet,
}

impl<I> Clone for FilteredView<'_, I> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            filters: self.filters.clone(),
        }
    }
}

impl<'a, I: SearchIndex> FilteredView<'a, I> {
    pub fn new(index: &'a I, filters: FilterSet) -> Self {
        Self { index, filters }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Derive a view with the named dimensions' constraints removed.
    ///
    /// This is the self-exclusion primitive: a facet computing its own value
    /// distribution or bounds drops its own constraint while keeping every
    /// other active filter, so selecting a value never collapses the facet to
    /// the single visible choice already made.
    pub fn excluding(&self, dimensions: &[Dimension]) -> FilteredView<'a, I> {
        FilteredView {
            index: self.index,
            filters: self.filters.without(dimensions),
        }
    }

    /// Derive a view with one more constraint layered on top.
    pub fn with(&self, dimension: Dimension, filter: Filter) -> FilteredView<'a, I> {
        let mut filters = self.filters.clone();
        filters.set(dimension, filter);
        FilteredView {
            index: self.index,
            filters,
        }
    }

    pub fn count(&self) -> Result<u64> {
        self.index.count(&self.filters)
    }

    pub fn value_count(&self, dimension: Dimension) -> Result<Vec<ValueCount>> {
        self.index.value_count(&self.filters, dimension)
    }

    pub fn keyed_value_count(
        &self,
        dimension: Dimension,
        key: Dimension,
    ) -> Result<Vec<KeyedValueCount>> {
        self.index.keyed_value_count(&self.filters, dimension, key)
    }

    pub fn min_max(&self, field: NumericField) -> Result<(Option<f64>, Option<f64>)> {
        self.index.min_max(&self.filters, field)
    }
}
