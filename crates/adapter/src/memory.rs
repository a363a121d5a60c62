use std::collections::{BTreeMap, BTreeSet, HashMap};

use facetnav_catalog::CategoryNode;

use crate::error::{AdapterError, Result};
use crate::filter::{Dimension, Filter, FilterSet};
use crate::index::{KeyedValueCount, NumericField, SearchIndex, ValueCount};
use crate::record::ProductRecord;

/// Category-table row: nested-set coordinates plus the customer groups the
/// category is visible to.
#[derive(Debug, Clone)]
struct CategoryEntry {
    node: CategoryNode,
    groups: BTreeSet<u32>,
}

/// Scan-based [`SearchIndex`] over in-memory product records.
///
/// The reference executor for tests and embedders with small catalogs.
/// Product dimensions are evaluated against the record itself. Category-side
/// dimensions (`CategoryLeft`/`CategoryRight`/`CategoryDepth`,
/// `CustomerGroup`) are evaluated against the registered category table: a
/// record passes when at least one of its categories satisfies all of them
/// together, and a `Category` aggregation only counts categories that pass.
///
/// The `Quantity` dimension is the availability bucket (0 when the tracked
/// quantity is zero, 1 otherwise), not the raw quantity value.
///
/// Value filters restrict the matching population only; enumeration lists
/// every value the matching products carry, restricted by the owner
/// dimension's filter (`AttributeGroup` for attributes, `Feature` for
/// feature values) when one is active.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    products: Vec<ProductRecord>,
    categories: HashMap<u32, CategoryEntry>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: ProductRecord) -> Self {
        self.products.push(product);
        self
    }

    /// Register a category's nested-set coordinates and visibility groups.
    pub fn with_category(
        mut self,
        node: CategoryNode,
        groups: impl IntoIterator<Item = u32>,
    ) -> Self {
        self.categories.insert(
            node.id,
            CategoryEntry {
                node,
                groups: groups.into_iter().collect(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching<'a>(&'a self, filters: &'a FilterSet) -> impl Iterator<Item = &'a ProductRecord> {
        self.products.iter().filter(|p| self.matches(p, filters))
    }

    fn matches(&self, product: &ProductRecord, filters: &FilterSet) -> bool {
        for (dimension, filter) in filters.iter() {
            if dimension.is_category_side() {
                continue;
            }
            if !matches_product(product, *dimension, filter) {
                return false;
            }
        }
        if filters.has_category_side() {
            return product
                .categories
                .iter()
                .any(|id| self.category_passes(*id, filters));
        }
        true
    }

    fn category_passes(&self, id: u32, filters: &FilterSet) -> bool {
        let Some(entry) = self.categories.get(&id) else {
            return false;
        };
        filters.iter().all(|(dimension, filter)| match dimension {
            Dimension::CustomerGroup => match filter {
                Filter::AnyOf(ids) => ids.iter().any(|g| entry.groups.contains(g)),
                _ => false,
            },
            Dimension::CategoryLeft => match filter {
                Filter::Above(bound) => entry.node.nleft > *bound,
                _ => false,
            },
            Dimension::CategoryRight => match filter {
                Filter::Below(bound) => entry.node.nright < *bound,
                _ => false,
            },
            Dimension::CategoryDepth => match filter {
                Filter::AtMost(bound) => f64::from(entry.node.level_depth) <= *bound,
                _ => false,
            },
            _ => true,
        })
    }
}

fn availability_bucket(product: &ProductRecord) -> u32 {
    u32::from(product.quantity > 0)
}

fn numeric(filter: &Filter, value: f64) -> bool {
    match filter {
        Filter::AtLeast(min) => value >= *min,
        Filter::AtMost(max) => value <= *max,
        Filter::Within(min, max) => value >= *min && value <= *max,
        _ => false,
    }
}

fn matches_product(product: &ProductRecord, dimension: Dimension, filter: &Filter) -> bool {
    match dimension {
        Dimension::PriceMin | Dimension::PriceMax => numeric(filter, product.price),
        Dimension::Weight => numeric(filter, product.weight),
        Dimension::Condition => match filter {
            Filter::Conditions(set) => set.contains(&product.condition),
            Filter::AnyOf(ids) => ids.contains(&product.condition.as_u32()),
            _ => false,
        },
        Dimension::Quantity => match filter {
            Filter::AnyOf(buckets) => buckets.contains(&availability_bucket(product)),
            _ => false,
        },
        Dimension::OutOfStock => match filter {
            Filter::AnyOf(ids) => ids.contains(&product.out_of_stock.as_u32()),
            _ => false,
        },
        Dimension::Manufacturer => match filter {
            Filter::AnyOf(ids) => product.manufacturer.is_some_and(|m| ids.contains(&m)),
            _ => false,
        },
        Dimension::AttributeGroup => match filter {
            Filter::AnyOf(ids) => product.attributes.iter().any(|(_, g)| ids.contains(g)),
            _ => false,
        },
        Dimension::Attribute => match filter {
            Filter::AnyOf(ids) => product.attributes.iter().any(|(a, _)| ids.contains(a)),
            _ => false,
        },
        Dimension::Feature => match filter {
            Filter::AnyOf(ids) => product.feature_values.iter().any(|(_, f)| ids.contains(f)),
            _ => false,
        },
        Dimension::FeatureValue => match filter {
            Filter::AnyOf(ids) => product.feature_values.iter().any(|(v, _)| ids.contains(v)),
            _ => false,
        },
        Dimension::Category => match filter {
            Filter::AnyOf(ids) => product.categories.iter().any(|c| ids.contains(c)),
            _ => false,
        },
        // Category-side dimensions are handled against the category table.
        Dimension::CustomerGroup
        | Dimension::CategoryLeft
        | Dimension::CategoryRight
        | Dimension::CategoryDepth => true,
    }
}

fn group_allowed(filters: &FilterSet, group: u32) -> bool {
    match filters.get(Dimension::AttributeGroup) {
        Some(Filter::AnyOf(ids)) => ids.contains(&group),
        _ => true,
    }
}

fn feature_allowed(filters: &FilterSet, feature: u32) -> bool {
    match filters.get(Dimension::Feature) {
        Some(Filter::AnyOf(ids)) => ids.contains(&feature),
        _ => true,
    }
}

impl SearchIndex for MemoryIndex {
    fn count(&self, filters: &FilterSet) -> Result<u64> {
        Ok(self.matching(filters).count() as u64)
    }

    fn value_count(&self, filters: &FilterSet, dimension: Dimension) -> Result<Vec<ValueCount>> {
        if !matches!(
            dimension,
            Dimension::Condition
                | Dimension::Quantity
                | Dimension::OutOfStock
                | Dimension::Manufacturer
                | Dimension::Attribute
                | Dimension::FeatureValue
                | Dimension::Category
        ) {
            return Err(AdapterError::UnsupportedDimension(dimension));
        }

        let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
        for product in self.matching(filters) {
            match dimension {
                Dimension::Condition => {
                    *counts.entry(product.condition.as_u32()).or_default() += 1;
                }
                Dimension::Quantity => {
                    *counts.entry(availability_bucket(product)).or_default() += 1;
                }
                Dimension::OutOfStock => {
                    *counts.entry(product.out_of_stock.as_u32()).or_default() += 1;
                }
                Dimension::Manufacturer => {
                    if let Some(manufacturer) = product.manufacturer {
                        *counts.entry(manufacturer).or_default() += 1;
                    }
                }
                Dimension::Attribute => {
                    for (attribute, group) in &product.attributes {
                        if group_allowed(filters, *group) {
                            *counts.entry(*attribute).or_default() += 1;
                        }
                    }
                }
                Dimension::FeatureValue => {
                    for (value, feature) in &product.feature_values {
                        if feature_allowed(filters, *feature) {
                            *counts.entry(*value).or_default() += 1;
                        }
                    }
                }
                Dimension::Category => {
                    for id in &product.categories {
                        if !filters.has_category_side() || self.category_passes(*id, filters) {
                            *counts.entry(*id).or_default() += 1;
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(counts
            .into_iter()
            .map(|(value, count)| ValueCount { value, count })
            .collect())
    }

    fn keyed_value_count(
        &self,
        filters: &FilterSet,
        dimension: Dimension,
        key: Dimension,
    ) -> Result<Vec<KeyedValueCount>> {
        let mut counts: BTreeMap<(u32, u32), u64> = BTreeMap::new();
        match (dimension, key) {
            (Dimension::FeatureValue, Dimension::Feature) => {
                for product in self.matching(filters) {
                    for (value, feature) in &product.feature_values {
                        if feature_allowed(filters, *feature) {
                            *counts.entry((*value, *feature)).or_default() += 1;
                        }
                    }
                }
            }
            (Dimension::Attribute, Dimension::AttributeGroup) => {
                for product in self.matching(filters) {
                    for (attribute, group) in &product.attributes {
                        if group_allowed(filters, *group) {
                            *counts.entry((*attribute, *group)).or_default() += 1;
                        }
                    }
                }
            }
            _ => return Err(AdapterError::UnsupportedDimension(dimension)),
        }
        Ok(counts
            .into_iter()
            .map(|((value, key), count)| KeyedValueCount { value, key, count })
            .collect())
    }

    fn min_max(
        &self,
        filters: &FilterSet,
        field: NumericField,
    ) -> Result<(Option<f64>, Option<f64>)> {
        let mut bounds: Option<(f64, f64)> = None;
        for product in self.matching(filters) {
            let value = match field {
                NumericField::Price => product.price,
                NumericField::Weight => product.weight,
            };
            bounds = Some(match bounds {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
        Ok(match bounds {
            None => (None, None),
            Some((lo, hi)) => (Some(lo), Some(hi)),
        })
    }
}
