use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A filterable dimension of the catalog index.
///
/// Most dimensions constrain the product row itself. The last four
/// (`CustomerGroup`, `CategoryLeft`, `CategoryRight`, `CategoryDepth`)
/// constrain the category a product is aggregated under instead, the way the
/// reference executor joins its category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    PriceMin,
    PriceMax,
    Weight,
    Condition,
    Quantity,
    OutOfStock,
    Manufacturer,
    AttributeGroup,
    Attribute,
    Feature,
    FeatureValue,
    Category,
    CustomerGroup,
    CategoryLeft,
    CategoryRight,
    CategoryDepth,
}

impl Dimension {
    /// True for dimensions evaluated against the category table rather than
    /// the product row. These are satisfied when at least one of the
    /// product's categories passes all of them together.
    pub fn is_category_side(self) -> bool {
        matches!(
            self,
            Dimension::CustomerGroup
                | Dimension::CategoryLeft
                | Dimension::CategoryRight
                | Dimension::CategoryDepth
        )
    }
}

/// Product condition, the fixed three-value domain of the condition facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    pub const ALL: [ProductCondition; 3] = [
        ProductCondition::New,
        ProductCondition::Used,
        ProductCondition::Refurbished,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            ProductCondition::New => 0,
            ProductCondition::Used => 1,
            ProductCondition::Refurbished => 2,
        }
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(ProductCondition::New),
            1 => Some(ProductCondition::Used),
            2 => Some(ProductCondition::Refurbished),
            _ => None,
        }
    }
}

/// Per-product ordering policy when its tracked quantity reaches zero.
///
/// `Deny` refuses orders, `Allow` keeps the product orderable, and `Default`
/// defers to the store-wide backorder setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfStockPolicy {
    Deny,
    Allow,
    Default,
}

impl OutOfStockPolicy {
    pub fn as_u32(self) -> u32 {
        match self {
            OutOfStockPolicy::Deny => 0,
            OutOfStockPolicy::Allow => 1,
            OutOfStockPolicy::Default => 2,
        }
    }
}

/// One constraint on a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Id membership.
    AnyOf(BTreeSet<u32>),
    /// Condition membership.
    Conditions(BTreeSet<ProductCondition>),
    /// Inclusive numeric lower bound.
    AtLeast(f64),
    /// Inclusive numeric upper bound.
    AtMost(f64),
    /// Inclusive numeric band.
    Within(f64, f64),
    /// Strict integer lower bound (nested-set coordinates).
    Above(u32),
    /// Strict integer upper bound (nested-set coordinates).
    Below(u32),
}

/// An immutable set of active constraints, at most one per dimension.
///
/// Self-exclusion is expressed by deriving a new set with [`FilterSet::without`]
/// instead of clearing and restoring filters on a shared adapter, so a failed
/// query can never leave partially-excluded state behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet(BTreeMap<Dimension, Filter>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, dimension: Dimension, filter: Filter) {
        self.0.insert(dimension, filter);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, dimension: Dimension, filter: Filter) -> Self {
        self.set(dimension, filter);
        self
    }

    pub fn get(&self, dimension: Dimension) -> Option<&Filter> {
        self.0.get(&dimension)
    }

    pub fn remove(&mut self, dimension: Dimension) -> Option<Filter> {
        self.0.remove(&dimension)
    }

    /// Non-mutating projection: a copy of this set with the named dimensions
    /// absent. `self` is left untouched.
    pub fn without(&self, dimensions: &[Dimension]) -> FilterSet {
        let mut filters = self.0.clone();
        for dimension in dimensions {
            filters.remove(dimension);
        }
        FilterSet(filters)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Dimension, &Filter)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when any category-side dimension carries a constraint.
    pub fn has_category_side(&self) -> bool {
        self.0.keys().any(|dimension| dimension.is_category_side())
    }
}
