pub(crate) mod attribute;
pub(crate) mod category;
pub(crate) mod condition;
pub(crate) mod feature;
pub(crate) mod manufacturer;
pub(crate) mod price;
pub(crate) mod quantity;
pub(crate) mod weight;

use facetnav_adapter::Dimension;

/// Price and weight bounds are computed with all three range dimensions
/// excluded together: a filter on either range must not shrink the span the
/// other one displays.
pub(crate) const RANGE_DIMENSIONS: [Dimension; 3] =
    [Dimension::PriceMin, Dimension::PriceMax, Dimension::Weight];
