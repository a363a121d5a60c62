use facetnav_catalog::{FacetKind, SeoInfo, WidgetType};
use serde::{Deserialize, Serialize};

use crate::context::PriceFormat;
use crate::selection::RangeSelection;

/// One display-ready facet, the unit of output of the engine.
///
/// `key` is the attribute-group or feature id for those kinds and 0 for
/// singleton facets. Blocks appear in the output in facet-definition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBlock {
    pub kind: FacetKind,
    pub key: u32,
    pub label: String,
    pub widget: WidgetType,
    pub display_limit: u32,
    /// Total matching product count, carried by range blocks.
    pub product_count: Option<u64>,
    pub seo: Option<SeoInfo>,
    pub is_color_group: Option<bool>,
    pub payload: BlockPayload,
}

impl FacetBlock {
    pub fn values(&self) -> Option<&[FacetValue]> {
        match &self.payload {
            BlockPayload::Values(values) => Some(values),
            BlockPayload::Range(_) => None,
        }
    }

    pub fn range(&self) -> Option<&RangeFacet> {
        match &self.payload {
            BlockPayload::Range(range) => Some(range),
            BlockPayload::Values(_) => None,
        }
    }
}

/// A slider's bounds or an ordered value list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockPayload {
    Range(RangeFacet),
    Values(Vec<FacetValue>),
}

/// Bounds and display data for a continuous facet. When both bounds are
/// present, `min <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFacet {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: String,
    /// The viewer's own selected band, copied verbatim from the selection.
    pub selected: Option<RangeSelection>,
    pub format: Option<PriceFormat>,
}

/// One selectable entry in a value-list facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: u32,
    pub label: String,
    pub count: u64,
    pub checked: bool,
    /// Swatch hex code, set for values of color attribute groups.
    pub color: Option<String>,
    pub seo: Option<SeoInfo>,
}

impl FacetValue {
    pub fn new(id: u32, label: impl Into<String>, count: u64) -> Self {
        Self {
            id,
            label: label.into(),
            count,
            checked: false,
            color: None,
            seo: None,
        }
    }
}
