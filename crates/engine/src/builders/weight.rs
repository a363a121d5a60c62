use facetnav_adapter::{FilteredView, NumericField, SearchIndex};
use facetnav_catalog::{FacetDefinition, FacetKind};

use crate::block::{BlockPayload, FacetBlock, RangeFacet};
use crate::builders::RANGE_DIMENSIONS;
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;

pub(crate) fn build<I: SearchIndex>(
    ctx: &RequestContext,
    selection: &SelectionState,
    base: &FilteredView<'_, I>,
    definition: &FacetDefinition,
    total: u64,
) -> Result<Option<FacetBlock>> {
    let (min, max) = base.excluding(&RANGE_DIMENSIONS).min_max(NumericField::Weight)?;

    // An absent or all-zero span means no product in scope carries a weight:
    // nothing to filter on, so no block.
    let nothing_to_show = match (min, max) {
        (None, None) => true,
        (Some(lo), Some(hi)) => lo == 0.0 && hi == 0.0,
        _ => false,
    };
    if nothing_to_show {
        log::debug!("weight facet omitted, no product carries a weight");
        return Ok(None);
    }

    Ok(Some(FacetBlock {
        kind: FacetKind::Weight,
        key: 0,
        label: ctx.labels.weight.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: Some(total),
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Range(RangeFacet {
            min,
            max,
            unit: ctx.weight_unit.clone(),
            selected: selection.weight,
            format: None,
        }),
    }))
}
