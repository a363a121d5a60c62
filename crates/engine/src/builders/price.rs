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
    if !ctx.show_prices {
        return Ok(None);
    }

    let (min, max) = base.excluding(&RANGE_DIMENSIONS).min_max(NumericField::Price)?;
    log::debug!("price bounds {min:?}..{max:?} over {total} products");

    Ok(Some(FacetBlock {
        kind: FacetKind::Price,
        key: 0,
        label: ctx.labels.price.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: Some(total),
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Range(RangeFacet {
            min,
            max,
            unit: ctx.price_format.currency_symbol.clone(),
            selected: selection.price,
            format: Some(ctx.price_format.clone()),
        }),
    }))
}
