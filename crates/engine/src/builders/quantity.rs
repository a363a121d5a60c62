use std::collections::BTreeSet;

use facetnav_adapter::{Dimension, Filter, FilteredView, SearchIndex};
use facetnav_catalog::{FacetDefinition, FacetKind};

use crate::block::{BlockPayload, FacetBlock, FacetValue};
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;

pub(crate) fn build<I: SearchIndex>(
    ctx: &RequestContext,
    selection: &SelectionState,
    base: &FilteredView<'_, I>,
    definition: &FacetDefinition,
) -> Result<Option<FacetBlock>> {
    let view = base.excluding(&[Dimension::Quantity]);

    let mut not_available = FacetValue::new(0, ctx.labels.not_available.clone(), 0);
    let mut in_stock = FacetValue::new(1, ctx.labels.in_stock.clone(), 0);

    if !ctx.stock_management {
        let total = view.count()?;
        let none_left = view
            .with(Dimension::Quantity, Filter::AnyOf(BTreeSet::from([0])))
            .count()?;
        not_available.count = none_left;
        in_stock.count = total.saturating_sub(none_left);
        in_stock.checked = selection.quantity.contains(&1);
    } else {
        // Three-state reconciliation: 0 denies orders at zero stock, 1 always
        // allows them, 2 defers to the store-wide backorder policy. Deferred
        // counts are subtracted from the unavailable bucket when backorders
        // are off, preserved from the reference arithmetic.
        let mut unavailable: i64 = 0;
        let mut available: i64 = 0;
        for row in view.value_count(Dimension::OutOfStock)? {
            match row.value {
                0 => unavailable += row.count as i64,
                1 => available += row.count as i64,
                2 if ctx.backorder_allowed => available += row.count as i64,
                2 => unavailable -= row.count as i64,
                other => log::warn!("unknown out-of-stock state {other} in count result"),
            }
        }
        not_available.count = unavailable.max(0) as u64;
        in_stock.count = available.max(0) as u64;
        not_available.checked = selection.quantity.contains(&0);
        in_stock.checked = selection.quantity.contains(&1);
    }

    Ok(Some(FacetBlock {
        kind: FacetKind::Quantity,
        key: 0,
        label: ctx.labels.availability.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: None,
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Values(vec![not_available, in_stock]),
    }))
}
