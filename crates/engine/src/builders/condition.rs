use facetnav_adapter::{Dimension, FilteredView, ProductCondition, SearchIndex};
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
    // All three buckets are always shown, zero-count ones included.
    let mut buckets: Vec<FacetValue> = ProductCondition::ALL
        .iter()
        .map(|&condition| {
            FacetValue::new(condition.as_u32(), ctx.labels.condition_label(condition), 0)
        })
        .collect();

    let rows = base
        .excluding(&[Dimension::Condition])
        .value_count(Dimension::Condition)?;
    for row in rows {
        let Some(condition) = ProductCondition::from_u32(row.value) else {
            log::warn!("unknown condition ordinal {} in count result", row.value);
            continue;
        };
        if let Some(bucket) = buckets.iter_mut().find(|b| b.id == row.value) {
            bucket.count = row.count;
            bucket.checked = selection.conditions.contains(&condition);
        }
    }

    Ok(Some(FacetBlock {
        kind: FacetKind::Condition,
        key: 0,
        label: ctx.labels.condition.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: None,
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Values(buckets),
    }))
}
