use std::collections::HashMap;

use facetnav_adapter::{Dimension, FilteredView, SearchIndex};
use facetnav_catalog::{CatalogService, FacetDefinition, FacetKind};

use crate::block::{BlockPayload, FacetBlock, FacetValue};
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;
use crate::sort::sort_by_reference;

pub(crate) fn build<I: SearchIndex, C: CatalogService>(
    ctx: &RequestContext,
    selection: &SelectionState,
    base: &FilteredView<'_, I>,
    catalog: &C,
    definition: &FacetDefinition,
) -> Result<Option<FacetBlock>> {
    let manufacturers = catalog.manufacturers(ctx.language)?;
    if manufacturers.is_empty() {
        return Ok(None);
    }
    let names: HashMap<u32, &str> = manufacturers
        .iter()
        .map(|m| (m.id, m.name.as_str()))
        .collect();

    let mut values: HashMap<u32, FacetValue> = HashMap::new();
    let rows = base
        .excluding(&[Dimension::Manufacturer])
        .value_count(Dimension::Manufacturer)?;
    for row in rows {
        let Some(name) = names.get(&row.value) else {
            log::debug!("manufacturer {} missing from the master list, skipped", row.value);
            continue;
        };
        let mut value = FacetValue::new(row.value, *name, row.count);
        value.checked = selection.manufacturers.contains(&row.value);
        values.insert(row.value, value);
    }

    // Brand-list order, not count order.
    let ordered = sort_by_reference(manufacturers.iter().map(|m| m.id), values);
    if ordered.is_empty() {
        return Ok(None);
    }

    Ok(Some(FacetBlock {
        kind: FacetKind::Manufacturer,
        key: 0,
        label: ctx.labels.brand.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: None,
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Values(ordered.into_iter().map(|(_, value)| value).collect()),
    }))
}
