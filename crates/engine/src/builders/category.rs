use std::collections::{BTreeSet, HashMap};

use facetnav_adapter::{Dimension, Filter, FilteredView, SearchIndex};
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
    let mut view = base.excluding(&[Dimension::Category]);

    if ctx.group_visibility {
        let groups: BTreeSet<u32> = if ctx.customer_groups.is_empty() {
            BTreeSet::from([ctx.default_customer_group])
        } else {
            ctx.customer_groups.iter().copied().collect()
        };
        view = view.with(Dimension::CustomerGroup, Filter::AnyOf(groups));
    }
    if ctx.category_depth > 0 {
        let cap = ctx.parent.level_depth + ctx.category_depth;
        view = view.with(Dimension::CategoryDepth, Filter::AtMost(f64::from(cap)));
    }
    // Strict nested-set bounds keep the parent itself out of its own subtree.
    let view = view
        .with(Dimension::CategoryLeft, Filter::Above(ctx.parent.nleft))
        .with(Dimension::CategoryRight, Filter::Below(ctx.parent.nright));

    let names = catalog.category_names(ctx.language)?;
    let name_by_id: HashMap<u32, &str> = names.iter().map(|n| (n.id, n.name.as_str())).collect();

    let mut values: HashMap<u32, FacetValue> = HashMap::new();
    for row in view.value_count(Dimension::Category)? {
        let Some(name) = name_by_id.get(&row.value) else {
            log::debug!("category {} missing from the master name list, skipped", row.value);
            continue;
        };
        let mut value = FacetValue::new(row.value, *name, row.count);
        value.checked = selection.categories.contains(&row.value);
        values.insert(row.value, value);
    }

    // Tree/display order from the master name list, not count order.
    let ordered = sort_by_reference(names.iter().map(|n| n.id), values);
    if ordered.is_empty() {
        return Ok(None);
    }

    Ok(Some(FacetBlock {
        kind: FacetKind::Category,
        key: 0,
        label: ctx.labels.categories.clone(),
        widget: definition.widget,
        display_limit: definition.display_limit,
        product_count: None,
        seo: None,
        is_color_group: None,
        payload: BlockPayload::Values(ordered.into_iter().map(|(_, value)| value).collect()),
    }))
}
