use std::collections::{BTreeSet, HashMap};

use facetnav_adapter::{Dimension, Filter, FilteredView, SearchIndex};
use facetnav_catalog::{Attribute, AttributeGroup, CatalogService, FacetDefinition, FacetKind};

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
) -> Result<Vec<FacetBlock>> {
    let Some(group_id) = definition.reference_id else {
        log::debug!("attribute-group definition without a group id, skipped");
        return Ok(Vec::new());
    };

    let groups = catalog.attribute_groups(ctx.language)?;
    if groups.is_empty() {
        return Ok(Vec::new());
    }
    let attributes = catalog.attributes(ctx.language)?;
    let group_by_id: HashMap<u32, &AttributeGroup> = groups.iter().map(|g| (g.id, g)).collect();
    let attribute_by_id: HashMap<u32, &Attribute> = attributes.iter().map(|a| (a.id, a)).collect();

    // Drop the attribute dimension only when this exact group already carries
    // a selection; another group's active selection must keep filtering.
    let view = if selection.attributes.contains_key(&group_id) {
        base.excluding(&[Dimension::Attribute])
    } else {
        base.clone()
    };
    let view = view.with(
        Dimension::AttributeGroup,
        Filter::AnyOf(BTreeSet::from([group_id])),
    );

    let mut blocks: HashMap<u32, FacetBlock> = HashMap::new();
    let mut block_values: HashMap<u32, HashMap<u32, FacetValue>> = HashMap::new();

    for row in view.value_count(Dimension::Attribute)? {
        let Some(attribute) = attribute_by_id.get(&row.value) else {
            log::debug!("attribute {} missing from the master list, skipped", row.value);
            continue;
        };
        let owner = attribute.group_id;
        if !blocks.contains_key(&owner) {
            let Some(group) = group_by_id.get(&owner) else {
                log::debug!("attribute group {owner} missing from the master list, skipped");
                continue;
            };
            blocks.insert(
                owner,
                FacetBlock {
                    kind: FacetKind::AttributeGroup,
                    key: owner,
                    label: group.name.clone(),
                    widget: definition.widget,
                    display_limit: definition.display_limit,
                    product_count: None,
                    seo: catalog.attribute_group_info(owner, ctx.language)?,
                    is_color_group: Some(group.is_color_group),
                    payload: BlockPayload::Values(Vec::new()),
                },
            );
            block_values.insert(owner, HashMap::new());
        }

        let mut value = FacetValue::new(row.value, attribute.name.clone(), row.count);
        value.checked = selection.attribute_checked(row.value);
        value.color = attribute.color.clone();
        value.seo = catalog.attribute_info(row.value, ctx.language)?;
        if let Some(values) = block_values.get_mut(&owner) {
            values.insert(row.value, value);
        }
    }

    // Values follow the master attribute order, blocks the master group order.
    let attribute_order: Vec<u32> = attributes.iter().map(|a| a.id).collect();
    for (owner, block) in &mut blocks {
        if let Some(values) = block_values.remove(owner) {
            let ordered = sort_by_reference(attribute_order.iter().copied(), values);
            block.payload =
                BlockPayload::Values(ordered.into_iter().map(|(_, value)| value).collect());
        }
    }
    let ordered = sort_by_reference(groups.iter().map(|g| g.id), blocks);
    Ok(ordered.into_iter().map(|(_, block)| block).collect())
}
