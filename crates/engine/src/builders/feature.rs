use std::collections::{BTreeSet, HashMap};

use facetnav_adapter::{Dimension, Filter, FilteredView, SearchIndex};
use facetnav_catalog::{CatalogService, FacetDefinition, FacetKind, Feature};

use crate::block::{BlockPayload, FacetBlock, FacetValue};
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;
use crate::sort::natural_label_cmp;

pub(crate) fn build<I: SearchIndex, C: CatalogService>(
    ctx: &RequestContext,
    selection: &SelectionState,
    base: &FilteredView<'_, I>,
    catalog: &C,
    definition: &FacetDefinition,
) -> Result<Vec<FacetBlock>> {
    let Some(feature_id) = definition.reference_id else {
        log::debug!("feature definition without a feature id, skipped");
        return Ok(Vec::new());
    };

    let features = catalog.features(ctx.language)?;
    if features.is_empty() {
        return Ok(Vec::new());
    }
    let feature_by_id: HashMap<u32, &Feature> = features.iter().map(|f| (f.id, f)).collect();

    // Drop the feature-value dimension only when this exact feature already
    // carries a selection.
    let view = if selection.features.contains_key(&feature_id) {
        base.excluding(&[Dimension::FeatureValue])
    } else {
        base.clone()
    };
    let view = view.with(Dimension::Feature, Filter::AnyOf(BTreeSet::from([feature_id])));

    let mut blocks: Vec<FacetBlock> = Vec::new();
    let mut block_index: HashMap<u32, usize> = HashMap::new();
    let mut labels: HashMap<u32, HashMap<u32, String>> = HashMap::new();

    // One query can span several features, so each row carries its owning
    // feature id alongside the value.
    for row in view.keyed_value_count(Dimension::FeatureValue, Dimension::Feature)? {
        let Some(feature) = feature_by_id.get(&row.key) else {
            log::debug!("feature {} missing from the master list, skipped", row.key);
            continue;
        };
        let index = match block_index.get(&row.key) {
            Some(&index) => index,
            None => {
                // Value labels are fetched once per newly-seen feature.
                let values = catalog.feature_values(ctx.language, row.key)?;
                labels.insert(
                    row.key,
                    values.into_iter().map(|v| (v.id, v.value)).collect(),
                );
                blocks.push(FacetBlock {
                    kind: FacetKind::Feature,
                    key: row.key,
                    label: feature.name.clone(),
                    widget: definition.widget,
                    display_limit: definition.display_limit,
                    product_count: None,
                    seo: catalog.feature_info(row.key, ctx.language)?,
                    is_color_group: None,
                    payload: BlockPayload::Values(Vec::new()),
                });
                block_index.insert(row.key, blocks.len() - 1);
                blocks.len() - 1
            }
        };

        let Some(label) = labels.get(&row.key).and_then(|m| m.get(&row.value)) else {
            log::debug!("feature value {} has no label, skipped", row.value);
            continue;
        };
        let mut value = FacetValue::new(row.value, label.clone(), row.count);
        value.checked = selection.feature_value_checked(row.value);
        value.seo = catalog.feature_value_info(row.value, ctx.language)?;
        if let BlockPayload::Values(values) = &mut blocks[index].payload {
            values.push(value);
        }
    }

    // Feature values sort by label, not by a master order.
    for block in &mut blocks {
        if let BlockPayload::Values(values) = &mut block.payload {
            values.sort_by(|a, b| natural_label_cmp(&a.label, &b.label));
        }
    }
    blocks.retain(|block| !matches!(&block.payload, BlockPayload::Values(values) if values.is_empty()));
    Ok(blocks)
}
