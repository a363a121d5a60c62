use facetnav_adapter::{FilteredView, SearchIndex};
use facetnav_catalog::{CatalogService, FacetCatalog, FacetKind};

use crate::block::FacetBlock;
use crate::builders;
use crate::cache::{self, BlockStore};
use crate::context::RequestContext;
use crate::error::Result;
use crate::selection::SelectionState;

/// The orchestrator: reads the facet configuration for a scope, dispatches
/// each definition to its builder and concatenates the results in definition
/// order.
///
/// Builders run sequentially against derived read-only views of one shared
/// index, so no builder can observe another's exclusions.
pub struct FacetEngine<I, C, F> {
    index: I,
    catalog: C,
    facets: F,
}

impl<I, C, F> FacetEngine<I, C, F>
where
    I: SearchIndex,
    C: CatalogService,
    F: FacetCatalog,
{
    pub fn new(index: I, catalog: C, facets: F) -> Self {
        Self {
            index,
            catalog,
            facets,
        }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Compute the ordered block list for one request.
    ///
    /// Definitions the engine cannot serve (an attribute-group or feature
    /// definition without a reference id, a facet whose value set comes back
    /// empty) are skipped, never reported as errors.
    pub fn compute(
        &self,
        ctx: &RequestContext,
        selection: &SelectionState,
    ) -> Result<Vec<FacetBlock>> {
        let definitions = self.facets.definitions(ctx.store, ctx.parent.id)?;
        let base = FilteredView::new(&self.index, selection.to_filters());
        let total = base.count()?;
        log::debug!(
            "computing {} facet definitions over {} matching products",
            definitions.len(),
            total
        );

        let mut blocks = Vec::with_capacity(definitions.len());
        for definition in &definitions {
            match definition.kind {
                FacetKind::Price => {
                    if let Some(block) =
                        builders::price::build(ctx, selection, &base, definition, total)?
                    {
                        blocks.push(block);
                    }
                }
                FacetKind::Weight => {
                    if let Some(block) =
                        builders::weight::build(ctx, selection, &base, definition, total)?
                    {
                        blocks.push(block);
                    }
                }
                FacetKind::Condition => {
                    if let Some(block) = builders::condition::build(ctx, selection, &base, definition)? {
                        blocks.push(block);
                    }
                }
                FacetKind::Quantity => {
                    if let Some(block) = builders::quantity::build(ctx, selection, &base, definition)? {
                        blocks.push(block);
                    }
                }
                FacetKind::Manufacturer => {
                    if let Some(block) = builders::manufacturer::build(
                        ctx,
                        selection,
                        &base,
                        &self.catalog,
                        definition,
                    )? {
                        blocks.push(block);
                    }
                }
                FacetKind::AttributeGroup => {
                    blocks.extend(builders::attribute::build(
                        ctx,
                        selection,
                        &base,
                        &self.catalog,
                        definition,
                    )?);
                }
                FacetKind::Feature => {
                    blocks.extend(builders::feature::build(
                        ctx,
                        selection,
                        &base,
                        &self.catalog,
                        definition,
                    )?);
                }
                FacetKind::Category => {
                    if let Some(block) = builders::category::build(
                        ctx,
                        selection,
                        &base,
                        &self.catalog,
                        definition,
                    )? {
                        blocks.push(block);
                    }
                }
            }
        }
        Ok(blocks)
    }

    /// [`compute`](Self::compute) behind a fingerprinted cache.
    ///
    /// Concurrent identical requests may both compute and both write; the
    /// value is deterministic for a fingerprint, so last-write-wins is fine.
    pub fn compute_cached<S: BlockStore>(
        &self,
        ctx: &RequestContext,
        selection: &SelectionState,
        store: &S,
    ) -> Result<Vec<FacetBlock>> {
        let key = cache::fingerprint(ctx, selection)?;
        if let Some(blocks) = cache::load_blocks(store, &key) {
            log::debug!("cache hit for {key}");
            return Ok(blocks);
        }
        log::debug!("cache miss for {key}");
        let blocks = self.compute(ctx, selection)?;
        cache::store_blocks(store, &key, &blocks);
        Ok(blocks)
    }
}
