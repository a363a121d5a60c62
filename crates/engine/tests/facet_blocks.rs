mod support;

use facetnav_adapter::{MemoryIndex, OutOfStockPolicy, ProductRecord};
use facetnav_catalog::{FacetDefinition, FacetKind, MemoryCatalog, WidgetType};
use facetnav_engine::{FacetBlock, FacetEngine, SelectionState};
use pretty_assertions::assert_eq;

fn block<'a>(blocks: &'a [FacetBlock], kind: FacetKind, key: u32) -> &'a FacetBlock {
    blocks
        .iter()
        .find(|b| b.kind == kind && b.key == key)
        .unwrap_or_else(|| panic!("no {kind:?} block with key {key}"))
}

fn value_ids(block: &FacetBlock) -> Vec<u32> {
    block.values().expect("value block").iter().map(|v| v.id).collect()
}

fn value_counts(block: &FacetBlock) -> Vec<(u32, u64)> {
    block
        .values()
        .expect("value block")
        .iter()
        .map(|v| (v.id, v.count))
        .collect()
}

#[test]
fn blocks_follow_definition_order() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let kinds: Vec<(FacetKind, u32)> = blocks.iter().map(|b| (b.kind, b.key)).collect();
    assert_eq!(
        kinds,
        vec![
            (FacetKind::Price, 0),
            (FacetKind::Weight, 0),
            (FacetKind::Condition, 0),
            (FacetKind::Quantity, 0),
            (FacetKind::Manufacturer, 0),
            (FacetKind::AttributeGroup, 1),
            (FacetKind::AttributeGroup, 2),
            (FacetKind::Feature, 1),
            (FacetKind::Feature, 2),
            (FacetKind::Category, 0),
        ]
    );
}

#[test]
fn price_block_carries_bounds_format_and_total() {
    let ctx = support::context();
    let blocks = support::engine().compute(&ctx, &SelectionState::new()).unwrap();

    let price = block(&blocks, FacetKind::Price, 0);
    assert_eq!(price.widget, WidgetType::Slider);
    assert_eq!(price.product_count, Some(5));

    let range = price.range().expect("range block");
    assert_eq!((range.min, range.max), (Some(10.0), Some(50.0)));
    assert_eq!(range.unit, "€");
    assert_eq!(range.selected, None);
    assert_eq!(range.format.as_ref(), Some(&ctx.price_format));
}

#[test]
fn price_block_skipped_when_prices_are_hidden() {
    let mut ctx = support::context();
    ctx.show_prices = false;

    let blocks = support::engine().compute(&ctx, &SelectionState::new()).unwrap();
    assert!(blocks.iter().all(|b| b.kind != FacetKind::Price));
}

#[test]
fn weight_block_omitted_when_no_product_has_weight() {
    let catalog = support::catalog();
    let index = MemoryIndex::new()
        .with_product(ProductRecord::new(1).price(10.0))
        .with_product(ProductRecord::new(2).price(20.0));
    let engine = FacetEngine::new(index, catalog.clone(), catalog);

    let blocks = engine.compute(&support::context(), &SelectionState::new()).unwrap();
    assert!(blocks.iter().all(|b| b.kind != FacetKind::Weight));
}

#[test]
fn condition_block_always_lists_all_three_buckets() {
    let catalog = support::catalog();
    let mut index = MemoryIndex::new();
    for id in 1..=7 {
        index = index.with_product(ProductRecord::new(id).price(10.0).quantity(1));
    }
    let engine = FacetEngine::new(index, catalog.clone(), catalog);

    let blocks = engine.compute(&support::context(), &SelectionState::new()).unwrap();
    let condition = block(&blocks, FacetKind::Condition, 0);

    assert_eq!(value_counts(condition), vec![(0, 7), (1, 0), (2, 0)]);
    assert!(condition.values().unwrap().iter().all(|v| !v.checked));
}

#[test]
fn quantity_buckets_conserve_the_total_without_stock_management() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let quantity = block(&blocks, FacetKind::Quantity, 0);
    assert_eq!(value_counts(quantity), vec![(0, 2), (1, 3)]);
}

#[test]
fn quantity_in_stock_checked_comes_from_the_selection() {
    let selection = SelectionState::new().with_quantity(1);
    let blocks = support::engine().compute(&support::context(), &selection).unwrap();

    let values = block(&blocks, FacetKind::Quantity, 0).values().unwrap().to_vec();
    assert!(!values[0].checked);
    assert!(values[1].checked);
}

fn stock_index() -> MemoryIndex {
    // Raw state counts {deny: 5, allow: 3, default: 2}.
    let mut index = MemoryIndex::new();
    for id in 1..=5 {
        index = index.with_product(ProductRecord::new(id));
    }
    for id in 6..=8 {
        index = index.with_product(ProductRecord::new(id).out_of_stock(OutOfStockPolicy::Allow));
    }
    for id in 9..=10 {
        index = index.with_product(ProductRecord::new(id).out_of_stock(OutOfStockPolicy::Default));
    }
    index
}

#[test]
fn deferred_stock_counts_subtract_when_backorders_are_off() {
    let catalog = support::catalog();
    let engine = FacetEngine::new(stock_index(), catalog.clone(), catalog);
    let mut ctx = support::context();
    ctx.stock_management = true;
    ctx.backorder_allowed = false;

    let blocks = engine.compute(&ctx, &SelectionState::new()).unwrap();
    let quantity = block(&blocks, FacetKind::Quantity, 0);
    assert_eq!(value_counts(quantity), vec![(0, 3), (1, 3)]);
}

#[test]
fn deferred_stock_counts_are_available_when_backorders_are_on() {
    let catalog = support::catalog();
    let engine = FacetEngine::new(stock_index(), catalog.clone(), catalog);
    let mut ctx = support::context();
    ctx.stock_management = true;
    ctx.backorder_allowed = true;

    let blocks = engine.compute(&ctx, &SelectionState::new()).unwrap();
    let quantity = block(&blocks, FacetKind::Quantity, 0);
    assert_eq!(value_counts(quantity), vec![(0, 5), (1, 5)]);
}

#[test]
fn manufacturer_values_follow_the_brand_list_order() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let manufacturer = block(&blocks, FacetKind::Manufacturer, 0);
    assert_eq!(manufacturer.label, "Brand");
    // Brand-list order 7, 2, 9 even though counts are 2, 1, 1.
    assert_eq!(value_counts(manufacturer), vec![(7, 2), (2, 1), (9, 1)]);
}

#[test]
fn manufacturer_facet_omitted_without_a_brand_list() {
    let catalog = MemoryCatalog::new()
        .with_definition(FacetDefinition::new(FacetKind::Manufacturer, 1));
    let engine = FacetEngine::new(support::index(), catalog.clone(), catalog);

    let blocks = engine.compute(&support::context(), &SelectionState::new()).unwrap();
    assert!(blocks.is_empty());
}

#[test]
fn counted_ids_missing_from_the_brand_list_are_skipped() {
    let catalog = MemoryCatalog::new()
        .with_manufacturer(7, "Studio Design")
        .with_definition(FacetDefinition::new(FacetKind::Manufacturer, 1));
    let index = MemoryIndex::new()
        .with_product(ProductRecord::new(1).manufacturer(7))
        .with_product(ProductRecord::new(2).manufacturer(99));
    let engine = FacetEngine::new(index, catalog.clone(), catalog);

    let blocks = engine.compute(&support::context(), &SelectionState::new()).unwrap();
    let manufacturer = block(&blocks, FacetKind::Manufacturer, 0);
    assert_eq!(value_counts(manufacturer), vec![(7, 1)]);
}

#[test]
fn attribute_blocks_carry_group_metadata_and_swatches() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let color = block(&blocks, FacetKind::AttributeGroup, 1);
    assert_eq!(color.label, "Color");
    assert_eq!(color.is_color_group, Some(true));
    assert_eq!(color.widget, WidgetType::ColorSwatch);
    assert_eq!(
        color.seo.as_ref().and_then(|s| s.url_name.as_deref()),
        Some("color")
    );
    assert_eq!(value_counts(color), vec![(10, 2), (11, 1)]);

    let red = &color.values().unwrap()[0];
    assert_eq!(red.color.as_deref(), Some("#E84C3D"));
    assert_eq!(red.seo.as_ref().and_then(|s| s.url_name.as_deref()), Some("red"));

    let size = block(&blocks, FacetKind::AttributeGroup, 2);
    assert_eq!(size.is_color_group, Some(false));
    // Master attribute order, not count or id order.
    assert_eq!(value_ids(size), vec![20, 21, 22]);
}

#[test]
fn attribute_checked_scans_every_groups_selection() {
    // Attribute 10 belongs to group 1 but is selected under group 2's entry;
    // it must still come back checked.
    let selection = SelectionState::new().with_attribute(2, 10);
    let blocks = support::engine().compute(&support::context(), &selection).unwrap();

    let color = block(&blocks, FacetKind::AttributeGroup, 1);
    let red = color.values().unwrap().iter().find(|v| v.id == 10).unwrap();
    assert!(red.checked);
}

#[test]
fn feature_values_sort_naturally_by_label() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let composition = block(&blocks, FacetKind::Feature, 1);
    let labels: Vec<&str> = composition
        .values()
        .unwrap()
        .iter()
        .map(|v| v.label.as_str())
        .collect();
    // Case-insensitive: "recycled cotton" lands between "Cotton" and "Wool".
    assert_eq!(labels, vec!["Cotton", "recycled cotton", "Wool"]);

    let length = block(&blocks, FacetKind::Feature, 2);
    let labels: Vec<&str> = length
        .values()
        .unwrap()
        .iter()
        .map(|v| v.label.as_str())
        .collect();
    // Digit-aware: 2 before 10.
    assert_eq!(labels, vec!["2 cm", "10 cm"]);
}

#[test]
fn feature_block_carries_seo_infos() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let composition = block(&blocks, FacetKind::Feature, 1);
    assert_eq!(
        composition.seo.as_ref().and_then(|s| s.url_name.as_deref()),
        Some("composition")
    );
    let cotton = composition.values().unwrap().iter().find(|v| v.id == 100).unwrap();
    assert_eq!(
        cotton.seo.as_ref().and_then(|s| s.url_name.as_deref()),
        Some("cotton")
    );
}

#[test]
fn category_block_respects_the_default_depth_cap() {
    let blocks = support::engine()
        .compute(&support::context(), &SelectionState::new())
        .unwrap();

    let category = block(&blocks, FacetKind::Category, 0);
    // Depth 1 below the parent: the depth-5 grandchild and depth-6 node are
    // capped out, the parent itself is outside its own strict bounds.
    assert_eq!(value_counts(category), vec![(2, 3), (3, 2)]);
}

#[test]
fn category_depth_two_admits_depth_five_but_not_six() {
    let mut ctx = support::context();
    ctx.category_depth = 2;

    let blocks = support::engine().compute(&ctx, &SelectionState::new()).unwrap();
    let category = block(&blocks, FacetKind::Category, 0);
    // Master order is nleft order: Art (2), Posters (4), Clothes (3).
    assert_eq!(value_counts(category), vec![(2, 3), (4, 1), (3, 2)]);
}

#[test]
fn category_visibility_restricts_to_the_viewers_groups() {
    let mut ctx = support::context();
    ctx.group_visibility = true;
    ctx.customer_groups = vec![4];

    let blocks = support::engine().compute(&ctx, &SelectionState::new()).unwrap();
    let category = block(&blocks, FacetKind::Category, 0);
    // Only category 3 is visible to group 4.
    assert_eq!(value_counts(category), vec![(3, 2)]);
}

#[test]
fn unauthenticated_viewers_fall_back_to_the_default_group() {
    let mut ctx = support::context();
    ctx.group_visibility = true;
    ctx.customer_groups = Vec::new();
    ctx.default_customer_group = 1;

    let blocks = support::engine().compute(&ctx, &SelectionState::new()).unwrap();
    let category = block(&blocks, FacetKind::Category, 0);
    assert_eq!(value_counts(category), vec![(2, 3), (3, 2)]);
}

#[test]
fn selected_values_come_back_checked() {
    let selection = SelectionState::new()
        .with_manufacturer(2)
        .with_category(3);
    let blocks = support::engine().compute(&support::context(), &selection).unwrap();

    let manufacturer = block(&blocks, FacetKind::Manufacturer, 0);
    let checked: Vec<u32> = manufacturer
        .values()
        .unwrap()
        .iter()
        .filter(|v| v.checked)
        .map(|v| v.id)
        .collect();
    assert_eq!(checked, vec![2]);

    let category = block(&blocks, FacetKind::Category, 0);
    let checked: Vec<u32> = category
        .values()
        .unwrap()
        .iter()
        .filter(|v| v.checked)
        .map(|v| v.id)
        .collect();
    assert_eq!(checked, vec![3]);
}
