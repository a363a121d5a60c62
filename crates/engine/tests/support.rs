use facetnav_adapter::{MemoryIndex, OutOfStockPolicy, ProductCondition, ProductRecord};
use facetnav_catalog::{
    CategoryNode, FacetDefinition, FacetKind, MemoryCatalog, SeoInfo, WidgetType,
};
use facetnav_engine::{FacetEngine, RequestContext};

pub const LANGUAGE: u32 = 1;
pub const STORE: u32 = 1;

/// The navigation parent of the demo catalog: `(nleft, nright, level_depth)`
/// = (1, 10, 3), with two child categories at depth 4, one grandchild at
/// depth 5 and one deep node at depth 6.
pub fn parent() -> CategoryNode {
    CategoryNode::new(1, 1, 10, 3)
}

pub fn context() -> RequestContext {
    RequestContext::new(LANGUAGE, STORE, parent())
}

/// Demo master data: three brands, a color and a size attribute group, two
/// features and the category tree described by [`parent`], plus the full
/// facet configuration in display order.
pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_manufacturer(7, "Studio Design")
        .with_manufacturer(2, "Graphic Corner")
        .with_manufacturer(9, "Fashion Manufacturer")
        .with_attribute_group(1, "Color", true)
        .with_attribute_group(2, "Size", false)
        .with_attribute(10, 1, "Red", Some("#E84C3D"))
        .with_attribute(11, 1, "Blue", Some("#5D9CEC"))
        .with_attribute(20, 2, "S", None)
        .with_attribute(21, 2, "M", None)
        .with_attribute(22, 2, "L", None)
        .with_feature(1, "Composition")
        .with_feature(2, "Length")
        .with_feature_value(100, 1, "Cotton")
        .with_feature_value(101, 1, "Wool")
        .with_feature_value(102, 1, "recycled cotton")
        .with_feature_value(200, 2, "10 cm")
        .with_feature_value(201, 2, "2 cm")
        .with_category_name(1, "Home")
        .with_category_name(2, "Art")
        .with_category_name(4, "Posters")
        .with_category_name(3, "Clothes")
        .with_category_name(5, "Vintage")
        .with_attribute_group_info(1, SeoInfo::new("color", "Color filter"))
        .with_attribute_info(10, SeoInfo::new("red", "Red products"))
        .with_feature_info(1, SeoInfo::new("composition", "Composition filter"))
        .with_feature_value_info(100, SeoInfo::new("cotton", "Cotton products"))
        .with_definition(
            FacetDefinition::new(FacetKind::Price, 1).widget(WidgetType::Slider),
        )
        .with_definition(
            FacetDefinition::new(FacetKind::Weight, 2).widget(WidgetType::Slider),
        )
        .with_definition(FacetDefinition::new(FacetKind::Condition, 3))
        .with_definition(FacetDefinition::new(FacetKind::Quantity, 4))
        .with_definition(FacetDefinition::new(FacetKind::Manufacturer, 5).display_limit(10))
        .with_definition(
            FacetDefinition::new(FacetKind::AttributeGroup, 6)
                .reference_id(1)
                .widget(WidgetType::ColorSwatch),
        )
        .with_definition(FacetDefinition::new(FacetKind::AttributeGroup, 7).reference_id(2))
        .with_definition(FacetDefinition::new(FacetKind::Feature, 8).reference_id(1))
        .with_definition(FacetDefinition::new(FacetKind::Feature, 9).reference_id(2))
        .with_definition(FacetDefinition::new(FacetKind::Category, 10))
}

/// Five products spanning every facet dimension.
pub fn index() -> MemoryIndex {
    MemoryIndex::new()
        .with_category(CategoryNode::new(2, 2, 5, 4), [1])
        .with_category(CategoryNode::new(4, 3, 4, 5), [1])
        .with_category(CategoryNode::new(3, 6, 9, 4), [1, 4])
        .with_category(CategoryNode::new(5, 7, 8, 6), [1])
        .with_product(
            ProductRecord::new(1)
                .price(10.0)
                .weight(0.5)
                .quantity(5)
                .manufacturer(7)
                .attribute(10, 1)
                .attribute(20, 2)
                .feature_value(100, 1)
                .feature_value(201, 2)
                .category(2)
                .category(4),
        )
        .with_product(
            ProductRecord::new(2)
                .price(20.0)
                .weight(1.0)
                .manufacturer(7)
                .attribute(11, 1)
                .attribute(21, 2)
                .feature_value(101, 1)
                .feature_value(200, 2)
                .category(2),
        )
        .with_product(
            ProductRecord::new(3)
                .price(30.0)
                .quantity(2)
                .out_of_stock(OutOfStockPolicy::Allow)
                .manufacturer(2)
                .attribute(10, 1)
                .feature_value(102, 1)
                .category(3),
        )
        .with_product(
            ProductRecord::new(4)
                .price(40.0)
                .weight(2.5)
                .condition(ProductCondition::Used)
                .out_of_stock(OutOfStockPolicy::Default)
                .manufacturer(9)
                .attribute(22, 2)
                .feature_value(100, 1)
                .category(3)
                .category(5),
        )
        .with_product(
            ProductRecord::new(5)
                .price(50.0)
                .quantity(1)
                .condition(ProductCondition::Refurbished)
                .category(2),
        )
}

pub fn engine() -> FacetEngine<MemoryIndex, MemoryCatalog, MemoryCatalog> {
    FacetEngine::new(index(), catalog(), catalog())
}
