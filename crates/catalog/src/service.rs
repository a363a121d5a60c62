use crate::error::Result;
use crate::types::{
    Attribute, AttributeGroup, CategoryName, Feature, FeatureValue, LanguageId, Manufacturer,
    SeoInfo,
};

/// Read-only master reference data for one language.
///
/// List methods return their canonical display order: manufacturers by the
/// brand list's own order, attribute groups by group position, attributes by
/// (group name, attribute position), categories by (nested-set left, display
/// position). Builders rely on these orders when projecting count results.
///
/// SEO lookups return `Ok(None)` for entities with no indexed slug; a missing
/// row is not an error.
pub trait CatalogService {
    fn manufacturers(&self, language: LanguageId) -> Result<Vec<Manufacturer>>;

    /// Empty when product combinations are disabled store-wide.
    fn attribute_groups(&self, language: LanguageId) -> Result<Vec<AttributeGroup>>;

    /// Empty when product combinations are disabled store-wide.
    fn attributes(&self, language: LanguageId) -> Result<Vec<Attribute>>;

    fn features(&self, language: LanguageId) -> Result<Vec<Feature>>;

    fn feature_values(&self, language: LanguageId, feature: u32) -> Result<Vec<FeatureValue>>;

    fn category_names(&self, language: LanguageId) -> Result<Vec<CategoryName>>;

    fn attribute_group_info(&self, group: u32, language: LanguageId) -> Result<Option<SeoInfo>>;

    fn attribute_info(&self, attribute: u32, language: LanguageId) -> Result<Option<SeoInfo>>;

    fn feature_info(&self, feature: u32, language: LanguageId) -> Result<Option<SeoInfo>>;

    fn feature_value_info(&self, value: u32, language: LanguageId) -> Result<Option<SeoInfo>>;
}
