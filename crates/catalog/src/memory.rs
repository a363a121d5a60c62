use std::collections::HashMap;

use crate::definition::{FacetCatalog, FacetDefinition};
use crate::error::Result;
use crate::service::CatalogService;
use crate::types::{
    Attribute, AttributeGroup, CategoryName, Feature, FeatureValue, LanguageId, Manufacturer,
    SeoInfo, StoreId,
};

/// In-memory catalog backed by plain vectors, preserving insertion order of
/// every master list. Used by tests and by embedders that load reference data
/// up front.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    manufacturers: Vec<Manufacturer>,
    attribute_groups: Vec<AttributeGroup>,
    attributes: Vec<Attribute>,
    features: Vec<Feature>,
    feature_values: Vec<FeatureValue>,
    category_names: Vec<CategoryName>,
    attribute_group_infos: HashMap<u32, SeoInfo>,
    attribute_infos: HashMap<u32, SeoInfo>,
    feature_infos: HashMap<u32, SeoInfo>,
    feature_value_infos: HashMap<u32, SeoInfo>,
    definitions: Vec<FacetDefinition>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manufacturer(mut self, id: u32, name: impl Into<String>) -> Self {
        self.manufacturers.push(Manufacturer {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_attribute_group(
        mut self,
        id: u32,
        name: impl Into<String>,
        is_color_group: bool,
    ) -> Self {
        self.attribute_groups.push(AttributeGroup {
            id,
            name: name.into(),
            is_color_group,
        });
        self
    }

    pub fn with_attribute(
        mut self,
        id: u32,
        group_id: u32,
        name: impl Into<String>,
        color: Option<&str>,
    ) -> Self {
        self.attributes.push(Attribute {
            id,
            group_id,
            name: name.into(),
            color: color.map(str::to_owned),
        });
        self
    }

    pub fn with_feature(mut self, id: u32, name: impl Into<String>) -> Self {
        self.features.push(Feature {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_feature_value(
        mut self,
        id: u32,
        feature_id: u32,
        value: impl Into<String>,
    ) -> Self {
        self.feature_values.push(FeatureValue {
            id,
            feature_id,
            value: value.into(),
        });
        self
    }

    pub fn with_category_name(mut self, id: u32, name: impl Into<String>) -> Self {
        self.category_names.push(CategoryName {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_attribute_group_info(mut self, group: u32, info: SeoInfo) -> Self {
        self.attribute_group_infos.insert(group, info);
        self
    }

    pub fn with_attribute_info(mut self, attribute: u32, info: SeoInfo) -> Self {
        self.attribute_infos.insert(attribute, info);
        self
    }

    pub fn with_feature_info(mut self, feature: u32, info: SeoInfo) -> Self {
        self.feature_infos.insert(feature, info);
        self
    }

    pub fn with_feature_value_info(mut self, value: u32, info: SeoInfo) -> Self {
        self.feature_value_infos.insert(value, info);
        self
    }

    pub fn with_definition(mut self, definition: FacetDefinition) -> Self {
        self.definitions.push(definition);
        self.definitions.sort_by_key(|d| d.position);
        self
    }
}

impl CatalogService for MemoryCatalog {
    fn manufacturers(&self, _language: LanguageId) -> Result<Vec<Manufacturer>> {
        Ok(self.manufacturers.clone())
    }

    fn attribute_groups(&self, _language: LanguageId) -> Result<Vec<AttributeGroup>> {
        Ok(self.attribute_groups.clone())
    }

    fn attributes(&self, _language: LanguageId) -> Result<Vec<Attribute>> {
        Ok(self.attributes.clone())
    }

    fn features(&self, _language: LanguageId) -> Result<Vec<Feature>> {
        Ok(self.features.clone())
    }

    fn feature_values(&self, _language: LanguageId, feature: u32) -> Result<Vec<FeatureValue>> {
        Ok(self
            .feature_values
            .iter()
            .filter(|value| value.feature_id == feature)
            .cloned()
            .collect())
    }

    fn category_names(&self, _language: LanguageId) -> Result<Vec<CategoryName>> {
        Ok(self.category_names.clone())
    }

    fn attribute_group_info(&self, group: u32, _language: LanguageId) -> Result<Option<SeoInfo>> {
        Ok(self.attribute_group_infos.get(&group).cloned())
    }

    fn attribute_info(&self, attribute: u32, _language: LanguageId) -> Result<Option<SeoInfo>> {
        Ok(self.attribute_infos.get(&attribute).cloned())
    }

    fn feature_info(&self, feature: u32, _language: LanguageId) -> Result<Option<SeoInfo>> {
        Ok(self.feature_infos.get(&feature).cloned())
    }

    fn feature_value_info(&self, value: u32, _language: LanguageId) -> Result<Option<SeoInfo>> {
        Ok(self.feature_value_infos.get(&value).cloned())
    }
}

impl FacetCatalog for MemoryCatalog {
    fn definitions(&self, _store: StoreId, _category: u32) -> Result<Vec<FacetDefinition>> {
        Ok(self.definitions.clone())
    }
}
