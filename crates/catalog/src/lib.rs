mod definition;
mod error;
mod memory;
mod service;
mod types;

pub use definition::{FacetCatalog, FacetDefinition, FacetKind, WidgetType};
pub use error::{CatalogError, Result};
pub use memory::MemoryCatalog;
pub use service::CatalogService;
pub use types::{
    Attribute, AttributeGroup, CategoryName, CategoryNode, Feature, FeatureValue, LanguageId,
    Manufacturer, SeoInfo, StoreId,
};
