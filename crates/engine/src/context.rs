use facetnav_adapter::ProductCondition;
use facetnav_catalog::{CategoryNode, LanguageId, StoreId};
use serde::{Deserialize, Serialize};

/// Everything about the viewer, store and configuration the builders need,
/// threaded explicitly into every computation instead of read from a
/// request-global singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub language: LanguageId,
    pub store: StoreId,
    /// Navigation parent; category aggregation is restricted to its subtree.
    pub parent: CategoryNode,
    /// The price facet is skipped entirely for viewer classes that must not
    /// see prices.
    pub show_prices: bool,
    pub price_format: PriceFormat,
    pub weight_unit: String,
    /// Selects the availability policy: quantity buckets when disabled,
    /// three-state stock reconciliation when enabled.
    pub stock_management: bool,
    /// Store-wide backorder policy, consulted for products that defer to it.
    pub backorder_allowed: bool,
    /// Maximum subtree depth below the parent; 0 disables the depth cap.
    pub category_depth: u32,
    /// When set, category aggregation is restricted to categories visible to
    /// the viewer's customer groups.
    pub group_visibility: bool,
    /// Groups of an authenticated viewer; empty means unauthenticated.
    pub customer_groups: Vec<u32>,
    /// Group assumed for unauthenticated viewers.
    pub default_customer_group: u32,
    pub labels: FacetLabels,
}

impl RequestContext {
    pub fn new(language: LanguageId, store: StoreId, parent: CategoryNode) -> Self {
        Self {
            language,
            store,
            parent,
            show_prices: true,
            price_format: PriceFormat::default(),
            weight_unit: "kg".to_owned(),
            stock_management: false,
            backorder_allowed: false,
            category_depth: 1,
            group_visibility: false,
            customer_groups: Vec::new(),
            default_customer_group: 1,
            labels: FacetLabels::default(),
        }
    }
}

/// Locale price-display specification, passed through to range blocks
/// unchanged. The engine never formats a price itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub currency_symbol: String,
    pub currency_code: String,
    pub positive_pattern: String,
    pub negative_pattern: String,
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
    pub grouping_used: bool,
    pub primary_group_size: u32,
    pub secondary_group_size: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_owned(),
            currency_code: "EUR".to_owned(),
            positive_pattern: "¤#,##0.00".to_owned(),
            negative_pattern: "-¤#,##0.00".to_owned(),
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            grouping_used: true,
            primary_group_size: 3,
            secondary_group_size: 3,
        }
    }
}

/// Localized captions for the singleton blocks and their fixed buckets.
/// Defaults are English; translating them happens upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetLabels {
    pub price: String,
    pub weight: String,
    pub condition: String,
    pub condition_new: String,
    pub condition_used: String,
    pub condition_refurbished: String,
    pub availability: String,
    pub not_available: String,
    pub in_stock: String,
    pub brand: String,
    pub categories: String,
}

impl FacetLabels {
    pub fn condition_label(&self, condition: ProductCondition) -> &str {
        match condition {
            ProductCondition::New => &self.condition_new,
            ProductCondition::Used => &self.condition_used,
            ProductCondition::Refurbished => &self.condition_refurbished,
        }
    }
}

impl Default for FacetLabels {
    fn default() -> Self {
        Self {
            price: "Price".to_owned(),
            weight: "Weight".to_owned(),
            condition: "Condition".to_owned(),
            condition_new: "New".to_owned(),
            condition_used: "Used".to_owned(),
            condition_refurbished: "Refurbished".to_owned(),
            availability: "Availability".to_owned(),
            not_available: "Not available".to_owned(),
            in_stock: "In stock".to_owned(),
            brand: "Brand".to_owned(),
            categories: "Categories".to_owned(),
        }
    }
}
