use serde::{Deserialize, Serialize};

use crate::filter::{OutOfStockPolicy, ProductCondition};

/// One indexed product row as the in-memory executor sees it.
///
/// `attributes` pairs each attribute id with its owning group id, and
/// `feature_values` each feature-value id with its owning feature id, so
/// grouped aggregations can restrict enumeration by owner without a second
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub price: f64,
    pub weight: f64,
    pub condition: ProductCondition,
    pub quantity: u32,
    pub out_of_stock: OutOfStockPolicy,
    pub manufacturer: Option<u32>,
    pub attributes: Vec<(u32, u32)>,
    pub feature_values: Vec<(u32, u32)>,
    pub categories: Vec<u32>,
}

impl ProductRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            price: 0.0,
            weight: 0.0,
            condition: ProductCondition::New,
            quantity: 0,
            out_of_stock: OutOfStockPolicy::Deny,
            manufacturer: None,
            attributes: Vec::new(),
            feature_values: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn condition(mut self, condition: ProductCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn out_of_stock(mut self, policy: OutOfStockPolicy) -> Self {
        self.out_of_stock = policy;
        self
    }

    pub fn manufacturer(mut self, manufacturer: u32) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn attribute(mut self, attribute: u32, group: u32) -> Self {
        self.attributes.push((attribute, group));
        self
    }

    pub fn feature_value(mut self, value: u32, feature: u32) -> Self {
        self.feature_values.push((value, feature));
        self
    }

    pub fn category(mut self, category: u32) -> Self {
        self.categories.push(category);
        self
    }
}
