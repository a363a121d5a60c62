use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::StoreId;

/// The facet dimension a definition row configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    Price,
    Weight,
    Condition,
    Quantity,
    Manufacturer,
    AttributeGroup,
    Feature,
    Category,
}

/// UI control hint carried through to the rendered block unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    Slider,
    Checkbox,
    Radio,
    ColorSwatch,
}

/// One configured facet for a scope. Attribute-group and feature facets carry
/// the group/feature id in `reference_id`; singleton facets leave it empty.
/// Uniqueness is (kind, reference_id); display order is `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub kind: FacetKind,
    pub reference_id: Option<u32>,
    pub display_limit: u32,
    pub widget: WidgetType,
    pub position: u32,
}

impl FacetDefinition {
    pub fn new(kind: FacetKind, position: u32) -> Self {
        Self {
            kind,
            reference_id: None,
            display_limit: 0,
            widget: WidgetType::Checkbox,
            position,
        }
    }

    pub fn reference_id(mut self, id: u32) -> Self {
        self.reference_id = Some(id);
        self
    }

    pub fn display_limit(mut self, limit: u32) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn widget(mut self, widget: WidgetType) -> Self {
        self.widget = widget;
        self
    }
}

/// Reader for the facet configuration of a scope.
///
/// Implementations return definitions already ordered by `position`.
pub trait FacetCatalog {
    fn definitions(&self, store: StoreId, category: u32) -> Result<Vec<FacetDefinition>>;
}
