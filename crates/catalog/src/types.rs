use serde::{Deserialize, Serialize};

pub type LanguageId = u32;
pub type StoreId = u32;

/// A brand entry from the master manufacturer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: u32,
    pub name: String,
}

/// An attribute group (e.g. "Color", "Size"), ordered by its display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub id: u32,
    pub name: String,
    pub is_color_group: bool,
}

/// A single attribute value within a group. `color` carries the swatch hex
/// code when the owning group is a color group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u32,
    pub group_id: u32,
    pub name: String,
    pub color: Option<String>,
}

/// A product feature (e.g. "Composition"), keyed by feature id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: u32,
    pub name: String,
}

/// One concrete value a feature can take on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub id: u32,
    pub feature_id: u32,
    pub value: String,
}

/// Display name for a category, from the master list ordered by tree
/// position (nested-set left value, then display position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryName {
    pub id: u32,
    pub name: String,
}

/// Nested-set coordinates for a category node. Containment is tested by
/// interval nesting: `child.nleft > parent.nleft && child.nright < parent.nright`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: u32,
    pub nleft: u32,
    pub nright: u32,
    pub level_depth: u32,
}

impl CategoryNode {
    pub fn new(id: u32, nleft: u32, nright: u32, level_depth: u32) -> Self {
        Self {
            id,
            nleft,
            nright,
            level_depth,
        }
    }

    /// True when `other` lies strictly inside this node's interval.
    pub fn contains(&self, other: &CategoryNode) -> bool {
        other.nleft > self.nleft && other.nright < self.nright
    }
}

/// URL slug and meta title attached to an indexable facet entity
/// (attribute group, attribute, feature, feature value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoInfo {
    pub url_name: Option<String>,
    pub meta_title: Option<String>,
}

impl SeoInfo {
    pub fn new(url_name: impl Into<String>, meta_title: impl Into<String>) -> Self {
        Self {
            url_name: Some(url_name.into()),
            meta_title: Some(meta_title.into()),
        }
    }
}
