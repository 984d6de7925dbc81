use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::types::Authority;
use crate::utils::float::{f64_eq, hash_f64};

/// Geographic bounding box in degrees.
///
/// `min_x`/`max_x` are west/east longitudes, `min_y`/`max_y` south/north
/// latitudes. Individual members may be NaN when the source column was blank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        f64_eq(self.min_x, other.min_x)
            && f64_eq(self.min_y, other.min_y)
            && f64_eq(self.max_x, other.max_x)
            && f64_eq(self.max_y, other.max_y)
    }
}

impl Eq for BoundingBox {}

impl Hash for BoundingBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.min_x, state);
        hash_f64(self.min_y, state);
        hash_f64(self.max_x, state);
        hash_f64(self.max_y, state);
    }
}

/// Area of use for a coordinate reference system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub name: String,

    /// Extent of the area; `None` when the source row carried no extent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    pub authority: Authority,
    pub deprecated: bool,
}

impl Area {
    pub fn new(name: impl Into<String>, authority: Authority) -> Self {
        Self {
            name: name.into(),
            bounding_box: None,
            authority,
            deprecated: false,
        }
    }

    #[must_use]
    pub fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }
}
