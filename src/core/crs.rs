use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::area::Area;
use crate::core::axis::Axis;
use crate::core::datum::{Datum, PrimeMeridian};
use crate::core::projection::Projection;
use crate::core::types::Authority;
use crate::core::unit::Unit;

/// A geographic (latitude/longitude) coordinate reference system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeographicCrs {
    pub code: i32,
    pub name: String,

    /// Geodetic datum this system is built on. A datum that loaded with an
    /// unset spheroid or meridian is carried as-is; consumers treat those as
    /// insufficient data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<Datum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_unit: Option<Unit>,

    /// Ordered axis sequence; position in the list is the axis order
    pub axes: Vec<Axis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,

    pub authority: Authority,
    pub deprecated: bool,
}

impl GeographicCrs {
    /// Prime meridian, derived from the datum rather than stored on the row
    #[must_use]
    pub fn prime_meridian(&self) -> Option<&PrimeMeridian> {
        self.datum.as_ref()?.prime_meridian.as_ref()
    }
}

/// A projected coordinate reference system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectedCrs {
    pub code: i32,
    pub name: String,

    /// The geographic system this projection is defined over. A projected
    /// system is never built without one.
    pub source: Arc<GeographicCrs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_unit: Option<Unit>,

    /// Ordered axis sequence; position in the list is the axis order
    pub axes: Vec<Axis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,

    pub authority: Authority,
    pub deprecated: bool,
}

/// A coordinate reference system handle.
///
/// The variants hold `Arc`s, so cloning a `CoordinateSystem` is cheap and
/// canonicalized instances share storage. Equality and hashing are fully
/// structural (every field participates); [`CoordinateSystem::ptr_eq`] is the
/// fast path for "same canonical instance".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    Geographic(Arc<GeographicCrs>),
    Projected(Arc<ProjectedCrs>),
}

impl CoordinateSystem {
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Geographic(crs) => crs.code,
            Self::Projected(crs) => crs.code,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Geographic(crs) => &crs.name,
            Self::Projected(crs) => &crs.name,
        }
    }

    #[must_use]
    pub fn authority(&self) -> &Authority {
        match self {
            Self::Geographic(crs) => &crs.authority,
            Self::Projected(crs) => &crs.authority,
        }
    }

    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        match self {
            Self::Geographic(crs) => &crs.axes,
            Self::Projected(crs) => &crs.axes,
        }
    }

    #[must_use]
    pub fn area(&self) -> Option<&Area> {
        match self {
            Self::Geographic(crs) => crs.area.as_ref(),
            Self::Projected(crs) => crs.area.as_ref(),
        }
    }

    #[must_use]
    pub fn deprecated(&self) -> bool {
        match self {
            Self::Geographic(crs) => crs.deprecated,
            Self::Projected(crs) => crs.deprecated,
        }
    }

    #[must_use]
    pub fn is_geographic(&self) -> bool {
        matches!(self, Self::Geographic(_))
    }

    #[must_use]
    pub fn as_geographic(&self) -> Option<&Arc<GeographicCrs>> {
        match self {
            Self::Geographic(crs) => Some(crs),
            Self::Projected(_) => None,
        }
    }

    #[must_use]
    pub fn as_projected(&self) -> Option<&Arc<ProjectedCrs>> {
        match self {
            Self::Projected(crs) => Some(crs),
            Self::Geographic(_) => None,
        }
    }

    /// True when both handles point at the same interned instance.
    /// Implies structural equality; the converse only holds for instances
    /// that went through the same registry's canonicalization.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Geographic(a), Self::Geographic(b)) => Arc::ptr_eq(a, b),
            (Self::Projected(a), Self::Projected(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geographic(crs) => write!(f, "{} [{}] (geographic)", crs.name, crs.authority),
            Self::Projected(crs) => write!(f, "{} [{}] (projected)", crs.name, crs.authority),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wgs84() -> GeographicCrs {
        GeographicCrs {
            code: 4326,
            name: "WGS 84".to_string(),
            datum: None,
            angular_unit: None,
            axes: vec![
                Axis::new("Geodetic latitude", "north"),
                Axis::new("Geodetic longitude", "east"),
            ],
            area: None,
            authority: Authority::epsg(4326),
            deprecated: false,
        }
    }

    #[test]
    fn test_structural_equality_across_instances() {
        let a = CoordinateSystem::Geographic(Arc::new(wgs84()));
        let b = CoordinateSystem::Geographic(Arc::new(wgs84()));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_ptr_eq_after_clone() {
        let a = CoordinateSystem::Geographic(Arc::new(wgs84()));
        let b = a.clone();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_accessors() {
        let crs = CoordinateSystem::Geographic(Arc::new(wgs84()));
        assert_eq!(crs.code(), 4326);
        assert_eq!(crs.name(), "WGS 84");
        assert_eq!(crs.axes().len(), 2);
        assert!(crs.is_geographic());
        assert!(!crs.deprecated());
        assert!(crs.as_projected().is_none());
    }

    #[test]
    fn test_variant_mismatch_not_equal() {
        let geographic = CoordinateSystem::Geographic(Arc::new(wgs84()));
        let projected = CoordinateSystem::Projected(Arc::new(ProjectedCrs {
            code: 32631,
            name: "WGS 84 / UTM zone 31N".to_string(),
            source: Arc::new(wgs84()),
            projection: None,
            linear_unit: None,
            axes: Vec::new(),
            area: None,
            authority: Authority::epsg(32631),
            deprecated: false,
        }));
        assert_ne!(geographic, projected);
        assert!(!geographic.ptr_eq(&projected));
    }
}
