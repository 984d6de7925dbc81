use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::types::Authority;
use crate::utils::float::{f64_eq, hash_f64};

/// A reference spheroid (ellipsoid of revolution).
///
/// At least one of `semi_minor_axis` / `inverse_flattening` is normally
/// present in the source table; both NaN is a data-quality condition the
/// loaders tolerate rather than reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spheroid {
    pub name: String,

    /// Equatorial radius in metres
    pub semi_major_axis: f64,

    /// Polar radius in metres; NaN when the source column was blank
    pub semi_minor_axis: f64,

    /// 1/f; NaN when the source column was blank
    pub inverse_flattening: f64,

    pub authority: Authority,
    pub deprecated: bool,
}

impl Spheroid {
    pub fn new(name: impl Into<String>, semi_major_axis: f64, authority: Authority) -> Self {
        Self {
            name: name.into(),
            semi_major_axis,
            semi_minor_axis: f64::NAN,
            inverse_flattening: f64::NAN,
            authority,
            deprecated: false,
        }
    }

    #[must_use]
    pub fn with_inverse_flattening(mut self, inverse_flattening: f64) -> Self {
        self.inverse_flattening = inverse_flattening;
        self
    }

    #[must_use]
    pub fn with_semi_minor_axis(mut self, semi_minor_axis: f64) -> Self {
        self.semi_minor_axis = semi_minor_axis;
        self
    }
}

impl PartialEq for Spheroid {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && f64_eq(self.semi_major_axis, other.semi_major_axis)
            && f64_eq(self.semi_minor_axis, other.semi_minor_axis)
            && f64_eq(self.inverse_flattening, other.inverse_flattening)
            && self.authority == other.authority
            && self.deprecated == other.deprecated
    }
}

impl Eq for Spheroid {}

impl Hash for Spheroid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        hash_f64(self.semi_major_axis, state);
        hash_f64(self.semi_minor_axis, state);
        hash_f64(self.inverse_flattening, state);
        self.authority.hash(state);
        self.deprecated.hash(state);
    }
}

/// A prime meridian definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeMeridian {
    pub name: String,

    /// Longitude from Greenwich in degrees; NaN when the source column was blank
    pub longitude_degrees: f64,

    pub authority: Authority,
    pub deprecated: bool,
}

impl PrimeMeridian {
    pub fn new(name: impl Into<String>, longitude_degrees: f64, authority: Authority) -> Self {
        Self {
            name: name.into(),
            longitude_degrees,
            authority,
            deprecated: false,
        }
    }
}

impl PartialEq for PrimeMeridian {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && f64_eq(self.longitude_degrees, other.longitude_degrees)
            && self.authority == other.authority
            && self.deprecated == other.deprecated
    }
}

impl Eq for PrimeMeridian {}

impl Hash for PrimeMeridian {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        hash_f64(self.longitude_degrees, state);
        self.authority.hash(state);
        self.deprecated.hash(state);
    }
}

/// A geodetic reference frame: spheroid + prime meridian.
///
/// Only rows of the geodetic kind are materialized from the datum table.
/// An unresolvable spheroid or prime meridian reference leaves the field
/// unset; consumers treat that as insufficient data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datum {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spheroid: Option<Spheroid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_meridian: Option<PrimeMeridian>,

    pub authority: Authority,
    pub deprecated: bool,
}

impl Datum {
    pub fn new(name: impl Into<String>, authority: Authority) -> Self {
        Self {
            name: name.into(),
            spheroid: None,
            prime_meridian: None,
            authority,
            deprecated: false,
        }
    }

    #[must_use]
    pub fn with_spheroid(mut self, spheroid: Spheroid) -> Self {
        self.spheroid = Some(spheroid);
        self
    }

    #[must_use]
    pub fn with_prime_meridian(mut self, prime_meridian: PrimeMeridian) -> Self {
        self.prime_meridian = Some(prime_meridian);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wgs84_spheroid() -> Spheroid {
        Spheroid::new("WGS 84", 6_378_137.0, Authority::epsg(7030))
            .with_inverse_flattening(298.257_223_563)
    }

    #[test]
    fn test_spheroid_absent_numerics_compare_equal() {
        let a = Spheroid::new("Sphere", 6_371_000.0, Authority::epsg(7035));
        let b = Spheroid::new("Sphere", 6_371_000.0, Authority::epsg(7035));
        assert!(a.semi_minor_axis.is_nan());
        assert!(a.inverse_flattening.is_nan());
        assert_eq!(a, b);
    }

    #[test]
    fn test_spheroid_numeric_mismatch() {
        let a = wgs84_spheroid();
        let b = wgs84_spheroid().with_inverse_flattening(298.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_datum_equality_includes_components() {
        let greenwich = PrimeMeridian::new("Greenwich", 0.0, Authority::epsg(8901));
        let a = Datum::new("World Geodetic System 1984", Authority::epsg(6326))
            .with_spheroid(wgs84_spheroid())
            .with_prime_meridian(greenwich.clone());
        let b = Datum::new("World Geodetic System 1984", Authority::epsg(6326))
            .with_spheroid(wgs84_spheroid())
            .with_prime_meridian(greenwich);
        assert_eq!(a, b);

        let c = Datum::new("World Geodetic System 1984", Authority::epsg(6326));
        assert_ne!(a, c);
    }
}
