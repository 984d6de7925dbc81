use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::core::types::Authority;
use crate::utils::float::{f64_eq, hash_f64};

/// A named, parameterized map-projection descriptor.
///
/// `name` is the coordinate-operation method name with spaces replaced by
/// underscores; parameter keys are lower-cased with spaces replaced by
/// underscores. The authority identifies the operation *method*, not the
/// operation itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub name: String,
    pub authority: Authority,
    pub parameters: BTreeMap<String, f64>,
}

impl Projection {
    pub fn new(name: impl Into<String>, authority: Authority) -> Self {
        Self {
            name: name.into(),
            authority,
            parameters: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Look up a parameter by its normalized name
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}

impl PartialEq for Projection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.authority == other.authority
            && self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(other.parameters.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && f64_eq(*va, *vb))
    }
}

impl Eq for Projection {}

impl Hash for Projection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.authority.hash(state);
        // BTreeMap iteration is key-ordered, so this is deterministic
        for (key, value) in &self.parameters {
            key.hash(state);
            hash_f64(*value, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transverse_mercator() -> Projection {
        Projection::new("Transverse_Mercator", Authority::epsg(9807))
            .with_parameter("latitude_of_natural_origin", 49.0)
            .with_parameter("longitude_of_natural_origin", -2.0)
            .with_parameter("scale_factor_at_natural_origin", 0.999_601_271_7)
            .with_parameter("false_easting", 400_000.0)
            .with_parameter("false_northing", -100_000.0)
    }

    #[test]
    fn test_parameter_lookup() {
        let projection = transverse_mercator();
        assert_eq!(projection.parameter("false_easting"), Some(400_000.0));
        assert_eq!(projection.parameter("no_such_parameter"), None);
    }

    #[test]
    fn test_equality_over_parameters() {
        assert_eq!(transverse_mercator(), transverse_mercator());

        let shifted = transverse_mercator().with_parameter("false_easting", 0.0);
        assert_ne!(transverse_mercator(), shifted);
    }

    #[test]
    fn test_nan_parameter_compares_equal() {
        let a = Projection::new("Mercator_1SP", Authority::epsg(9804))
            .with_parameter("scale_factor_at_natural_origin", f64::NAN);
        let b = Projection::new("Mercator_1SP", Authority::epsg(9804))
            .with_parameter("scale_factor_at_natural_origin", f64::NAN);
        assert_eq!(a, b);
    }
}
