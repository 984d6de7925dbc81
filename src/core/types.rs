use serde::{Deserialize, Serialize};

/// Namespace of the registry this crate ships tables for.
pub const EPSG: &str = "EPSG";

/// Identity key into the source registry (e.g. an EPSG code).
///
/// Two entities with equal `Authority` are the same real-world definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authority {
    /// Governing namespace, e.g. `"EPSG"`
    pub namespace: String,

    /// Numeric code within the namespace
    pub code: i32,
}

impl Authority {
    pub fn new(namespace: impl Into<String>, code: i32) -> Self {
        Self {
            namespace: namespace.into(),
            code,
        }
    }

    /// An authority in the EPSG namespace
    #[must_use]
    pub fn epsg(code: i32) -> Self {
        Self::new(EPSG, code)
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.code)
    }
}

/// Measurement kind of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Plane angle; SI base is the radian
    Angular,
    /// Length; SI base is the metre
    Linear,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Angular => write!(f, "angular"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_display() {
        assert_eq!(Authority::epsg(4326).to_string(), "EPSG:4326");
        assert_eq!(Authority::new("ESRI", 102_100).to_string(), "ESRI:102100");
    }

    #[test]
    fn test_authority_equality() {
        assert_eq!(Authority::epsg(4326), Authority::epsg(4326));
        assert_ne!(Authority::epsg(4326), Authority::epsg(4269));
        assert_ne!(Authority::epsg(4326), Authority::new("ESRI", 4326));
    }
}
