use serde::{Deserialize, Serialize};

/// One coordinate dimension of a coordinate system.
///
/// Axes belong to an ordered sequence; the position is significant and is
/// supplied by the owning sequence, not stored on the axis itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,

    /// Directional sense, e.g. `"north"` or `"east"`
    pub direction: String,
}

impl Axis {
    pub fn new(name: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: direction.into(),
        }
    }

    /// Placeholder used to densify an axis sequence while rows for the
    /// earlier positions have not been seen yet.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// True for padding entries that were never overwritten by a real row
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.name.is_empty() && self.direction.is_empty()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            write!(f, "<unset>")
        } else {
            write!(f, "{}/{}", self.name, self.direction)
        }
    }
}
