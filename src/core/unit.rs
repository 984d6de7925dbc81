use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::types::{Authority, UnitKind};
use crate::utils::float::{f64_eq, hash_f64};

/// A unit of measure from the unit table.
///
/// `factor` is expressed relative to `base` when one is present, otherwise it
/// is already in the SI base of the unit's kind (radians for angular units,
/// metres for linear units). A unit never references itself as its own base;
/// the self-referencing rows in the source table mean "this unit is the base"
/// and load with `base = None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub kind: UnitKind,

    /// Base unit of the same kind, when the source defines this unit in terms
    /// of another one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Box<Unit>>,

    /// Conversion factor to `base` (or to the SI base when `base` is absent);
    /// NaN when the source column was blank
    pub factor: f64,

    pub authority: Authority,
    pub deprecated: bool,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitKind, factor: f64, authority: Authority) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            factor,
            authority,
            deprecated: false,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: Unit) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    /// Flatten the conversion chain: the factor from this unit to the SI base
    /// of its kind. NaN anywhere in the chain propagates.
    #[must_use]
    pub fn si_factor(&self) -> f64 {
        match &self.base {
            Some(base) => self.factor * base.si_factor(),
            None => self.factor,
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.base == other.base
            && f64_eq(self.factor, other.factor)
            && self.authority == other.authority
            && self.deprecated == other.deprecated
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.base.hash(state);
        hash_f64(self.factor, state);
        self.authority.hash(state);
        self.deprecated.hash(state);
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.authority)
    }
}
