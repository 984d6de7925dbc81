//! The published, read-only registry.
//!
//! A [`CrsRegistry`] is built once from a [`TableSet`] and never mutated
//! afterwards, so concurrent reads need no locking. Refreshing a catalog
//! means building a new registry and swapping the reference; the
//! [`embedded`] singleton is intentionally build-once for the process
//! lifetime.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use indexmap::IndexSet;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::builder;
use crate::catalog::diagnostics::BuildReport;
use crate::catalog::tables::TableSet;
use crate::core::crs::CoordinateSystem;
use crate::core::types::EPSG;

/// Registry format version reported by the JSON summary export
pub const REGISTRY_VERSION: &str = "1.0.0";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Code-indexed, canonicalizing catalog of coordinate reference systems.
///
/// The same numeric code always yields the same canonical instance for the
/// lifetime of a registry, so consumers may rely on
/// [`CoordinateSystem::ptr_eq`] as a fast path for "same CRS" checks.
#[derive(Debug)]
pub struct CrsRegistry {
    namespace: &'static str,

    /// Systems ordered by authority code
    by_code: BTreeMap<i32, CoordinateSystem>,

    /// Structural-equality interning set in canonical-insertion order
    canonical: IndexSet<CoordinateSystem>,

    /// Per-stage diagnostics of the build that produced this registry
    report: BuildReport,
}

impl CrsRegistry {
    pub(crate) fn from_parts(
        by_code: BTreeMap<i32, CoordinateSystem>,
        canonical: IndexSet<CoordinateSystem>,
        report: BuildReport,
    ) -> Self {
        Self {
            namespace: EPSG,
            by_code,
            canonical,
            report,
        }
    }

    /// Build a registry from a set of reference tables
    #[must_use]
    pub fn from_tables(tables: &TableSet<'_>) -> Self {
        builder::build(tables)
    }

    /// Build from the embedded EPSG-subset dataset
    #[must_use]
    pub fn load_embedded() -> Self {
        Self::from_tables(&TableSet::embedded())
    }

    /// Look up a system by authority code. Unknown codes yield `None`, never
    /// an error.
    #[must_use]
    pub fn by_code(&self, code: i32) -> Option<&CoordinateSystem> {
        self.by_code.get(&code)
    }

    /// Resolve a sequence of optional codes, preserving input order and
    /// dropping absent codes and codes with no match.
    pub fn by_codes<I>(&self, codes: I) -> Vec<CoordinateSystem>
    where
        I: IntoIterator<Item = Option<i32>>,
    {
        codes
            .into_iter()
            .flatten()
            .filter_map(|code| self.by_code(code).cloned())
            .collect()
    }

    /// Return the canonical instance for a structurally-equal interned
    /// system, or the input unchanged when no equal instance exists. A system
    /// built outside the registry stays usable even if not interned.
    #[must_use]
    pub fn canonicalize(&self, crs: &CoordinateSystem) -> CoordinateSystem {
        self.canonical.get(crs).unwrap_or(crs).clone()
    }

    /// All systems in canonical-insertion order
    pub fn all(&self) -> impl Iterator<Item = &CoordinateSystem> {
        self.canonical.iter()
    }

    /// Number of code-indexed systems
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Numeric identifier of a system within this registry's namespace;
    /// 0 for systems governed by a foreign namespace.
    #[must_use]
    pub fn crs_id_of(&self, crs: &CoordinateSystem) -> i32 {
        let authority = crs.authority();
        if authority.namespace == self.namespace {
            authority.code
        } else {
            0
        }
    }

    /// `"EPSG:4326"`-style name of a system within this registry's
    /// namespace; `None` for systems governed by a foreign namespace.
    #[must_use]
    pub fn crs_name_of(&self, crs: &CoordinateSystem) -> Option<String> {
        let authority = crs.authority();
        (authority.namespace == self.namespace).then(|| authority.to_string())
    }

    /// Governing namespace of this registry
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.namespace
    }

    /// Diagnostics of the build that produced this registry
    #[must_use]
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Export a JSON summary of the registry contents.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let summary = RegistrySummary {
            version: REGISTRY_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            namespace: self.namespace.to_string(),
            crs: self
                .by_code
                .values()
                .map(|crs| CrsSummary {
                    code: crs.code(),
                    name: crs.name().to_string(),
                    kind: if crs.is_geographic() {
                        "geographic"
                    } else {
                        "projected"
                    },
                    axes: crs.axes().len(),
                    deprecated: crs.deprecated(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&summary)?)
    }
}

/// Serializable registry summary
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySummary {
    pub version: String,
    pub created_at: String,
    pub namespace: String,
    pub crs: Vec<CrsSummary>,
}

/// One summary line per coordinate system
#[derive(Debug, Clone, Serialize)]
pub struct CrsSummary {
    pub code: i32,
    pub name: String,
    pub kind: &'static str,
    pub axes: usize,
    pub deprecated: bool,
}

/// Access the process-wide registry built from the embedded dataset.
///
/// Built on first use and shared for the lifetime of the program; never
/// rebuilt. Callers that need different tables construct their own
/// [`CrsRegistry`] instead.
pub fn embedded() -> &'static CrsRegistry {
    static REGISTRY: OnceLock<CrsRegistry> = OnceLock::new();
    REGISTRY.get_or_init(CrsRegistry::load_embedded)
}
