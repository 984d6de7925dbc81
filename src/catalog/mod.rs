//! Catalog loading and the dependency-ordered build pipeline.
//!
//! Each reference table has its own loader returning `(maps, StageReport)`;
//! [`builder::build`] runs them leaves-first and joins the results into a
//! [`CrsRegistry`](crate::registry::CrsRegistry):
//!
//! ```text
//! units ─┬─ axes ──────────────┐
//!        │                     │
//! areas ─┼─────────────────────┤
//! axis names ─ (axes) ─────────┤
//! methods/params/operations ───┼── crs (geographic, then projected)
//! spheroids ─┬─ datums ────────┘
//! meridians ─┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use crs_registry::{CrsRegistry, TableSet};
//!
//! // Build from the embedded EPSG-subset tables
//! let registry = CrsRegistry::load_embedded();
//! let wgs84 = registry.by_code(4326).unwrap();
//! println!("{wgs84}");
//!
//! // Or from tables fetched by the caller
//! let tables = TableSet::load_dir(std::path::Path::new("tables/"));
//! let registry = CrsRegistry::from_tables(&tables);
//! println!("{}", registry.report());
//! ```

pub mod axes;
pub mod builder;
pub mod datums;
pub mod diagnostics;
pub mod projections;
pub mod reference;
pub mod tables;
pub mod units;
