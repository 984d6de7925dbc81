//! # crs-registry
//!
//! A library for building an in-memory catalog of geodetic Coordinate
//! Reference Systems (CRSs) from EPSG-style flat reference tables.
//!
//! The source registry ships as a set of interrelated tab-separated tables:
//! units, areas, axes, spheroids, prime meridians, datums, coordinate
//! operations, and the coordinate-reference-systems table itself. The tables
//! form a dependency graph, unit definitions chain through base units, and
//! axis rows arrive sparse and unordered. `crs-registry` resolves all of that
//! once, up front, and publishes a frozen registry with fast canonical
//! lookup.
//!
//! ## Features
//!
//! - **Code lookup**: O(log n) `by_code` over an ordered map, no errors for
//!   unknown codes
//! - **Canonicalization**: structurally-equal systems collapse to one shared
//!   instance, so consumers can use pointer equality for "same CRS" checks
//! - **Partial-failure tolerance**: a missing table or malformed row degrades
//!   only what depends on it; the build itself never fails
//! - **Observable diagnostics**: every stage reports rows read, loaded, and
//!   skipped with reasons
//! - **Embedded dataset**: a curated EPSG subset compiled into the binary,
//!   with an optional process-wide singleton
//!
//! ## Example
//!
//! ```rust
//! use crs_registry::{CoordinateSystem, CrsRegistry};
//!
//! // Load the embedded catalog of common systems
//! let registry = CrsRegistry::load_embedded();
//!
//! let wgs84 = registry.by_code(4326).expect("embedded dataset has WGS 84");
//! assert_eq!(registry.crs_name_of(wgs84).as_deref(), Some("EPSG:4326"));
//!
//! // Structurally-equal instances canonicalize to the same pointer
//! let other = registry.canonicalize(&wgs84.clone());
//! assert!(other.ptr_eq(wgs84));
//!
//! for crs in registry.all() {
//!     println!("{crs}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: per-table loaders and the dependency-ordered build pipeline
//! - [`core`]: immutable value records for units, datums, axes, areas,
//!   projections and coordinate systems
//! - [`parsing`]: row-level helpers for the tab-separated tables
//! - [`registry`]: the published read-only registry and process singleton

pub mod catalog;
pub mod core;
pub mod parsing;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::diagnostics::{BuildReport, StageReport};
pub use catalog::tables::TableSet;
pub use core::crs::{CoordinateSystem, GeographicCrs, ProjectedCrs};
pub use core::types::{Authority, UnitKind};
pub use registry::{embedded, CrsRegistry};
