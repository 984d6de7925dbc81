//! Core data types for coordinate reference systems.
//!
//! This module provides the immutable value records the catalog is built
//! from:
//!
//! - [`Authority`](types::Authority): namespaced numeric identity key
//! - [`Unit`](unit::Unit): angular/linear unit with a flattenable conversion chain
//! - [`Spheroid`](datum::Spheroid), [`PrimeMeridian`](datum::PrimeMeridian),
//!   [`Datum`](datum::Datum): geodetic reference frame components
//! - [`Area`](area::Area): area of use with an optional bounding box
//! - [`Axis`](axis::Axis): one coordinate dimension, position supplied by the
//!   owning sequence
//! - [`Projection`](projection::Projection): named, parameterized
//!   map-projection descriptor
//! - [`CoordinateSystem`](crs::CoordinateSystem): the published handle over
//!   geographic and projected systems
//!
//! Every record is created exactly once during the load pipeline and never
//! mutated afterwards. Records containing floats implement equality and
//! hashing bitwise so that rows with absent numeric columns (NaN) still
//! intern structurally.

pub mod area;
pub mod axis;
pub mod crs;
pub mod datum;
pub mod projection;
pub mod types;
pub mod unit;
