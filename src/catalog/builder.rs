//! The dependency-ordered build pipeline.
//!
//! Stages run leaves-first over the table set: units, then the flat reference
//! tables, then axes and projection metadata, then datums, then two passes
//! over the coordinate-reference-system table (geographic rows first, so a
//! projected row can resolve its source system). Each stage is a pure
//! function of the table text plus prior-stage outputs; no stage mutates
//! another stage's maps.
//!
//! The build never fails: every row-level problem degrades to absence from
//! the result plus a diagnostics entry.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::debug;

use crate::catalog::axes::AxisResolver;
use crate::catalog::datums::load_datums;
use crate::catalog::diagnostics::{BuildReport, StageReport};
use crate::catalog::projections::ProjectionCatalog;
use crate::catalog::reference::{load_areas, load_axis_names, load_prime_meridians, load_spheroids};
use crate::catalog::tables::TableSet;
use crate::catalog::units::UnitCatalog;
use crate::core::area::Area;
use crate::core::crs::{CoordinateSystem, GeographicCrs, ProjectedCrs};
use crate::core::datum::Datum;
use crate::core::types::Authority;
use crate::parsing::row::{data_rows, parse_code, parse_flag, split};
use crate::registry::CrsRegistry;

const KIND_FIELD: usize = 4;
const GEOGRAPHIC_2D: &str = "geographic 2D";
const PROJECTED: &str = "projected";
const GEOGRAPHIC_COLUMNS: usize = 7;
const PROJECTED_COLUMNS: usize = 8;

/// Build a registry from a table set.
#[must_use]
pub fn build(tables: &TableSet<'_>) -> CrsRegistry {
    let mut report = BuildReport::default();

    let (units, stage) = UnitCatalog::load(tables.units.as_deref());
    report.push(stage);

    let (areas, stage) = load_areas(tables.areas.as_deref());
    report.push(stage);

    let (axis_names, stage) = load_axis_names(tables.axis_names.as_deref());
    report.push(stage);

    let (axes, stage) = AxisResolver::load(tables.axes.as_deref(), &axis_names, &units);
    report.push(stage);

    let (projections, stages) = ProjectionCatalog::load(
        tables.methods.as_deref(),
        tables.parameter_names.as_deref(),
        tables.parameter_values.as_deref(),
        tables.operations.as_deref(),
    );
    report.extend(stages);

    let (spheroids, stage) = load_spheroids(tables.spheroids.as_deref());
    report.push(stage);

    let (prime_meridians, stage) = load_prime_meridians(tables.prime_meridians.as_deref());
    report.push(stage);

    let (datums, stage) = load_datums(tables.datums.as_deref(), &spheroids, &prime_meridians);
    report.push(stage);

    let mut builder = CrsBuilder::default();
    let stage = builder.load_crs(tables.crs.as_deref(), &areas, &axes, &datums, &projections);
    report.push(stage);

    debug!(
        systems = builder.by_code.len(),
        skipped = report.total_skipped(),
        "registry build complete"
    );

    CrsRegistry::from_parts(builder.by_code, builder.canonical, report)
}

/// Accumulates coordinate systems across the two passes, interning each one
/// through the canonical set as it is built.
#[derive(Debug, Default)]
struct CrsBuilder {
    by_code: BTreeMap<i32, CoordinateSystem>,
    canonical: IndexSet<CoordinateSystem>,
}

impl CrsBuilder {
    fn load_crs(
        &mut self,
        text: Option<&str>,
        areas: &HashMap<i32, Area>,
        axes: &AxisResolver,
        datums: &HashMap<i32, Datum>,
        projections: &ProjectionCatalog,
    ) -> StageReport {
        let Some(text) = text else {
            return StageReport::missing("crs");
        };

        let mut report = StageReport::new("crs");

        // Pass 1: geographic systems only
        for (line_no, line) in data_rows(text) {
            report.rows += 1;
            let fields = split(line);
            if fields.get(KIND_FIELD).copied() != Some(GEOGRAPHIC_2D) {
                continue;
            }
            if fields.len() != GEOGRAPHIC_COLUMNS {
                report.skip(format!(
                    "line {line_no}: expected {GEOGRAPHIC_COLUMNS} fields for a geographic row, found {}",
                    fields.len()
                ));
                continue;
            }

            let Some(code) = parse_code(fields[0]) else {
                report.skip(format!("line {line_no}: system code is not numeric"));
                continue;
            };
            let cs_code = parse_code(fields[2]);
            let area_code = parse_code(fields[3]);
            let datum_code = parse_code(fields[5]);

            // A geographic system cannot satisfy its shape without a datum
            let Some(datum) = datum_code.and_then(|code| datums.get(&code)) else {
                report.skip(format!(
                    "line {line_no}: no geodetic datum for system {code}"
                ));
                continue;
            };

            let crs = GeographicCrs {
                code,
                name: fields[1].to_string(),
                datum: Some(datum.clone()),
                angular_unit: cs_code
                    .and_then(|code| axes.angular_unit_by_cs.get(&code))
                    .cloned(),
                axes: cs_code
                    .and_then(|code| axes.axes_by_cs.get(&code))
                    .cloned()
                    .unwrap_or_default(),
                area: area_code.and_then(|code| areas.get(&code)).cloned(),
                authority: Authority::epsg(code),
                deprecated: parse_flag(fields[6]),
            };

            self.insert(code, CoordinateSystem::Geographic(Arc::new(crs)));
            report.loaded += 1;
        }

        // Pass 2: projected systems, which require their source geographic
        // system to already exist
        for (line_no, line) in data_rows(text) {
            let fields = split(line);
            if fields.get(KIND_FIELD).copied() != Some(PROJECTED) {
                continue;
            }
            if fields.len() != PROJECTED_COLUMNS {
                report.skip(format!(
                    "line {line_no}: expected {PROJECTED_COLUMNS} fields for a projected row, found {}",
                    fields.len()
                ));
                continue;
            }

            let Some(code) = parse_code(fields[0]) else {
                report.skip(format!("line {line_no}: system code is not numeric"));
                continue;
            };
            let cs_code = parse_code(fields[2]);
            let area_code = parse_code(fields[3]);
            let source_code = parse_code(fields[5]);
            let conversion_code = parse_code(fields[6]);

            // Load-critical join: no source geographic system, no row
            let source = source_code
                .and_then(|code| self.by_code.get(&code))
                .and_then(CoordinateSystem::as_geographic)
                .cloned();
            let Some(source) = source else {
                report.skip(format!(
                    "line {line_no}: no source geographic system for projected system {code}"
                ));
                continue;
            };

            let crs = ProjectedCrs {
                code,
                name: fields[1].to_string(),
                source,
                projection: conversion_code
                    .and_then(|code| projections.get(code))
                    .cloned(),
                linear_unit: cs_code
                    .and_then(|code| axes.linear_unit_by_cs.get(&code))
                    .cloned(),
                axes: cs_code
                    .and_then(|code| axes.axes_by_cs.get(&code))
                    .cloned()
                    .unwrap_or_default(),
                area: area_code.and_then(|code| areas.get(&code)).cloned(),
                authority: Authority::epsg(code),
                deprecated: parse_flag(fields[7]),
            };

            self.insert(code, CoordinateSystem::Projected(Arc::new(crs)));
            report.loaded += 1;
        }

        report
    }

    /// Intern a freshly-built system and index it by code. The first
    /// structurally-equal instance inserted stays the canonical
    /// representative; later equals are discarded in its favor.
    fn insert(&mut self, code: i32, crs: CoordinateSystem) {
        let canonical = match self.canonical.get(&crs) {
            Some(existing) => existing.clone(),
            None => {
                self.canonical.insert(crs.clone());
                crs
            }
        };
        self.by_code.entry(code).or_insert(canonical);
    }
}
