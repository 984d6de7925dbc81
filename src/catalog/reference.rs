//! Loaders for the independent flat reference tables: areas, axis names,
//! spheroids, and prime meridians. None of these join against other tables.

use std::collections::HashMap;

use crate::catalog::diagnostics::StageReport;
use crate::core::area::{Area, BoundingBox};
use crate::core::datum::{PrimeMeridian, Spheroid};
use crate::core::types::Authority;
use crate::parsing::row::{data_rows, parse_code, parse_f64, parse_flag, split_fixed};

/// Load the area table.
///
/// Columns: `code, name, south, north, west, east, deprecated`. An extent
/// whose four numeric columns are all blank loads as no bounding box.
#[must_use]
pub fn load_areas(text: Option<&str>) -> (HashMap<i32, Area>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("areas"));
    };

    let mut report = StageReport::new("areas");
    let mut areas = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 7) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };

        let Some(code) = parse_code(fields[0]) else {
            report.skip(format!("line {line_no}: area code is not numeric"));
            continue;
        };

        let south = parse_f64(fields[2]);
        let north = parse_f64(fields[3]);
        let west = parse_f64(fields[4]);
        let east = parse_f64(fields[5]);

        let mut area = Area::new(fields[1], Authority::epsg(code));
        area.deprecated = parse_flag(fields[6]);
        if !(south.is_nan() && north.is_nan() && west.is_nan() && east.is_nan()) {
            area.bounding_box = Some(BoundingBox {
                min_x: west,
                min_y: south,
                max_x: east,
                max_y: north,
            });
        }

        areas.insert(code, area);
        report.loaded += 1;
    }

    (areas, report)
}

/// Load the axis-name table: `code, name, deprecated`.
#[must_use]
pub fn load_axis_names(text: Option<&str>) -> (HashMap<i32, String>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("axis_names"));
    };

    let mut report = StageReport::new("axis_names");
    let mut names = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 3) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };

        let Some(code) = parse_code(fields[0]) else {
            report.skip(format!("line {line_no}: axis-name code is not numeric"));
            continue;
        };

        names.insert(code, fields[1].to_string());
        report.loaded += 1;
    }

    (names, report)
}

/// Load the spheroid table.
///
/// Columns: `code, name, semi_major, semi_minor, inv_flattening, deprecated`.
/// Blank numeric columns load as NaN; a row with both shape columns blank is
/// tolerated, not rejected.
#[must_use]
pub fn load_spheroids(text: Option<&str>) -> (HashMap<i32, Spheroid>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("spheroids"));
    };

    let mut report = StageReport::new("spheroids");
    let mut spheroids = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 6) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };

        let Some(code) = parse_code(fields[0]) else {
            report.skip(format!("line {line_no}: spheroid code is not numeric"));
            continue;
        };

        let mut spheroid = Spheroid::new(fields[1], parse_f64(fields[2]), Authority::epsg(code));
        spheroid.semi_minor_axis = parse_f64(fields[3]);
        spheroid.inverse_flattening = parse_f64(fields[4]);
        spheroid.deprecated = parse_flag(fields[5]);

        spheroids.insert(code, spheroid);
        report.loaded += 1;
    }

    (spheroids, report)
}

/// Load the prime-meridian table: `code, name, longitude, deprecated`.
#[must_use]
pub fn load_prime_meridians(text: Option<&str>) -> (HashMap<i32, PrimeMeridian>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("prime_meridians"));
    };

    let mut report = StageReport::new("prime_meridians");
    let mut meridians = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 4) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };

        let Some(code) = parse_code(fields[0]) else {
            report.skip(format!("line {line_no}: prime-meridian code is not numeric"));
            continue;
        };

        let mut meridian = PrimeMeridian::new(fields[1], parse_f64(fields[2]), Authority::epsg(code));
        meridian.deprecated = parse_flag(fields[3]);

        meridians.insert(code, meridian);
        report.loaded += 1;
    }

    (meridians, report)
}
