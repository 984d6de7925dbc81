//! Loader for the datum table.
//!
//! Columns: `code, name, spheroid_code, meridian_code, kind, deprecated`.
//! Only rows of kind `geodetic` materialize; vertical, engineering and other
//! kinds are dropped during load. An unresolvable spheroid or meridian
//! reference leaves that field unset on the datum rather than failing the
//! row.

use std::collections::HashMap;

use crate::catalog::diagnostics::StageReport;
use crate::core::datum::{Datum, PrimeMeridian, Spheroid};
use crate::core::types::Authority;
use crate::parsing::row::{data_rows, parse_code, parse_flag, split_fixed};

const COLUMNS: usize = 6;
const GEODETIC: &str = "geodetic";

/// Load the datum table against already-loaded spheroid and prime-meridian
/// catalogs. `None` loads an empty catalog.
#[must_use]
pub fn load_datums(
    text: Option<&str>,
    spheroids: &HashMap<i32, Spheroid>,
    prime_meridians: &HashMap<i32, PrimeMeridian>,
) -> (HashMap<i32, Datum>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("datums"));
    };

    let mut report = StageReport::new("datums");
    let mut datums = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, COLUMNS) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };

        if fields[4] != GEODETIC {
            continue;
        }

        let Some(code) = parse_code(fields[0]) else {
            report.skip(format!("line {line_no}: datum code is not numeric"));
            continue;
        };

        let mut datum = Datum::new(fields[1], Authority::epsg(code));
        datum.spheroid = parse_code(fields[2])
            .and_then(|spheroid_code| spheroids.get(&spheroid_code))
            .cloned();
        datum.prime_meridian = parse_code(fields[3])
            .and_then(|meridian_code| prime_meridians.get(&meridian_code))
            .cloned();
        datum.deprecated = parse_flag(fields[5]);

        datums.insert(code, datum);
        report.loaded += 1;
    }

    (datums, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spheroids() -> HashMap<i32, Spheroid> {
        let mut map = HashMap::new();
        map.insert(
            7030,
            Spheroid::new("WGS 84", 6_378_137.0, Authority::epsg(7030))
                .with_inverse_flattening(298.257_223_563),
        );
        map
    }

    fn meridians() -> HashMap<i32, PrimeMeridian> {
        let mut map = HashMap::new();
        map.insert(8901, PrimeMeridian::new("Greenwich", 0.0, Authority::epsg(8901)));
        map
    }

    #[test]
    fn test_geodetic_rows_materialize() {
        let text = "6326\tWorld Geodetic System 1984\t7030\t8901\tgeodetic\t0\n";
        let (datums, report) = load_datums(Some(text), &spheroids(), &meridians());
        assert_eq!(report.loaded, 1);

        let wgs84 = &datums[&6326];
        assert_eq!(wgs84.spheroid.as_ref().unwrap().name, "WGS 84");
        assert_eq!(wgs84.prime_meridian.as_ref().unwrap().name, "Greenwich");
        assert!(!wgs84.deprecated);
    }

    #[test]
    fn test_non_geodetic_kinds_dropped() {
        let text = "\
6326\tWorld Geodetic System 1984\t7030\t8901\tgeodetic\t0
5100\tMean Sea Level\t\t\tvertical\t0
9300\tSite frame\t\t\tengineering\t0
";
        let (datums, report) = load_datums(Some(text), &spheroids(), &meridians());
        assert_eq!(report.rows, 3);
        assert_eq!(report.loaded, 1);
        // Kind filtering is by design, not a row failure
        assert!(report.skipped.is_empty());
        assert!(!datums.contains_key(&5100));
    }

    #[test]
    fn test_unresolvable_references_leave_fields_unset() {
        let text = "6999\tOrphan datum\t7999\t8999\tgeodetic\t0\n";
        let (datums, report) = load_datums(Some(text), &spheroids(), &meridians());
        assert_eq!(report.loaded, 1);

        let orphan = &datums[&6999];
        assert!(orphan.spheroid.is_none());
        assert!(orphan.prime_meridian.is_none());
    }

    #[test]
    fn test_missing_table() {
        let (datums, report) = load_datums(None, &spheroids(), &meridians());
        assert!(!report.present);
        assert!(datums.is_empty());
    }
}
