//! Loader for the per-coordinate-system axis table.
//!
//! Columns: `cs_code, name_code, orientation, uom_code, order`.
//!
//! Axis rows are keyed by `(cs_code, order)` but arrive in arbitrary order
//! within a coordinate-system group, so each group is densified as rows come
//! in: the list grows with unset placeholders up to `order - 1`, then the row
//! lands at index `order - 1`.

use std::collections::HashMap;

use crate::catalog::diagnostics::StageReport;
use crate::catalog::units::UnitCatalog;
use crate::core::axis::Axis;
use crate::core::unit::Unit;
use crate::parsing::row::{data_rows, parse_code, split_fixed};

const COLUMNS: usize = 5;

/// Axis sequences and governing units, keyed by coordinate-system code.
///
/// When a coordinate system's axes mix units in the source data, only the
/// last-seen qualifying unit of each kind is retained per code. That matches
/// the source registry's historical behavior and is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct AxisResolver {
    pub axes_by_cs: HashMap<i32, Vec<Axis>>,
    pub linear_unit_by_cs: HashMap<i32, Unit>,
    pub angular_unit_by_cs: HashMap<i32, Unit>,
}

impl AxisResolver {
    /// Load the axis table, resolving names through the axis-name lookup and
    /// units through the unit catalog.
    #[must_use]
    pub fn load(
        text: Option<&str>,
        axis_names: &HashMap<i32, String>,
        units: &UnitCatalog,
    ) -> (Self, StageReport) {
        let Some(text) = text else {
            return (Self::default(), StageReport::missing("axes"));
        };

        let mut report = StageReport::new("axes");
        let mut resolver = Self::default();

        for (line_no, line) in data_rows(text) {
            report.rows += 1;
            let fields = match split_fixed(line, line_no, COLUMNS) {
                Ok(fields) => fields,
                Err(e) => {
                    report.skip(e.to_string());
                    continue;
                }
            };

            let Some(cs_code) = parse_code(fields[0]) else {
                report.skip(format!("line {line_no}: coordinate-system code is not numeric"));
                continue;
            };
            let Some(order) = parse_code(fields[4]).filter(|order| *order >= 1) else {
                report.skip(format!("line {line_no}: axis order is not a positive integer"));
                continue;
            };
            let order = order as usize;

            // An unresolvable name code leaves the name unset; the axis row
            // itself still lands in the sequence.
            let name = parse_code(fields[1])
                .and_then(|name_code| axis_names.get(&name_code))
                .cloned()
                .unwrap_or_default();
            let axis = Axis {
                name,
                direction: fields[2].to_string(),
            };

            let sequence = resolver.axes_by_cs.entry(cs_code).or_default();
            while sequence.len() < order {
                sequence.push(Axis::unset());
            }
            sequence[order - 1] = axis;

            if let Some(uom_code) = parse_code(fields[3]) {
                if let Some(unit) = units.linear.get(&uom_code) {
                    resolver.linear_unit_by_cs.insert(cs_code, unit.clone());
                }
                if let Some(unit) = units.angular.get(&uom_code) {
                    resolver.angular_unit_by_cs.insert(cs_code, unit.clone());
                }
            }

            report.loaded += 1;
        }

        (resolver, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_units() -> UnitCatalog {
        let text = "\
9101\tradian\t9101\t1\t\t0
9102\tdegree\t9101\t3.14159265358979\t180\t0
9001\tmetre\t9001\t1\t\t0
";
        UnitCatalog::load(Some(text)).0
    }

    fn test_names() -> HashMap<i32, String> {
        let mut names = HashMap::new();
        names.insert(9901, "Geodetic latitude".to_string());
        names.insert(9902, "Geodetic longitude".to_string());
        names.insert(9906, "Easting".to_string());
        names.insert(9907, "Northing".to_string());
        names
    }

    #[test]
    fn test_out_of_order_rows_densify() {
        // Order 2 arrives before order 1
        let text = "\
100\t9902\teast\t9102\t2
100\t9901\tnorth\t9102\t1
";
        let (resolver, report) = AxisResolver::load(Some(text), &test_names(), &test_units());
        assert_eq!(report.loaded, 2);

        let axes = &resolver.axes_by_cs[&100];
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].name, "Geodetic latitude");
        assert_eq!(axes[0].direction, "north");
        assert_eq!(axes[1].name, "Geodetic longitude");
        assert_eq!(axes[1].direction, "east");
    }

    #[test]
    fn test_gap_keeps_placeholder() {
        let text = "200\t9907\tnorth\t9001\t3\n";
        let (resolver, _) = AxisResolver::load(Some(text), &test_names(), &test_units());

        let axes = &resolver.axes_by_cs[&200];
        assert_eq!(axes.len(), 3);
        assert!(axes[0].is_unset());
        assert!(axes[1].is_unset());
        assert_eq!(axes[2].name, "Northing");
    }

    #[test]
    fn test_unit_classification_per_cs() {
        let text = "\
6422\t9901\tnorth\t9102\t1
6422\t9902\teast\t9102\t2
4400\t9906\teast\t9001\t1
4400\t9907\tnorth\t9001\t2
";
        let (resolver, _) = AxisResolver::load(Some(text), &test_names(), &test_units());
        assert_eq!(resolver.angular_unit_by_cs[&6422].name, "degree");
        assert!(!resolver.linear_unit_by_cs.contains_key(&6422));
        assert_eq!(resolver.linear_unit_by_cs[&4400].name, "metre");
        assert!(!resolver.angular_unit_by_cs.contains_key(&4400));
    }

    #[test]
    fn test_mixed_units_last_seen_wins() {
        // A system whose axes disagree on the linear unit: the later row wins
        let units_text = "\
9001\tmetre\t9001\t1\t\t0
9002\tfoot\t9001\t0.3048\t\t0
";
        let units = UnitCatalog::load(Some(units_text)).0;
        let text = "\
300\t9906\teast\t9001\t1
300\t9907\tnorth\t9002\t2
";
        let (resolver, _) = AxisResolver::load(Some(text), &test_names(), &units);
        assert_eq!(resolver.linear_unit_by_cs[&300].name, "foot");
    }

    #[test]
    fn test_unresolvable_name_code_leaves_name_unset() {
        let text = "400\t9999\tnorth\t9102\t1\n";
        let (resolver, report) = AxisResolver::load(Some(text), &test_names(), &test_units());
        assert_eq!(report.loaded, 1);
        let axes = &resolver.axes_by_cs[&400];
        assert_eq!(axes[0].name, "");
        assert_eq!(axes[0].direction, "north");
    }

    #[test]
    fn test_invalid_order_skipped() {
        let text = "500\t9901\tnorth\t9102\t0\n500\t9901\tnorth\t9102\tx\n";
        let (resolver, report) = AxisResolver::load(Some(text), &test_names(), &test_units());
        assert_eq!(report.skipped.len(), 2);
        assert!(!resolver.axes_by_cs.contains_key(&500));
    }

    #[test]
    fn test_missing_table() {
        let (resolver, report) = AxisResolver::load(None, &test_names(), &test_units());
        assert!(!report.present);
        assert!(resolver.axes_by_cs.is_empty());
    }
}
