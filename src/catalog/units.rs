//! Loader for the unit-of-measure table.
//!
//! Columns: `code, name, base_code, factor_b, factor_c, deprecated`.
//!
//! Rows are processed in file order, which is not guaranteed to be dependency
//! order. A base unit that has not been read yet therefore resolves to
//! `None`; a second resolution pass would fix the remaining references and is
//! a known limitation of the single-pass load.

use std::collections::HashMap;

use crate::catalog::diagnostics::StageReport;
use crate::core::types::{Authority, UnitKind};
use crate::core::unit::Unit;
use crate::parsing::row::{data_rows, parse_code, parse_f64, parse_flag, split_fixed};

/// Base-unit codes of the radian family. A unit whose raw base code is one of
/// these is angular; every other unit is linear.
pub const ANGULAR_BASE_CODES: [i32; 2] = [9101, 9102];

const COLUMNS: usize = 6;

/// Angular and linear units, keyed by authority code
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    pub angular: HashMap<i32, Unit>,
    pub linear: HashMap<i32, Unit>,
}

impl UnitCatalog {
    /// Load the unit table. `None` loads an empty catalog.
    #[must_use]
    pub fn load(text: Option<&str>) -> (Self, StageReport) {
        let Some(text) = text else {
            return (Self::default(), StageReport::missing("units"));
        };

        let mut report = StageReport::new("units");
        let mut catalog = Self::default();

        for (line_no, line) in data_rows(text) {
            report.rows += 1;
            let fields = match split_fixed(line, line_no, COLUMNS) {
                Ok(fields) => fields,
                Err(e) => {
                    report.skip(e.to_string());
                    continue;
                }
            };

            let Some(code) = parse_code(fields[0]) else {
                report.skip(format!("line {line_no}: unit code is not numeric"));
                continue;
            };
            let name = fields[1].to_string();
            let base_code = parse_code(fields[2]);
            let deprecated = parse_flag(fields[5]);

            let kind = match base_code {
                Some(base) if ANGULAR_BASE_CODES.contains(&base) => UnitKind::Angular,
                _ => UnitKind::Linear,
            };

            // Ratio form: factor_b divided by factor_c when the latter is
            // present; a blank factor_b stays NaN.
            let factor_b = parse_f64(fields[3]);
            let factor_c = parse_f64(fields[4]);
            let factor = if factor_c.is_nan() {
                factor_b
            } else {
                factor_b / factor_c
            };

            // A self-referencing base code means "this unit is the base".
            // Unseen bases resolve to None as well (single forward pass).
            let base = base_code
                .filter(|base| *base != code)
                .and_then(|base| catalog.of_kind(kind).get(&base))
                .cloned()
                .map(Box::new);

            let mut unit = Unit::new(name, kind, factor, Authority::epsg(code));
            unit.base = base;
            unit.deprecated = deprecated;

            catalog.of_kind_mut(kind).insert(code, unit);
            report.loaded += 1;
        }

        (catalog, report)
    }

    /// Look up a unit of either kind by code
    #[must_use]
    pub fn get(&self, code: i32) -> Option<&Unit> {
        self.angular.get(&code).or_else(|| self.linear.get(&code))
    }

    fn of_kind(&self, kind: UnitKind) -> &HashMap<i32, Unit> {
        match kind {
            UnitKind::Angular => &self.angular,
            UnitKind::Linear => &self.linear,
        }
    }

    fn of_kind_mut(&mut self, kind: UnitKind) -> &mut HashMap<i32, Unit> {
        match kind {
            UnitKind::Angular => &mut self.angular,
            UnitKind::Linear => &mut self.linear,
        }
    }
}
