//! Loader for the coordinate-operation metadata tables.
//!
//! Four tables join into one `Projection` descriptor per operation code:
//!
//! - `methods`: `code, name, deprecated` — display name, spaces replaced
//!   with underscores
//! - `parameter_names`: `code, name, deprecated` — lower-cased, spaces
//!   replaced with underscores
//! - `parameter_values`: `operation_code, parameter_code, value` — rows with
//!   the wrong column count are skipped
//! - `operations`: `code, method_code, deprecated` — picks the method name
//!   for each operation

use std::collections::{BTreeMap, HashMap};

use crate::catalog::diagnostics::StageReport;
use crate::core::projection::Projection;
use crate::core::types::Authority;
use crate::parsing::row::{data_rows, parse_code, parse_f64, split_fixed};

/// Projection descriptors keyed by coordinate-operation code
#[derive(Debug, Clone, Default)]
pub struct ProjectionCatalog {
    pub by_operation: HashMap<i32, Projection>,
}

impl ProjectionCatalog {
    /// Join the four metadata tables. Missing tables degrade to empty maps,
    /// which in turn yields an empty catalog.
    #[must_use]
    pub fn load(
        methods: Option<&str>,
        parameter_names: Option<&str>,
        parameter_values: Option<&str>,
        operations: Option<&str>,
    ) -> (Self, Vec<StageReport>) {
        let (method_names, methods_report) = load_method_names(methods);
        let (param_names, params_report) = load_parameter_names(parameter_names);
        let (mut params_by_op, values_report) = load_parameter_values(parameter_values, &param_names);
        let (op_methods, ops_report) = load_operations(operations);

        let mut catalog = Self::default();
        for (op_code, method_code) in op_methods {
            let Some(method_name) = method_names.get(&method_code) else {
                continue;
            };
            let mut projection = Projection::new(method_name, Authority::epsg(method_code));
            if let Some(parameters) = params_by_op.remove(&op_code) {
                projection.parameters = parameters;
            }
            catalog.by_operation.insert(op_code, projection);
        }

        (
            catalog,
            vec![methods_report, params_report, values_report, ops_report],
        )
    }

    #[must_use]
    pub fn get(&self, operation_code: i32) -> Option<&Projection> {
        self.by_operation.get(&operation_code)
    }
}

fn load_method_names(text: Option<&str>) -> (HashMap<i32, String>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("methods"));
    };

    let mut report = StageReport::new("methods");
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
            report.skip(format!("line {line_no}: method code is not numeric"));
            continue;
        };
        names.insert(code, fields[1].replace(' ', "_"));
        report.loaded += 1;
    }

    (names, report)
}

fn load_parameter_names(text: Option<&str>) -> (HashMap<i32, String>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("parameter_names"));
    };

    let mut report = StageReport::new("parameter_names");
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
            report.skip(format!("line {line_no}: parameter code is not numeric"));
            continue;
        };
        names.insert(code, fields[1].to_lowercase().replace(' ', "_"));
        report.loaded += 1;
    }

    (names, report)
}

type ParamsByOperation = HashMap<i32, BTreeMap<String, f64>>;

fn load_parameter_values(
    text: Option<&str>,
    param_names: &HashMap<i32, String>,
) -> (ParamsByOperation, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("parameter_values"));
    };

    let mut report = StageReport::new("parameter_values");
    let mut params_by_op: ParamsByOperation = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 3) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };
        let (Some(op_code), Some(param_code)) = (parse_code(fields[0]), parse_code(fields[1]))
        else {
            report.skip(format!("line {line_no}: operation or parameter code is not numeric"));
            continue;
        };
        // A value whose parameter name is unknown has no key to land under
        let Some(name) = param_names.get(&param_code) else {
            report.skip(format!(
                "line {line_no}: no parameter name for code {param_code}"
            ));
            continue;
        };

        params_by_op
            .entry(op_code)
            .or_default()
            .insert(name.clone(), parse_f64(fields[2]));
        report.loaded += 1;
    }

    (params_by_op, report)
}

fn load_operations(text: Option<&str>) -> (HashMap<i32, i32>, StageReport) {
    let Some(text) = text else {
        return (HashMap::new(), StageReport::missing("operations"));
    };

    let mut report = StageReport::new("operations");
    let mut op_methods = HashMap::new();

    for (line_no, line) in data_rows(text) {
        report.rows += 1;
        let fields = match split_fixed(line, line_no, 3) {
            Ok(fields) => fields,
            Err(e) => {
                report.skip(e.to_string());
                continue;
            }
        };
        let (Some(op_code), Some(method_code)) = (parse_code(fields[0]), parse_code(fields[1]))
        else {
            report.skip(format!("line {line_no}: operation or method code is not numeric"));
            continue;
        };
        op_methods.insert(op_code, method_code);
        report.loaded += 1;
    }

    (op_methods, report)
}
