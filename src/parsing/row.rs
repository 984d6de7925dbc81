use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Iterate the data rows of a table: trimmed, non-empty, non-comment lines
/// paired with their 1-based line number.
pub fn data_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Split a row into exactly `expected` tab-separated fields.
///
/// # Errors
///
/// Returns `RowError::ColumnCount` when the row has a different number of
/// fields; callers record the error in diagnostics and skip the row.
pub fn split_fixed(line: &str, line_no: usize, expected: usize) -> Result<Vec<&str>, RowError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(RowError::ColumnCount {
            line: line_no,
            expected,
            found: fields.len(),
        })
    }
}

/// Split a row into tab-separated fields without a count check; used for
/// tables whose column layout varies per row kind.
#[must_use]
pub fn split(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

/// Parse a float column. Blank or malformed text parses to NaN, never an
/// error.
#[must_use]
pub fn parse_f64(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// Parse an integer code column. Blank or malformed text parses to `None`.
#[must_use]
pub fn parse_code(field: &str) -> Option<i32> {
    field.trim().parse().ok()
}

/// Parse the trailing deprecated column: the literal `"1"` is true, anything
/// else (including blank) is false.
#[must_use]
pub fn parse_flag(field: &str) -> bool {
    field.trim() == "1"
}
