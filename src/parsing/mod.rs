//! Row-level helpers for the tab-separated reference tables.
//!
//! All tables share one grammar: fixed-position tab-separated columns, blank
//! and `#`-prefixed lines ignored, a trailing deprecated column whose literal
//! text `"1"` means true. Numeric columns may be blank; blank floats parse to
//! NaN and blank integer codes to `None` instead of failing the row.
//!
//! ## Example
//!
//! ```rust
//! use crs_registry::parsing::row::{data_rows, parse_code, parse_f64, parse_flag, split_fixed};
//!
//! let table = "# prime meridians\n8901\tGreenwich\t0\t0\n";
//! for (line_no, line) in data_rows(table) {
//!     let fields = split_fixed(line, line_no, 4).unwrap();
//!     assert_eq!(parse_code(fields[0]), Some(8901));
//!     assert_eq!(parse_f64(fields[2]), 0.0);
//!     assert!(!parse_flag(fields[3]));
//! }
//! ```

pub mod row;
