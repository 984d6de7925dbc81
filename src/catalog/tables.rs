use std::borrow::Cow;
use std::path::Path;

use tracing::warn;

/// Well-known file names for [`TableSet::load_dir`]
pub const TABLE_FILES: [&str; 12] = [
    "units.tsv",
    "areas.tsv",
    "axis_names.tsv",
    "axes.tsv",
    "methods.tsv",
    "parameter_names.tsv",
    "parameter_values.tsv",
    "operations.tsv",
    "spheroids.tsv",
    "prime_meridians.tsv",
    "datums.tsv",
    "crs.tsv",
];

/// The set of reference-table sources a registry is built from.
///
/// Each field is the full text of one tab-separated table, already fetched by
/// the caller; this crate does not locate or open table files itself except
/// through the explicit [`TableSet::load_dir`] convenience. A `None` table
/// loads that sub-catalog as empty and degrades dependent joins rather than
/// failing the build.
#[derive(Debug, Clone, Default)]
pub struct TableSet<'a> {
    pub units: Option<Cow<'a, str>>,
    pub areas: Option<Cow<'a, str>>,
    pub axis_names: Option<Cow<'a, str>>,
    pub axes: Option<Cow<'a, str>>,
    pub methods: Option<Cow<'a, str>>,
    pub parameter_names: Option<Cow<'a, str>>,
    pub parameter_values: Option<Cow<'a, str>>,
    pub operations: Option<Cow<'a, str>>,
    pub spheroids: Option<Cow<'a, str>>,
    pub prime_meridians: Option<Cow<'a, str>>,
    pub datums: Option<Cow<'a, str>>,
    pub crs: Option<Cow<'a, str>>,
}

impl TableSet<'static> {
    /// The EPSG-subset dataset embedded at compile time from `catalogs/epsg/`
    /// (validated by `build.rs`).
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            units: Some(include_str!("../../catalogs/epsg/units.tsv").into()),
            areas: Some(include_str!("../../catalogs/epsg/areas.tsv").into()),
            axis_names: Some(include_str!("../../catalogs/epsg/axis_names.tsv").into()),
            axes: Some(include_str!("../../catalogs/epsg/axes.tsv").into()),
            methods: Some(include_str!("../../catalogs/epsg/methods.tsv").into()),
            parameter_names: Some(include_str!("../../catalogs/epsg/parameter_names.tsv").into()),
            parameter_values: Some(include_str!("../../catalogs/epsg/parameter_values.tsv").into()),
            operations: Some(include_str!("../../catalogs/epsg/operations.tsv").into()),
            spheroids: Some(include_str!("../../catalogs/epsg/spheroids.tsv").into()),
            prime_meridians: Some(include_str!("../../catalogs/epsg/prime_meridians.tsv").into()),
            datums: Some(include_str!("../../catalogs/epsg/datums.tsv").into()),
            crs: Some(include_str!("../../catalogs/epsg/crs.tsv").into()),
        }
    }

    /// Read the well-known table files from a directory.
    ///
    /// A missing or unreadable file degrades that table to `None` (the build
    /// then reports it as a missing stage); this never fails as a whole.
    #[must_use]
    pub fn load_dir(dir: &Path) -> Self {
        let read = |name: &str| -> Option<Cow<'static, str>> {
            match std::fs::read_to_string(dir.join(name)) {
                Ok(text) => Some(text.into()),
                Err(e) => {
                    warn!(table = name, "unreadable table file: {e}");
                    None
                }
            }
        };

        Self {
            units: read("units.tsv"),
            areas: read("areas.tsv"),
            axis_names: read("axis_names.tsv"),
            axes: read("axes.tsv"),
            methods: read("methods.tsv"),
            parameter_names: read("parameter_names.tsv"),
            parameter_values: read("parameter_values.tsv"),
            operations: read("operations.tsv"),
            spheroids: read("spheroids.tsv"),
            prime_meridians: read("prime_meridians.tsv"),
            datums: read("datums.tsv"),
            crs: read("crs.tsv"),
        }
    }
}
