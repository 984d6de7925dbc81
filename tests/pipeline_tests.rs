//! Partial-data degradation: the build must stay maximally available from
//! incomplete or malformed sources and surface every degradation through the
//! build report instead of failing.

use std::io::Write;

use crs_registry::{CrsRegistry, TableSet};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn empty_table_set_builds_empty_registry() {
    init_tracing();
    let registry = CrsRegistry::from_tables(&TableSet::default());
    assert!(registry.is_empty());
    assert_eq!(registry.all().count(), 0);
    assert!(registry.by_code(4326).is_none());
    assert!(registry.report().stages.iter().all(|stage| !stage.present));
}

#[test]
fn missing_datum_table_degrades_geographic_rows() {
    init_tracing();
    let tables = TableSet {
        units: Some("9102\tdegree\t9101\t3.14159265358979\t180\t0\n".into()),
        crs: Some("4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0\n".into()),
        ..TableSet::default()
    };

    let registry = CrsRegistry::from_tables(&tables);
    // The datum join finds nothing, so the geographic row is dropped; the
    // build itself still completes
    assert!(registry.by_code(4326).is_none());

    let report = registry.report();
    assert!(!report.stage("datums").unwrap().present);
    let crs_stage = report.stage("crs").unwrap();
    assert_eq!(crs_stage.rows, 1);
    assert_eq!(crs_stage.loaded, 0);
    assert_eq!(crs_stage.skipped.len(), 1);
}

#[test]
fn malformed_rows_degrade_row_by_row() {
    init_tracing();
    let tables = TableSet {
        units: Some(
            "9102\tdegree\t9101\t3.14159265358979\t180\t0\n\
             garbage line without tabs\n\
             9001\tmetre\t9001\t1\t\t0\n"
                .into(),
        ),
        spheroids: Some(
            "7030\tWGS 84\t6378137\t\t298.257223563\t0\n\
             not-a-code\tBroken\t1\t2\t3\t0\n"
                .into(),
        ),
        prime_meridians: Some("8901\tGreenwich\t0\t0\n".into()),
        datums: Some("6326\tWGS84\t7030\t8901\tgeodetic\t0\n".into()),
        crs: Some(
            "4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0\n\
             9999\tMystery\tnot enough fields\n"
                .into(),
        ),
        ..TableSet::default()
    };

    let registry = CrsRegistry::from_tables(&tables);
    assert_eq!(registry.len(), 1);
    assert!(registry.by_code(4326).is_some());

    let report = registry.report();
    assert_eq!(report.stage("units").unwrap().skipped.len(), 1);
    assert_eq!(report.stage("spheroids").unwrap().skipped.len(), 1);
    assert!(report.total_skipped() >= 3);

    let rendered = report.to_string();
    assert!(rendered.contains("Registry Build Report"));
    assert!(rendered.contains("Skipped rows:"));
}

#[test]
fn geographic_with_datum_missing_components_still_builds() {
    init_tracing();
    // The datum row references a spheroid and meridian that never loaded;
    // the datum materializes with those fields unset and the geographic
    // system built on it carries that through
    let tables = TableSet {
        datums: Some("6326\tWGS84\t7030\t8901\tgeodetic\t0\n".into()),
        crs: Some("4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0\n".into()),
        ..TableSet::default()
    };

    let registry = CrsRegistry::from_tables(&tables);
    let crs = registry.by_code(4326).expect("row still builds");
    let geographic = crs.as_geographic().unwrap();

    let datum = geographic.datum.as_ref().unwrap();
    assert!(datum.spheroid.is_none());
    assert!(datum.prime_meridian.is_none());
    assert!(geographic.prime_meridian().is_none());
    assert!(geographic.angular_unit.is_none());
    assert!(geographic.axes.is_empty());
    assert!(geographic.area.is_none());
}

#[test]
fn projection_metadata_missing_leaves_projection_unset() {
    init_tracing();
    let tables = TableSet {
        spheroids: Some("7030\tWGS 84\t6378137\t\t298.257223563\t0\n".into()),
        prime_meridians: Some("8901\tGreenwich\t0\t0\n".into()),
        datums: Some("6326\tWGS84\t7030\t8901\tgeodetic\t0\n".into()),
        crs: Some(
            "4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0\n\
             32631\tUTM 31N\t4400\t1262\tprojected\t4326\t16031\t0\n"
                .into(),
        ),
        ..TableSet::default()
    };

    let registry = CrsRegistry::from_tables(&tables);
    let projected = registry.by_code(32631).unwrap().as_projected().unwrap().clone();
    // Non-critical joins degrade to unset fields
    assert!(projected.projection.is_none());
    assert!(projected.linear_unit.is_none());
    // The critical join held: the source geographic system exists
    assert_eq!(projected.source.code, 4326);
}

#[test]
fn load_dir_reads_what_exists_and_degrades_the_rest() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let mut units = std::fs::File::create(dir.path().join("units.tsv")).unwrap();
    writeln!(units, "9102\tdegree\t9101\t3.14159265358979\t180\t0").unwrap();

    let mut spheroids = std::fs::File::create(dir.path().join("spheroids.tsv")).unwrap();
    writeln!(spheroids, "7030\tWGS 84\t6378137\t\t298.257223563\t0").unwrap();

    let mut meridians = std::fs::File::create(dir.path().join("prime_meridians.tsv")).unwrap();
    writeln!(meridians, "8901\tGreenwich\t0\t0").unwrap();

    let mut datums = std::fs::File::create(dir.path().join("datums.tsv")).unwrap();
    writeln!(datums, "6326\tWGS84\t7030\t8901\tgeodetic\t0").unwrap();

    let mut crs = std::fs::File::create(dir.path().join("crs.tsv")).unwrap();
    writeln!(crs, "4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0").unwrap();

    // areas.tsv, axes.tsv and the projection tables are intentionally absent
    let tables = TableSet::load_dir(dir.path());
    assert!(tables.units.is_some());
    assert!(tables.areas.is_none());

    let registry = CrsRegistry::from_tables(&tables);
    let crs = registry.by_code(4326).expect("partial catalog still serves");
    assert_eq!(crs.name(), "WGS84");
    assert!(crs.area().is_none());
    assert!(!registry.report().stage("areas").unwrap().present);
}

#[test]
fn registry_summary_reflects_partial_build() {
    init_tracing();
    let tables = TableSet {
        spheroids: Some("7030\tWGS 84\t6378137\t\t298.257223563\t0\n".into()),
        prime_meridians: Some("8901\tGreenwich\t0\t0\n".into()),
        datums: Some("6326\tWGS84\t7030\t8901\tgeodetic\t0\n".into()),
        crs: Some("4326\tWGS84\t6422\t1262\tgeographic 2D\t6326\t0\n".into()),
        ..TableSet::default()
    };

    let registry = CrsRegistry::from_tables(&tables);
    let json = registry.to_json().unwrap();
    assert!(json.contains("\"code\": 4326"));
    assert!(json.contains("\"kind\": \"geographic\""));
}
