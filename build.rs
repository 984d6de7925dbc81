use std::path::Path;

const TABLES: &[&str] = &[
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

fn main() {
    let dir = Path::new("catalogs/epsg");
    for table in TABLES {
        validate_table(&dir.join(table));
    }
    println!("cargo:rerun-if-changed=catalogs/epsg");
    println!("cargo:rerun-if-changed=build.rs");
}

fn validate_table(path: &Path) {
    assert!(
        path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the table file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    // Every data line must carry at least a code and one more column.
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = line.split('\t').count();
        assert!(
            fields >= 2,
            "\n\nCATALOG BUILD ERROR: Malformed row\n\
             Path: {}\n\
             Line {}: expected at least 2 tab-separated fields, found {}\n",
            path.display(),
            i + 1,
            fields
        );
    }
}
