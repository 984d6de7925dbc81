use serde::Serialize;
use tracing::warn;

/// Outcome of loading one reference table.
///
/// Row-level failures never abort a load; they land here so a partial catalog
/// stays observable and testable.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// Table name, e.g. `"units"`
    pub table: &'static str,

    /// Whether a source for the table was provided at all
    pub present: bool,

    /// Data rows read (blank/comment lines excluded)
    pub rows: usize,

    /// Entities materialized from those rows
    pub loaded: usize,

    /// Reasons for every skipped row, in row order
    pub skipped: Vec<String>,
}

impl StageReport {
    #[must_use]
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            present: true,
            rows: 0,
            loaded: 0,
            skipped: Vec::new(),
        }
    }

    /// Report for a table whose source was missing or unreadable; the
    /// sub-catalog loads as empty and dependent joins degrade.
    #[must_use]
    pub fn missing(table: &'static str) -> Self {
        warn!(table, "table source missing, sub-catalog loads empty");
        Self {
            present: false,
            ..Self::new(table)
        }
    }

    /// Record a skipped row with its reason
    pub fn skip(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(table = self.table, "skipping row: {reason}");
        self.skipped.push(reason);
    }
}

/// Diagnostics for a whole registry build, one entry per pipeline stage
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub stages: Vec<StageReport>,
}

impl BuildReport {
    pub fn push(&mut self, stage: StageReport) {
        self.stages.push(stage);
    }

    pub fn extend(&mut self, stages: impl IntoIterator<Item = StageReport>) {
        self.stages.extend(stages);
    }

    /// Total rows skipped across all stages
    #[must_use]
    pub fn total_skipped(&self) -> usize {
        self.stages.iter().map(|s| s.skipped.len()).sum()
    }

    /// Stage report for a table, if that stage ran
    #[must_use]
    pub fn stage(&self, table: &str) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.table == table)
    }
}

impl std::fmt::Display for BuildReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registry Build Report")?;
        writeln!(f, "=====================")?;
        for stage in &self.stages {
            if stage.present {
                writeln!(
                    f,
                    "  {:<18} {} rows -> {} loaded, {} skipped",
                    stage.table,
                    stage.rows,
                    stage.loaded,
                    stage.skipped.len()
                )?;
            } else {
                writeln!(f, "  {:<18} (missing)", stage.table)?;
            }
            for reason in &stage.skipped {
                writeln!(f, "    - {reason}")?;
            }
        }
        writeln!(f, "Skipped rows: {}", self.total_skipped())?;
        Ok(())
    }
}
