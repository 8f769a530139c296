use std::path::PathBuf;

use incident_model::UnifiedReport;
use incident_report::UnifiedTable;

#[derive(Debug)]
pub struct RunResult {
    pub report: UnifiedReport,
    pub table: UnifiedTable,
    /// Where the report was written; `None` on a dry run.
    pub output: Option<PathBuf>,
}
