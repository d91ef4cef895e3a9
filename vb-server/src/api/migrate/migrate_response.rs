use vb_db::ImportReport;

use serde::Serialize;

/// Result of the one-shot file-to-table import
#[derive(Debug, Serialize)]
pub struct MigrateResponse {
    pub imported: usize,
    pub skipped: usize,
}

impl From<ImportReport> for MigrateResponse {
    fn from(r: ImportReport) -> Self {
        Self {
            imported: r.imported,
            skipped: r.skipped,
        }
    }
}
