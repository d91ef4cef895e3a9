//! One-shot import of the legacy line-oriented file into the vouches table.

use crate::{FileStore, Result as DbErrorResult, VouchRepository};

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Copy every parseable file-store vouch into the table.
///
/// Idempotent: a vouch whose `(user_id, created_at, stars)` already exists
/// in the table is skipped, so re-running the import is safe.
pub async fn import_file_store(
    store: &FileStore,
    repo: &VouchRepository,
) -> DbErrorResult<ImportReport> {
    let vouches = store.read_all()?;

    let mut report = ImportReport {
        imported: 0,
        skipped: 0,
    };

    for vouch in &vouches {
        if repo.exists(&vouch.user_id, vouch.created_at, vouch.stars).await? {
            report.skipped += 1;
            continue;
        }

        repo.create(vouch).await?;
        report.imported += 1;
    }

    info!(
        "File store import: {} imported, {} skipped ({})",
        report.imported,
        report.skipped,
        store.path().display()
    );

    Ok(report)
}
