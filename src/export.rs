// src/export.rs
use std::path::PathBuf;

use crate::config::ExportOptions;
use crate::error::ExportError;
use crate::file::write_table_to_path;
use crate::preview;
use crate::progress::Progress;
use crate::table::{Record, Table};

/// Flatten, preview, and write the full dataset to `opts.out_path()`.
pub fn export(
    records: &[Record],
    opts: &ExportOptions,
    progress: &mut dyn Progress,
) -> Result<PathBuf, ExportError> {
    let table = Table::from_records(records);
    logd!("export: {} rows x {} columns", table.len(), table.columns.len());

    if opts.preview_rows > 0 {
        progress.section(&format!("First {} Scraped Properties (Preview)", opts.preview_rows));
        progress.log(preview::render(&table, opts.preview_rows).trim_end_matches('\n'));
    }

    let path = opts.out_path();
    let written = write_table_to_path(&path, &table, opts.delim())?;
    logf!("export: wrote {}", written.display());
    Ok(written)
}
