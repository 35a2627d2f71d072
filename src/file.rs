// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::write_table;
use crate::error::ExportError;
use crate::table::Table;

/// Create/truncate `path` and write the whole table.
/// The writer is flushed on success; on error it is dropped, which may leave a partial file.
pub fn write_table_to_path(path: &Path, table: &Table, sep: char) -> Result<PathBuf, ExportError> {
    let io_err = |source: io::Error| ExportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, sep).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
