// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// User-chosen output file. `None` means the default file in the working directory.
    out: Option<PathBuf>,
    /// Rows shown in the console preview; 0 disables it.
    pub preview_rows: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl ExportOptions {
    /// Resolved output file.
    /// An explicit path is used as given (its extension wins over the format);
    /// the default file name follows the format's extension.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => {
                let mut p = PathBuf::from(DEFAULT_OUT_FILE);
                p.set_extension(self.format.ext());
                p
            }
        }
    }

    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out = if s.is_empty() { None } else { Some(Path::new(s).to_path_buf()) };
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}
