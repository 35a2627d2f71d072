// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod run;

pub use options::{ExportFormat, ExportOptions};
pub use run::RunConfig;
