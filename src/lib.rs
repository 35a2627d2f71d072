// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod export;
pub mod fetch;
pub mod file;
pub mod preview;
pub mod progress;
pub mod runner;
pub mod table;
