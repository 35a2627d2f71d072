// src/core/mod.rs

pub mod endpoints;
pub mod net;

pub use net::{RawResponse, Transport, UreqTransport};
