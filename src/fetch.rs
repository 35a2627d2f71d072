// src/fetch.rs
//
// The three reads of a run. Each is one GET, checked on its own,
// returning a value or a `FetchError`; printing is the caller's business.

use url::Url;

use crate::config::{consts::FIELDS, RunConfig};
use crate::core::{endpoints, RawResponse, Transport};
use crate::error::FetchError;
use crate::table::Record;

/// Raw JSON text of the run's INPUT record. Not parsed.
pub fn fetch_input(cfg: &RunConfig, transport: &mut dyn Transport) -> Result<String, FetchError> {
    get_text(transport, &endpoints::input_url(cfg))
}

/// Plain-text execution log of the run.
pub fn fetch_log(cfg: &RunConfig, transport: &mut dyn Transport) -> Result<String, FetchError> {
    get_text(transport, &endpoints::log_url(cfg))
}

/// Dataset items restricted to the allow-listed fields.
/// The body must be a JSON array of objects.
pub fn fetch_dataset(cfg: &RunConfig, transport: &mut dyn Transport) -> Result<Vec<Record>, FetchError> {
    let body = get_text(transport, &endpoints::dataset_url(cfg, FIELDS))?;
    parse_records(&body)
}

pub fn parse_records(body: &str) -> Result<Vec<Record>, FetchError> {
    serde_json::from_str::<Vec<Record>>(body)
        .map_err(|e| FetchError::Malformed { reason: e.to_string() })
}

fn get_text(transport: &mut dyn Transport, url: &Url) -> Result<String, FetchError> {
    let response = transport.get(url)?;
    if !response.is_success() {
        let RawResponse { status, body } = response;
        return Err(FetchError::Status { status, body });
    }
    Ok(response.body.unwrap_or_default())
}
