// src/core/endpoints.rs
//
// URL builders for the three run resources.
// Path ids go through path-segment encoding, query values through form encoding,
// so the field allow-list comes out as `a%2Cb%2Cc`.

use url::Url;

use crate::config::{consts::INPUT_RECORD_KEY, RunConfig};

/// GET {base}/key-value-stores/{storeId}/records/INPUT?token=…
pub fn input_url(cfg: &RunConfig) -> Url {
    let mut url = with_segments(&cfg.base_url, &["key-value-stores", &cfg.store_id, "records", INPUT_RECORD_KEY]);
    url.query_pairs_mut().append_pair("token", &cfg.token);
    url
}

/// GET {base}/logs/{runId}?token=…
pub fn log_url(cfg: &RunConfig) -> Url {
    let mut url = with_segments(&cfg.base_url, &["logs", &cfg.run_id]);
    url.query_pairs_mut().append_pair("token", &cfg.token);
    url
}

/// GET {base}/datasets/{datasetId}/items?token=…&format=json&clean=1&fields=…
pub fn dataset_url(cfg: &RunConfig, fields: &[&str]) -> Url {
    let mut url = with_segments(&cfg.base_url, &["datasets", &cfg.dataset_id, "items"]);
    url.query_pairs_mut()
        .append_pair("token", &cfg.token)
        .append_pair("format", "json")
        .append_pair("clean", "1")
        .append_pair("fields", &fields.join(","));
    url
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    // RunConfig rejects cannot-be-a-base URLs, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// The URL as text with the token value masked, for logs and diagnostics.
pub fn redacted(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut out = url.clone();
    out.query_pairs_mut().clear().extend_pairs(pairs.iter());
    out.to_string()
}
