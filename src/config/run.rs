// src/config/run.rs
//
// Run identity: token + the three ids of one actor run.
// Built once at start-up and handed to every fetch by reference.

use url::Url;

use crate::error::ConfigError;
use super::consts::*;

#[derive(Clone)]
pub struct RunConfig {
    pub token: String,
    pub run_id: String,
    pub store_id: String,
    pub dataset_id: String,
    pub base_url: Url,
}

impl RunConfig {
    /// Read the run identity from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` over an arbitrary lookup.
    /// Empty values count as missing. Every missing name is reported, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let token = read(ENV_TOKEN);
        let run_id = read(ENV_RUN_ID);
        let store_id = read(ENV_STORE_ID);
        let dataset_id = read(ENV_DATASET_ID);

        let names: Vec<&'static str> = [
            (ENV_TOKEN, token.is_none()),
            (ENV_RUN_ID, run_id.is_none()),
            (ENV_STORE_ID, store_id.is_none()),
            (ENV_DATASET_ID, dataset_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();

        let (Some(token), Some(run_id), Some(store_id), Some(dataset_id)) =
            (token, run_id, store_id, dataset_id)
        else {
            return Err(ConfigError::Missing { names });
        };

        let base = read(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base)?;

        Ok(Self { token, run_id, store_id, dataset_id, base_url })
    }
}

fn parse_base_url(s: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(s).map_err(|e| ConfigError::BaseUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::BaseUrl {
            url: s.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }
    Ok(url)
}

// Keep the token out of debug output.
impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("token", &"***")
            .field("run_id", &self.run_id)
            .field("store_id", &self.store_id)
            .field("dataset_id", &self.dataset_id)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn full() -> HashMap<String, String> {
        env(&[
            (ENV_TOKEN, "tok"),
            (ENV_RUN_ID, "run1"),
            (ENV_STORE_ID, "kvs1"),
            (ENV_DATASET_ID, "ds1"),
        ])
    }

    #[test]
    fn reads_all_four_values() {
        let vars = full();
        let cfg = RunConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.token, "tok");
        assert_eq!(cfg.run_id, "run1");
        assert_eq!(cfg.store_id, "kvs1");
        assert_eq!(cfg.dataset_id, "ds1");
        assert_eq!(cfg.base_url.as_str(), "https://api.apify.com/v2");
    }

    #[test]
    fn each_missing_value_is_fatal() {
        for name in [ENV_TOKEN, ENV_RUN_ID, ENV_STORE_ID, ENV_DATASET_ID] {
            let mut vars = full();
            vars.remove(name);
            match RunConfig::from_lookup(|k| vars.get(k).cloned()) {
                Err(ConfigError::Missing { names }) => assert_eq!(names, vec![name]),
                other => panic!("expected Missing for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_counts_as_missing() {
        let mut vars = full();
        vars.insert(ENV_DATASET_ID.into(), String::new());
        vars.insert(ENV_TOKEN.into(), String::new());
        match RunConfig::from_lookup(|k| vars.get(k).cloned()) {
            Err(ConfigError::Missing { names }) => assert_eq!(names, vec![ENV_TOKEN, ENV_DATASET_ID]),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn base_url_override() {
        let mut vars = full();
        vars.insert(ENV_BASE_URL.into(), "http://127.0.0.1:8080/v2".into());
        let cfg = RunConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/v2");

        vars.insert(ENV_BASE_URL.into(), "not a url".into());
        assert!(matches!(
            RunConfig::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::BaseUrl { .. })
        ));
    }

    #[test]
    fn debug_hides_token() {
        let vars = full();
        let cfg = RunConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("tok\""));
        assert!(dbg.contains("***"));
    }
}
