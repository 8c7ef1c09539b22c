// src/config.rs

use anyhow::{anyhow, bail, Context, Result};
use std::{env, fmt::Display, ops::RangeInclusive, str::FromStr, time::Duration};
use url::Url;

use crate::fetch::DEFAULT_BASE_URL;
use crate::report::default_years;

pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub base_url: Url,
    pub years: RangeInclusive<u16>,
    /// Max fetches in flight during a sweep. 1 means strictly sequential.
    pub concurrency: usize,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
            years: default_years(),
            concurrency: 1,
            request_timeout: None,
        }
    }
}

fn parse_var<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("invalid {}={:?}: {}", key, raw, e)),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = parse_var(&get, "PORT", defaults.port)?;
        let base_url = match get("VITIBRASIL_BASE_URL") {
            Some(raw) => Url::parse(raw.trim())
                .with_context(|| format!("invalid VITIBRASIL_BASE_URL={:?}", raw))?,
            None => defaults.base_url,
        };
        let start = parse_var(&get, "YEAR_START", *defaults.years.start())?;
        let end = parse_var(&get, "YEAR_END", *defaults.years.end())?;
        if start > end {
            bail!("YEAR_START ({}) is after YEAR_END ({})", start, end);
        }
        let concurrency = parse_var(&get, "SWEEP_CONCURRENCY", defaults.concurrency)?;
        if concurrency == 0 {
            bail!("SWEEP_CONCURRENCY must be at least 1");
        }
        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(_) => Some(Duration::from_secs(parse_var(
                &get,
                "REQUEST_TIMEOUT_SECS",
                0u64,
            )?)),
            None => None,
        };

        Ok(Self {
            port,
            base_url,
            years: start..=end,
            concurrency,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(cfg.years, 1970..=2023);
        assert_eq!(cfg.concurrency, 1);
        assert_eq!(cfg.request_timeout, None);
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("VITIBRASIL_BASE_URL", "http://127.0.0.1:9000/index.php"),
            ("YEAR_START", "2020"),
            ("YEAR_END", " 2021 "),
            ("SWEEP_CONCURRENCY", "4"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/index.php");
        assert_eq!(cfg.years, 2020..=2021);
        assert_eq!(cfg.concurrency, 4);
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("VITIBRASIL_BASE_URL", "not a url")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SWEEP_CONCURRENCY", "0")])).is_err());
        let err = Config::from_lookup(lookup(&[("YEAR_START", "2024"), ("YEAR_END", "2023")]))
            .unwrap_err();
        assert!(err.to_string().contains("YEAR_START"));
    }
}
