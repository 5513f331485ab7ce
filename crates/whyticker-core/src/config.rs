use crate::{TickerSymbol, ValidationError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_USER_AGENT: &str = concat!("whyticker/", env!("CARGO_PKG_VERSION"));

pub const BASE_URL_ENV: &str = "WHYTICKER_BASE_URL";
pub const TIMEOUT_ENV: &str = "WHYTICKER_TIMEOUT_MS";

/// Where and how the analysis client talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        })
    }

    /// Reads `WHYTICKER_BASE_URL` and `WHYTICKER_TIMEOUT_MS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let timeout_ms = parse_timeout_ms(&raw)?;
            config = config.with_timeout_ms(timeout_ms)?;
        }

        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout {
                value: timeout_ms.to_string(),
            });
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `{base_url}/analyze/{SYMBOL}`
    pub fn analyze_url(&self, symbol: &TickerSymbol) -> String {
        format!(
            "{}/analyze/{}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());

    if !has_host {
        return Err(ValidationError::InvalidBaseUrl {
            value: input.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}

fn parse_timeout_ms(raw: &str) -> Result<u64, ValidationError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| ValidationError::InvalidTimeout {
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://whyticker.example/"),
            (TIMEOUT_ENV, "750"),
        ]))
        .expect("valid env");
        assert_eq!(config.base_url(), "https://whyticker.example");
        assert_eq!(config.timeout_ms(), 750);
    }

    #[test]
    fn rejects_bad_timeout_and_scheme() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeout { .. }));

        let err = ClientConfig::new("ftp://host").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));

        let err = ClientConfig::new("http://").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn builds_analyze_url() {
        let config = ClientConfig::new("http://localhost:5000/").expect("valid");
        let symbol = TickerSymbol::parse("aapl").expect("valid");
        assert_eq!(config.analyze_url(&symbol), "http://localhost:5000/analyze/AAPL");
    }
}
