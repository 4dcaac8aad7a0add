use std::env;

pub const DEFAULT_DOMAIN_URL: &str = "https://api.example.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub domain_url: String,
    pub api_key: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(domain_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain_url: domain_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `STUDY_API_KEY` and `STUDY_API_DOMAIN`.
    ///
    /// Returns `None` when no usable API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            env::var("STUDY_API_DOMAIN").ok(),
            env::var("STUDY_API_KEY").ok(),
        )
    }

    fn from_vars(domain_url: Option<String>, api_key: Option<String>) -> Option<Self> {
        let api_key = api_key?;
        if api_key.trim().is_empty() {
            return None;
        }
        let domain_url = domain_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DOMAIN_URL.into());
        Some(Self {
            domain_url,
            api_key,
        })
    }

    /// Join `path` onto the domain, tolerating a trailing slash on the domain.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.domain_url.trim_end_matches('/'), path)
    }
}
