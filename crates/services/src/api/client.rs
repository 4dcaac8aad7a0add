use reqwest::{Client, Request, Url};
use tracing::{debug, warn};

use crate::api::config::ApiConfig;
use crate::api::login::LoginRequest;
use crate::error::ApiError;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Option<ApiConfig>,
}

impl ApiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ApiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Build the login request without sending it.
    ///
    /// Parameters travel form-url-encoded in the POST body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Disabled` without configuration, `ApiError::InvalidUrl`
    /// when the domain does not form a valid URL.
    pub fn build_login(&self, request: &LoginRequest) -> Result<Request, ApiError> {
        let config = self.config.as_ref().ok_or(ApiError::Disabled)?;
        let raw = config.url_for(LoginRequest::PATH);
        let url = Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw.clone()))?;

        let built = self
            .client
            .request(LoginRequest::METHOD, url)
            .form(&request.params(&config.api_key))
            .build()?;
        Ok(built)
    }

    /// Send the login call and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the client is disabled, the request fails,
    /// or the backend answers with a non-success status.
    pub async fn login(&self, request: &LoginRequest) -> Result<serde_json::Value, ApiError> {
        let built = self.build_login(request)?;
        debug!(url = %built.url(), "sending login request");

        let response = self.client.execute(built).await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "login rejected");
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(request: &Request) -> String {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("form body is buffered");
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn login_request_shape() {
        let client = ApiClient::new(Some(ApiConfig::new("https://exam.test", "secret")));
        let request = client.build_login(&LoginRequest::new("abc")).unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://exam.test/api/users/login");
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(body_text(&request), "_api_key=secret&user_token=abc&platform=1");
    }

    #[test]
    fn disabled_client_refuses_to_build() {
        let client = ApiClient::new(None);
        assert!(!client.enabled());
        assert!(matches!(
            client.build_login(&LoginRequest::new("abc")),
            Err(ApiError::Disabled)
        ));
    }

    #[test]
    fn bad_domain_is_reported() {
        let client = ApiClient::new(Some(ApiConfig::new("not a url", "secret")));
        assert!(matches!(
            client.build_login(&LoginRequest::new("abc")),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
