use reqwest::Method;
use serde::Serialize;

/// Exchanges a device user token for a backend session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub user_token: String,
}

/// Body parameters of the login call. Field names are the wire names.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoginParams<'a> {
    #[serde(rename = "_api_key")]
    pub api_key: &'a str,
    pub user_token: &'a str,
    pub platform: u8,
}

impl LoginRequest {
    pub const PATH: &'static str = "/api/users/login";
    pub const METHOD: Method = Method::POST;
    /// Platform code the backend expects from this client.
    pub const PLATFORM: u8 = 1;

    #[must_use]
    pub fn new(user_token: impl Into<String>) -> Self {
        Self {
            user_token: user_token.into(),
        }
    }

    #[must_use]
    pub fn params<'a>(&'a self, api_key: &'a str) -> LoginParams<'a> {
        LoginParams {
            api_key,
            user_token: &self.user_token,
            platform: Self::PLATFORM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_use_wire_names() {
        let request = LoginRequest::new("token-1");
        let json = serde_json::to_value(request.params("secret")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_api_key": "secret",
                "user_token": "token-1",
                "platform": 1
            })
        );
    }

    #[test]
    fn login_is_a_post() {
        assert_eq!(LoginRequest::METHOD, Method::POST);
        assert_eq!(LoginRequest::PATH, "/api/users/login");
    }
}
