mod client;
mod config;
mod login;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_DOMAIN_URL};
pub use login::{LoginParams, LoginRequest};
