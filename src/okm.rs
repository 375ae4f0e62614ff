//! Thin client for the OpenKM REST API.
//!
//! Every call injects HTTP Basic credentials and a JSON `Accept` header, both
//! overridable per call. Non-2xx responses become [`OkmError::Transport`];
//! there is no retry here, the tool layer decides what a failure means.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response};
use thiserror::Error;
use url::Url;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum OkmError {
    #[error("{status} {reason}")]
    Transport { status: u16, reason: String },
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid header: {0}")]
    Header(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct OkmClient {
    http: reqwest::Client,
    base_url: String,
    auth: String,
}

impl OkmClient {
    pub fn new(config: &Config) -> Result<Self, OkmError> {
        // Validate the base URL up front so every later failure is a real
        // transport failure, not a config typo.
        Url::parse(&config.base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            auth: basic_auth(&config.user, &config.pass),
        })
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, OkmError> {
        self.request(Method::GET, path, query, None, headers).await
    }

    pub async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, OkmError> {
        self.request(Method::POST, path, query, body, headers).await
    }

    pub async fn put(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, OkmError> {
        self.request(Method::PUT, path, query, body, headers).await
    }

    pub async fn delete(
        &self,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, OkmError> {
        self.request(Method::DELETE, path, query, None, headers)
            .await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
        overrides: &[(&str, &str)],
    ) -> Result<Response, OkmError> {
        let url = build_url(&self.base_url, path, query)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.auth).map_err(|err| OkmError::Header(err.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| OkmError::Header(err.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|err| OkmError::Header(err.to_string()))?;
            headers.insert(name, value);
        }

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            // Bodies are pre-formatted markup; the metadata endpoints expect XML.
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/xml"))
                .body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OkmError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        Ok(response)
    }
}

fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

fn build_url(base_url: &str, path: &str, query: &[(&str, &str)]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))?;
    for (key, value) in query {
        url.query_pairs_mut().append_pair(key, value);
    }
    Ok(url)
}
