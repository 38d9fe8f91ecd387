//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use elog_config::ServerConfig;
use elog_core::query::QueryParams;
use serde_json::Value;
use std::time::Duration;

use crate::error::ClientError;
use crate::transport::{Method, Request, Transport};

/// Talks JSON over HTTP to the logbook service.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying client fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, path: &str, request: Request) -> Result<Value, ClientError> {
        let url = build_url(&self.base_url, path, &request.params);
        tracing::debug!(method = %request.method, %url, "logbook request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = check_response(builder.send().await?).await?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Join the service root, a relative path and percent-encoded parameters.
fn build_url(base_url: &str, path: &str, params: &QueryParams) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Map a non-success status to [`ClientError::Api`] carrying the body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
