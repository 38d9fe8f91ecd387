//! The transport seam.
//!
//! Everything the access layer needs from the network is one call:
//! `fetch(path, request)` returning the decoded response body.
//! [`crate::HttpTransport`] is the production implementation; tests plug in
//! in-memory ones.

use async_trait::async_trait;
use elog_core::query::QueryParams;
use serde_json::Value;
use std::fmt;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about a call except its path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub method: Method,
    pub params: QueryParams,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn get(params: QueryParams) -> Self {
        Self {
            method: Method::Get,
            params,
            body: None,
        }
    }

    #[must_use]
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            params: QueryParams::new(),
            body: Some(body),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `request` against `path` (relative to the service root) and
    /// return the decoded response body.
    async fn fetch(&self, path: &str, request: Request) -> Result<Value, ClientError>;
}
