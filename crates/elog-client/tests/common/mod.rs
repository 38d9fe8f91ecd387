//! In-memory transport that records every call and replays canned bodies.

#![allow(dead_code)]

use async_trait::async_trait;
use elog_client::{ClientError, ElogClient, Request, Transport};
use elog_core::normalize::Normalizer;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

pub enum Reply {
    Body(Value),
    Status(u16, &'static str),
}

#[derive(Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(String, Request)>>,
}

impl RecordingTransport {
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Request)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn fetch(&self, path: &str, request: Request) -> Result<Value, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), request));
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, message)) => Err(ClientError::Api {
                status,
                message: message.to_string(),
            }),
            None => panic!("unexpected call to {path}"),
        }
    }
}

pub fn client(replies: impl IntoIterator<Item = Reply>) -> ElogClient<RecordingTransport> {
    ElogClient::new(
        RecordingTransport::with_replies(replies),
        Normalizer::default(),
    )
}

pub fn summary_json(id: &str, logged_at: &str) -> Value {
    serde_json::json!({
        "id": id,
        "logbook": "mcc",
        "tags": ["rf"],
        "title": format!("entry {id}"),
        "loggedBy": "operator",
        "loggedAt": logged_at,
        "eventAt": logged_at,
    })
}

pub fn entry_json(id: &str, logged_at: &str) -> Value {
    let mut entry = summary_json(id, logged_at);
    entry["text"] = Value::from("<p>body</p>");
    entry["attachments"] = serde_json::json!([]);
    entry["supersedeBy"] = Value::Null;
    entry["followUp"] = serde_json::json!([]);
    entry
}
