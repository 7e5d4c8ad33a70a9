//! Shared fixtures for controller and page tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tokio::sync::oneshot;

use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::net::types::ApiError;

// =========================================================================
// MockTransport
// =========================================================================

struct Scripted {
    response: Result<ApiResponse, String>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Transport that records every request and replays scripted responses in
/// call order. Gated responses wait until their sender fires (or is dropped).
#[derive(Default)]
pub(crate) struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, response: Result<ApiResponse, String>, gate: Option<oneshot::Receiver<()>>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted { response, gate });
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.push(Ok(ApiResponse { status, body: body.to_owned() }), None);
    }

    pub(crate) fn push_network_error(&self, message: &str) {
        self.push(Err(message.to_owned()), None);
    }

    /// Script a response that is held until the returned sender fires.
    pub(crate) fn push_gated_json(&self, status: u16, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Ok(ApiResponse { status, body: body.to_string() }), Some(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        let Some(Scripted { response, gate }) = next else {
            return Err(ApiError::ApiRequest("no scripted response".into()));
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response.map_err(ApiError::ApiRequest)
    }
}

// =========================================================================
// Fixtures
// =========================================================================

pub(crate) fn assistant_json(id: &str, name: &str) -> Value {
    json!({
        "uuid": id,
        "name": name,
        "system_prompt": format!("You are a helpful voice assistant named {name}"),
        "voice_id": null,
        "enabled_tools": []
    })
}

pub(crate) fn list_body(items: &[Value]) -> Value {
    json!({ "assistants": items })
}

/// Ids of the given assistants, in order.
pub(crate) fn ids(assistants: &[crate::net::types::Assistant]) -> Vec<String> {
    assistants.iter().map(|a| a.id.clone()).collect()
}
