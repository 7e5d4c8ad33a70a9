//! REST helpers for the assistants collection endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Turning an error into the text
//! the view shows is left to the controllers, which pick the per-operation
//! fallback message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{ApiError, Assistant, CreateAssistantRequest};

/// Collection endpoint for list (GET) and create (POST).
pub const ASSISTANTS_ENDPOINT: &str = "/api/assistants";

/// Fallback list error when the server gives no message.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch assistants";

/// Fallback create error when the server gives no message.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create assistant";

fn list_request() -> ApiRequest {
    ApiRequest { method: Method::Get, path: ASSISTANTS_ENDPOINT.to_owned(), body: None }
}

fn create_request(name: &str) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(CreateAssistantRequest { name: name.to_owned() })
        .map_err(|e| ApiError::ApiParse(e.to_string()))?;
    Ok(ApiRequest { method: Method::Post, path: ASSISTANTS_ENDPOINT.to_owned(), body: Some(body) })
}

fn ensure_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::ApiResponse { status: response.status, body: response.body })
    }
}

/// Parse a list body. A missing or `null` `assistants` field is an empty
/// list; a body that is not a JSON object is malformed.
fn parse_list_body(body: &str) -> Result<Vec<Assistant>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::ApiParse(e.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(ApiError::ApiParse("expected a JSON object".into()));
    };
    match fields.remove("assistants") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| ApiError::ApiParse(e.to_string())),
    }
}

/// Parse a create body leniently: the created record, a `{ "assistant": .. }`
/// wrapper, or `None` when the body is neither.
fn parse_created_body(body: &str) -> Option<Assistant> {
    let value: Value = serde_json::from_str(body).ok()?;
    let inner = value.get("assistant").cloned().unwrap_or(value);
    serde_json::from_value(inner).ok()
}

/// Fetch the assistant collection via `GET /api/assistants`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is malformed.
pub async fn fetch_assistants(transport: &dyn Transport) -> Result<Vec<Assistant>, ApiError> {
    let response = ensure_success(transport.send(list_request()).await?)?;
    parse_list_body(&response.body)
}

/// Create an assistant via `POST /api/assistants` with body `{ "name": .. }`.
///
/// The success body is not required to describe the new record; `None` is
/// returned when it does not.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn create_assistant(transport: &dyn Transport, name: &str) -> Result<Option<Assistant>, ApiError> {
    let response = ensure_success(transport.send(create_request(name)?).await?)?;
    Ok(parse_created_body(&response.body))
}
