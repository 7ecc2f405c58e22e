pub mod dishes;
pub mod orders;

use actix_web::{HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::{json, Value};

/// Mutation bodies arrive as `{ "data": { ... } }`. A missing `data` member
/// behaves like an empty object, so every required-property check fails with
/// its own message instead of a generic decode error.
#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub data: Value,
}

/// Fallback for paths outside the route table.
pub async fn path_not_found(request: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": format!("Path not found: {}", request.path())
    }))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed" }))
}
