use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::Order;
use crate::errors::AppError;
use crate::handlers::RequestEnvelope;
use crate::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Mutable order fields as they appear on the wire. `status` is required on
/// PUT and ignored on POST, where new orders always start pending.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub dishes: Option<Vec<LineItemPayload>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderRequest {
    pub data: OrderPayload,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: String,
    pub dishes: Vec<LineItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            deliver_to: order.deliver_to,
            mobile_number: order.mobile_number,
            status: order.status.as_str().to_string(),
            dishes: order
                .dishes
                .into_iter()
                .map(|item| LineItemResponse {
                    dish_id: item.dish_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderEnvelope {
    pub data: OrderResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListEnvelope {
    pub data: Vec<OrderResponse>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, in creation order", body = OrderListEnvelope),
    ),
    tag = "orders"
)]
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = state.orders.list()?;
    Ok(HttpResponse::Ok().json(OrderListEnvelope {
        data: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created with status pending", body = OrderEnvelope),
        (status = 400, description = "Validation failure"),
    ),
    tag = "orders"
)]
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.create(&body.data)?;
    Ok(HttpResponse::Created().json(OrderEnvelope { data: order.into() }))
}

/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderEnvelope),
        (status = 404, description = "Order does not exist"),
    ),
    tag = "orders"
)]
pub async fn read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order.into() }))
}

/// PUT /orders/{order_id}
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderEnvelope),
        (status = 400, description = "Validation failure or illegal status transition"),
        (status = 404, description = "Order does not exist"),
    ),
    tag = "orders"
)]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.update(&path.into_inner(), &body.data)?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order.into() }))
}

/// DELETE /orders/{order_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending"),
        (status = 404, description = "Order does not exist"),
    ),
    tag = "orders"
)]
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.orders.delete(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
