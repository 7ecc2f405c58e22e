use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dish::Dish;
use crate::errors::AppError;
use crate::handlers::RequestEnvelope;
use crate::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Mutable dish fields as they appear on the wire. POST and PUT share this
/// shape; `id` only matters on PUT, where it must match the route id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DishPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DishRequest {
    pub data: DishPayload,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            description: dish.description,
            price: dish.price,
            image_url: dish.image_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishEnvelope {
    pub data: DishResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishListEnvelope {
    pub data: Vec<DishResponse>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes, in creation order", body = DishListEnvelope),
    ),
    tag = "dishes"
)]
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dishes = state.dishes.list()?;
    Ok(HttpResponse::Ok().json(DishListEnvelope {
        data: dishes.into_iter().map(DishResponse::from).collect(),
    }))
}

/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = DishRequest,
    responses(
        (status = 201, description = "Dish created", body = DishEnvelope),
        (status = 400, description = "Validation failure"),
    ),
    tag = "dishes"
)]
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.create(&body.data)?;
    Ok(HttpResponse::Created().json(DishEnvelope { data: dish.into() }))
}

/// GET /dishes/{dish_id}
#[utoipa::path(
    get,
    path = "/dishes/{dish_id}",
    params(
        ("dish_id" = String, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, description = "Dish found", body = DishEnvelope),
        (status = 404, description = "Dish does not exist"),
    ),
    tag = "dishes"
)]
pub async fn read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish.into() }))
}

/// PUT /dishes/{dish_id}
#[utoipa::path(
    put,
    path = "/dishes/{dish_id}",
    params(
        ("dish_id" = String, Path, description = "Dish id"),
    ),
    request_body = DishRequest,
    responses(
        (status = 200, description = "Dish updated", body = DishEnvelope),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Dish does not exist"),
    ),
    tag = "dishes"
)]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.update(&path.into_inner(), &body.data)?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish.into() }))
}
