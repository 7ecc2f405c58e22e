pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::error::InternalError;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::dishes::DishService;
use application::orders::OrderService;
use domain::dish::Dish;
use domain::order::Order;
use infrastructure::id::UuidGenerator;
use infrastructure::memory::MemoryStore;

/// Process-wide state: one store per resource, created at startup and
/// injected into its manager. Tests build a fresh state per case instead of
/// sharing ambient globals.
pub struct AppState {
    pub dishes: DishService<MemoryStore<Dish>, UuidGenerator>,
    pub orders: OrderService<MemoryStore<Order>, UuidGenerator>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dishes: DishService::new(MemoryStore::new(), UuidGenerator),
            orders: OrderService::new(MemoryStore::new(), UuidGenerator),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::dishes::list,
        handlers::dishes::create,
        handlers::dishes::read,
        handlers::dishes::update,
        handlers::orders::list,
        handlers::orders::create,
        handlers::orders::read,
        handlers::orders::update,
        handlers::orders::delete,
    ),
    components(schemas(
        handlers::dishes::DishPayload,
        handlers::dishes::DishRequest,
        handlers::dishes::DishResponse,
        handlers::dishes::DishEnvelope,
        handlers::dishes::DishListEnvelope,
        handlers::orders::LineItemPayload,
        handlers::orders::OrderPayload,
        handlers::orders::OrderRequest,
        handlers::orders::LineItemResponse,
        handlers::orders::OrderResponse,
        handlers::orders::OrderEnvelope,
        handlers::orders::OrderListEnvelope,
    )),
    tags(
        (name = "dishes", description = "Menu management"),
        (name = "orders", description = "Order lifecycle"),
    )
)]
pub struct ApiDoc;

/// Route table, shared by the real server and the test harness.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dishes")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::dishes::list))
                    .route(web::post().to(handlers::dishes::create))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/{dish_id}")
                    .route(web::get().to(handlers::dishes::read))
                    .route(web::put().to(handlers::dishes::update))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            ),
    )
    .service(
        web::scope("/orders")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::orders::list))
                    .route(web::post().to(handlers::orders::create))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/{order_id}")
                    .route(web::get().to(handlers::orders::read))
                    .route(web::put().to(handlers::orders::update))
                    .route(web::delete().to(handlers::orders::delete))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            ),
    );
}

/// Malformed or unparseable JSON bodies get the same `{"error": ...}`
/// envelope as domain failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .wrap(Logger::default())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::route().to(handlers::path_not_found))
    })
    .bind((host.to_string(), port))?
    .run())
}
