//! HTTP-level tests driving the full route table in process through
//! `actix_web::test`, with a fresh in-memory state per test.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use restaurant_service::handlers::path_not_found;
use restaurant_service::{json_config, routes, AppState};

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .app_data(json_config())
                .configure(routes)
                .default_service(web::route().to(path_not_found)),
        )
        .await
    };
}

fn dish_body() -> Value {
    json!({
        "data": {
            "name": "Margherita",
            "description": "Tomato and mozzarella",
            "price": 12,
            "image_url": "https://img.example/margherita.png"
        }
    })
}

fn order_body() -> Value {
    json!({
        "data": {
            "deliverTo": "123 Main",
            "mobileNumber": "555-1234",
            "dishes": [{ "dishId": "1", "quantity": 2 }]
        }
    })
}

fn order_body_with_status(status: &str) -> Value {
    let mut body = order_body();
    body["data"]["status"] = json!(status);
    body
}

#[actix_web::test]
async fn created_dish_echoes_fields_and_gets_an_id() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(dish_body())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Margherita");
    assert_eq!(body["data"]["price"], 12);
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn dish_listing_returns_creation_order() {
    let app = test_app!();

    for name in ["Soup", "Salad"] {
        let mut body = dish_body();
        body["data"]["name"] = json!(name);
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/dishes")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/dishes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dish| dish["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Soup", "Salad"]);
}

#[actix_web::test]
async fn negative_price_is_rejected() {
    let app = test_app!();

    let mut body = dish_body();
    body["data"]["price"] = json!(-5);
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("price"));
}

#[actix_web::test]
async fn body_without_data_member_fails_validation() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Dish must include a 'name'");
}

#[actix_web::test]
async fn reading_unknown_ids_is_404() {
    let app = test_app!();

    for uri in ["/dishes/does-not-exist", "/orders/does-not-exist"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("does-not-exist"));
    }
}

#[actix_web::test]
async fn dish_update_overwrites_fields_but_not_the_id() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(dish_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let update = json!({
        "data": {
            "name": "Quattro Formaggi",
            "description": "Four cheeses",
            "price": 15,
            "image_url": "https://img.example/quattro.png"
        }
    });
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/dishes/{id}"))
            .set_json(update)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["name"], "Quattro Formaggi");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/dishes/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["price"], 15);
}

#[actix_web::test]
async fn mismatched_body_id_is_rejected_and_dish_is_unchanged() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .set_json(dish_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let mut update = dish_body();
    update["data"]["id"] = json!("somebody-else");
    update["data"]["name"] = json!("Hijacked");
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/dishes/{id}"))
            .set_json(update)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("route id"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/dishes/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Margherita");
}

#[actix_web::test]
async fn new_orders_start_pending() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order_body())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["deliverTo"], "123 Main");
    assert_eq!(body["data"]["dishes"][0]["quantity"], 2);
}

#[actix_web::test]
async fn delivered_orders_cannot_be_updated_again() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(order_body_with_status("delivered"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(order_body_with_status("pending"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "A delivered order cannot be changed");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "delivered");
}

#[actix_web::test]
async fn order_update_requires_a_known_status() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    for update in [order_body(), order_body_with_status("cancelled")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/orders/{id}"))
                .set_json(update)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("status of pending"));
    }
}

#[actix_web::test]
async fn only_pending_orders_may_be_deleted() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/orders/{id}"))
            .set_json(order_body_with_status("preparing"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("pending"));
}

#[actix_web::test]
async fn deleting_a_pending_order_removes_it() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/orders")
            .set_json(order_body())
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/orders/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_paths_get_the_error_envelope() {
    let app = test_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/menu").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("/menu"));
}

#[actix_web::test]
async fn unsupported_methods_are_405() {
    let app = test_app!();

    let resp =
        test::call_service(&app, test::TestRequest::delete().uri("/dishes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Method not allowed");
}

#[actix_web::test]
async fn malformed_json_gets_the_error_envelope() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/dishes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ this is not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}
