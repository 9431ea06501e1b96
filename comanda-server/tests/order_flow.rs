//! End-to-end order flow through the HTTP router
//!
//! Drives the admin → customer → kitchen loop the way the pages do,
//! calling the router directly without the network stack.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use comanda_server::core::{Config, ServerState};

fn test_app() -> (Router, tempfile::TempDir) {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.public_base_url = "https://host.example".into();
    config.menu_page_path = "menu".into();

    let state = ServerState::initialize(&config).expect("server state");
    let app = comanda_server::api::build_app().with_state(state);
    (app, work_dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn admin_customer_kitchen_flow() {
    let (app, _work_dir) = test_app();

    // The menu starts empty
    let (status, menu) = send(&app, "GET", "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(menu["categories"].as_array().unwrap().is_empty());

    // Admin builds the menu
    let (status, _) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Starters"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, dish) = send(
        &app,
        "POST",
        "/api/categories/Starters/dishes",
        Some(json!({"name": "Soup", "price": 120, "description": "Tomato and basil"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dish["name"], "Soup");

    // Admin adds four tables; the QR target embeds the number
    for _ in 0..4 {
        let (status, _) = send(&app, "POST", "/api/tables", None).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, qr) = send(&app, "GET", "/api/tables/4/qr", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(qr["qr_target"], "https://host.example/menu?table=4");

    // Customer on table 4 adds 2x Soup
    let (status, cart) = send(&app, "POST", "/api/carts", Some(json!({"table_number": 4}))).await;
    assert_eq!(status, StatusCode::OK);
    let cart_id = cart["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/carts/{cart_id}/items"),
            Some(json!({"category": "Starters", "dish": "Soup", "delta": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, view) = send(&app, "GET", &format!("/api/carts/{cart_id}"), None).await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
    assert_eq!(view["total"].as_f64(), Some(240.0));

    // Placing the order empties the cart and appends one waiting entry
    let (status, order) = send(&app, "POST", &format!("/api/carts/{cart_id}/order"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "waiting");
    assert_eq!(order["table_number"], 4);
    assert_eq!(order["items"][0]["quantity"], 2);
    let order_id = order["id"].as_str().unwrap().to_string();

    let (_, view) = send(&app, "GET", &format!("/api/carts/{cart_id}"), None).await;
    assert!(view["lines"].as_array().unwrap().is_empty());

    let (_, orders) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);

    // Kitchen marks it ready; the total is unchanged
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/status"),
        Some(json!({"status": "ready"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "ready");

    let (_, latest) = send(&app, "GET", "/api/orders/latest/4", None).await;
    assert_eq!(latest["id"], order_id.as_str());
    assert_eq!(latest["status"], "ready");

    // Re-applying the same status changes nothing, including the sync version
    let (_, before) = send(&app, "GET", "/api/sync/status", None).await;
    let (status, again) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/status"),
        Some(json!({"status": "ready"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["status"], "ready");
    let (_, after) = send(&app, "GET", "/api/sync/status", None).await;
    assert_eq!(before["versions"]["orders"], after["versions"]["orders"]);
}

#[tokio::test]
async fn empty_cart_order_is_rejected() {
    let (app, _work_dir) = test_app();

    let (_, cart) = send(&app, "POST", "/api/carts", Some(json!({"table_number": 1}))).await;
    let cart_id = cart["id"].as_str().unwrap();

    let (status, body) = send(&app, "POST", &format!("/api/carts/{cart_id}/order"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (_, orders) = send(&app, "GET", "/api/orders", None).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn admin_input_validation_and_conflicts() {
    let (app, _work_dir) = test_app();

    // Blank category name
    let (status, _) = send(&app, "POST", "/api/categories", Some(json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Duplicate category
    send(&app, "POST", "/api/categories", Some(json!({"name": "Starters"}))).await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Starters"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Non-positive dish price
    let (status, _) = send(
        &app,
        "POST",
        "/api/categories/Starters/dishes",
        Some(json!({"name": "Free Soup", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Dish into an unknown category
    let (status, _) = send(
        &app,
        "POST",
        "/api/categories/Mains/dishes",
        Some(json!({"name": "Curry", "price": 250})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_category_removes_its_dishes() {
    let (app, _work_dir) = test_app();

    send(&app, "POST", "/api/categories", Some(json!({"name": "Starters"}))).await;
    send(
        &app,
        "POST",
        "/api/categories/Starters/dishes",
        Some(json!({"name": "Soup", "price": 120})),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/api/categories/Starters", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, menu) = send(&app, "GET", "/api/menu", None).await;
    assert!(menu["categories"].as_array().unwrap().is_empty());
    assert!(menu["dishes"].as_object().unwrap().is_empty());

    // Re-adding the category starts with an empty dish list
    let (_, doc) = send(&app, "POST", "/api/categories", Some(json!({"name": "Starters"}))).await;
    assert!(doc["dishes"]["Starters"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn confirmed_menu_is_a_snapshot() {
    let (app, _work_dir) = test_app();

    // Nothing to confirm yet
    let (status, _) = send(&app, "POST", "/api/menu/confirm", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, "GET", "/api/menu/confirmed", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "POST", "/api/categories", Some(json!({"name": "Starters"}))).await;
    send(
        &app,
        "POST",
        "/api/categories/Starters/dishes",
        Some(json!({"name": "Soup", "price": 120})),
    )
    .await;
    let (status, _) = send(&app, "POST", "/api/menu/confirm", None).await;
    assert_eq!(status, StatusCode::OK);

    // Later edits do not touch the snapshot
    send(&app, "DELETE", "/api/categories/Starters", None).await;
    let (status, confirmed) = send(&app, "GET", "/api/menu/confirmed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["dishes"]["Starters"][0]["name"], "Soup");
}

#[tokio::test]
async fn tables_renumber_densely_on_deletion() {
    let (app, _work_dir) = test_app();

    for _ in 0..3 {
        send(&app, "POST", "/api/tables", None).await;
    }

    let (status, tables) = send(&app, "DELETE", "/api/tables/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<u64> = tables
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(tables[1]["qr_target"], "https://host.example/menu?table=2");

    let (status, _) = send(&app, "DELETE", "/api/tables/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
