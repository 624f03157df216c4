//! End-to-end tests of the HTTP surface over a real listener.

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use super::*;
use crate::ledger::LedgerConfig;

/// Serve a fresh ledger on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let app = create_router(AppState::new(LedgerConfig::default()));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post(client: &Client, url: String, body: Value) -> (StatusCode, Value) {
    let resp = client.post(url).json(&body).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

async fn get(client: &Client, url: String) -> (StatusCode, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn health_check() {
    let base = spawn_server().await;
    let body = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn worked_scenario_over_http() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, train) = post(
        &client,
        format!("{base}/trains"),
        json!({
            "route": ["DELHI", "AGRA", "BHOPAL", "MUMBAI"],
            "seats": 2,
            "departure": "08:00"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(train["train_id"], 1);

    let (_, p1) = post(&client, format!("{base}/passengers"), json!({"name": "Asha", "age": 30})).await;
    let (_, p2) = post(&client, format!("{base}/passengers"), json!({"name": "Bilal", "age": 40})).await;
    assert_eq!(p1["passenger_id"], 1);
    assert_eq!(p2["passenger_id"], 2);

    let (status, ticket) = post(
        &client,
        format!("{base}/tickets"),
        json!({
            "train_id": 1,
            "passenger_ids": [1, 2],
            "from": "DELHI",
            "to": "BHOPAL"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ticket["ticket_id"], 1);

    let (status, seats) = get(&client, format!("{base}/trains/1/seats?from=DELHI&to=BHOPAL")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seats["available_seats"], 0);

    let (_, seats) = get(&client, format!("{base}/trains/1/seats?from=delhi&to=agra")).await;
    assert_eq!(seats["available_seats"], 2);

    let (status, boarding) = get(&client, format!("{base}/trains/1/boarding/DELHI")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(boarding["boarding"], 2);

    let (_, oldest) = get(&client, format!("{base}/trains/1/oldest")).await;
    assert_eq!(oldest["oldest_age"], 40);

    let (status, through) = get(
        &client,
        format!("{base}/stations/BHOPAL/trains?start=10:00&end=10:00"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(through["train_ids"], json!([1]));

    let (_, through) = get(
        &client,
        format!("{base}/stations/BHOPAL/trains?start=09:00&end=09:59"),
    )
    .await;
    assert_eq!(through["train_ids"], json!([]));

    let (_, view) = get(&client, format!("{base}/trains/1")).await;
    assert_eq!(view["route"], json!(["DELHI", "AGRA", "BHOPAL", "MUMBAI"]));
    assert_eq!(view["departure"], "08:00");
    assert_eq!(view["tickets"][0]["passenger_ids"], json!([1, 2]));

    let (_, mine) = get(&client, format!("{base}/passengers/2/tickets")).await;
    assert_eq!(mine["tickets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn error_statuses() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get(&client, format!("{base}/trains/9/oldest")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "train 9 not found");

    post(
        &client,
        format!("{base}/trains"),
        json!({"route": ["PUNE", "MUMBAI"], "seats": 1, "departure": "06:15"}),
    )
    .await;

    let (status, body) = get(&client, format!("{base}/trains/1/boarding/CHENNAI")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Train is not passing from this station");

    let (status, _) = get(&client, format!("{base}/trains/1/seats?from=GOA&to=PUNE")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(
        &client,
        format!("{base}/stations/PUNE/trains?start=25:00&end=26:00"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &client,
        format!("{base}/trains"),
        json!({"route": ["PUNE"], "seats": 1, "departure": "6am"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        &client,
        format!("{base}/trains"),
        json!({"route": ["ATLANTIS"], "seats": 1, "departure": "06:00"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));

    post(&client, format!("{base}/passengers"), json!({"name": "Asha", "age": 30})).await;
    post(&client, format!("{base}/passengers"), json!({"name": "Bilal", "age": 40})).await;

    let (status, _) = post(
        &client,
        format!("{base}/tickets"),
        json!({"train_id": 1, "passenger_ids": [1], "from": "MUMBAI", "to": "PUNE"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &client,
        format!("{base}/tickets"),
        json!({"train_id": 1, "passenger_ids": [1, 2], "from": "PUNE", "to": "MUMBAI"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(
        &client,
        format!("{base}/tickets"),
        json!({"train_id": 1, "passenger_ids": [5], "from": "PUNE", "to": "MUMBAI"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_passenger_tickets_is_not_found() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get(&client, format!("{base}/passengers/99/tickets")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "passenger 99 not found");

    post(&client, format!("{base}/passengers"), json!({"name": "Asha", "age": 30})).await;
    let (status, body) = get(&client, format!("{base}/passengers/1/tickets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tickets"], json!([]));
}

#[tokio::test]
async fn trains_through_lists_several_trains_by_id() {
    let base = spawn_server().await;
    let client = Client::new();

    // AGRA arrivals: 1 at 10:00, 2 at 08:30, 3 never, 4 at 09:00
    for (route, departure) in [
        (json!(["DELHI", "AGRA", "BHOPAL"]), "09:00"),
        (json!(["PUNE", "MUMBAI", "AGRA"]), "06:30"),
        (json!(["CHENNAI", "BENGALURU"]), "08:00"),
        (json!(["AGRA", "JAIPUR"]), "09:00"),
    ] {
        let (status, _) = post(
            &client,
            format!("{base}/trains"),
            json!({"route": route, "seats": 4, "departure": departure}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, through) = get(
        &client,
        format!("{base}/stations/agra/trains?start=08:30&end=10:00"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(through["station"], "AGRA");
    assert_eq!(through["train_ids"], json!([1, 2, 4]));

    let (_, through) = get(
        &client,
        format!("{base}/stations/AGRA/trains?start=08:31&end=09:59"),
    )
    .await;
    assert_eq!(through["train_ids"], json!([4]));
}
