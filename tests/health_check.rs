mod common;

use backend_api::services::environment::StaticEnv;
use serde_json::json;

use common::{MONGO_URL, env_with_mongo_url, get_health, header, json_body, spawn_app};

#[test_log::test(tokio::test)]
async fn health_check_reports_unconfigured_when_mongo_url_unset() {
    let address = spawn_app(StaticEnv::new()).await;
    let client = reqwest::Client::new();

    let response = get_health(&client, &address).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(header(&response, "content-type"), Some("application/json"));
    assert_eq!(
        json_body(response).await,
        json!({ "status": "ok", "mongo_url_configured": false })
    );
}

#[test_log::test(tokio::test)]
async fn health_check_treats_empty_mongo_url_as_unconfigured() {
    let address = spawn_app(StaticEnv::new().with("MONGO_URL", "")).await;
    let client = reqwest::Client::new();

    let response = get_health(&client, &address).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "ok", "mongo_url_configured": false })
    );
}

#[test_log::test(tokio::test)]
async fn health_check_reports_configured_without_leaking_value() {
    let address = spawn_app(env_with_mongo_url()).await;
    let client = reqwest::Client::new();

    let response = get_health(&client, &address).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains(MONGO_URL));
    assert!(!body.contains("mongodb"));

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok", "mongo_url_configured": true }));
}

#[test_log::test(tokio::test)]
async fn health_check_is_idempotent() {
    let address = spawn_app(env_with_mongo_url()).await;
    let client = reqwest::Client::new();

    let first = json_body(get_health(&client, &address).await).await;
    for _ in 0..5 {
        let next = json_body(get_health(&client, &address).await).await;
        assert_eq!(next, first);
    }
}

#[test_log::test(tokio::test)]
async fn health_check_ignores_query_parameters() {
    let address = spawn_app(StaticEnv::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/health?verbose=true&MONGO_URL=x"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "ok", "mongo_url_configured": false })
    );
}

#[test_log::test(tokio::test)]
async fn responses_carry_a_request_id() {
    let address = spawn_app(StaticEnv::new()).await;
    let client = reqwest::Client::new();

    let response = get_health(&client, &address).await;
    let generated = header(&response, "x-request-id").map(str::to_owned);
    assert!(generated.is_some_and(|id| !id.is_empty()));

    let response = client
        .get(format!("{address}/api/health"))
        .header("x-request-id", "probe-42")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(header(&response, "x-request-id"), Some("probe-42"));
}
