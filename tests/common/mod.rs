#![allow(dead_code)]

use std::sync::Arc;

use backend_api::config::AppConfig;
use backend_api::services::environment::StaticEnv;
use reqwest::Response;
use serde_json::Value;
use tokio::net::TcpListener;

pub const MONGO_URL: &str = "mongodb://localhost:27017";

/// Spawns the application with the default config and returns its address.
pub async fn spawn_app(env: StaticEnv) -> String {
    spawn_app_with_config(AppConfig::default(), env).await
}

/// Spawns the application on a random local port and returns its address.
pub async fn spawn_app_with_config(config: AppConfig, env: StaticEnv) -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = backend_api::app_with_env_source(&config, Arc::new(env));
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

pub fn env_with_mongo_url() -> StaticEnv {
    StaticEnv::new().with("MONGO_URL", MONGO_URL)
}

pub async fn get_health(client: &reqwest::Client, address: &str) -> Response {
    client
        .get(format!("{address}/api/health"))
        .send()
        .await
        .expect("Failed to execute request")
}

/// Reads the response body as JSON.
pub async fn json_body(response: Response) -> Value {
    response.json().await.expect("Response body is not JSON")
}

pub fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|value| value.to_str().expect("Header is not ASCII"))
}
