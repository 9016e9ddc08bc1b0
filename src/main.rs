use std::process::ExitCode;

use backend_api::config::AppConfig;
use backend_api::error::{AppError, AppResult};
use backend_api::services::environment::ProcessEnv;
use backend_api::{app, shutdown::shutdown_signal, telemetry};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            eprintln!("backend-api: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env(&ProcessEnv)?;
    telemetry::init_tracing(config.log_format)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    info!(%addr, "Server listening");

    axum::serve(listener, app(&config).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!("Server stopped");
    Ok(())
}
