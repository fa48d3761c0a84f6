// Framework bootstrap for the session server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::HttpIdentityClient;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<AppState> {
    let identity_base_url = config::identity_service_url();
    let identity_timeout = config::identity_request_timeout();
    let identity = HttpIdentityClient::new(identity_base_url.clone(), identity_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize identity client: {e}")))?;
    tracing::debug!(
        identity_base_url = %identity_base_url,
        identity_timeout_ms = identity_timeout.as_millis(),
        "identity client configured"
    );

    Ok(AppState::new(Arc::new(identity)))
}
