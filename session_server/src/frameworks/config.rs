use std::{env, time::Duration};

// Runtime/server settings, read from the environment (and `.env` when present).

pub fn http_port() -> u16 {
    env::var("SESSION_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3003)
}

pub fn identity_service_url() -> String {
    env::var("IDENTITY_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:3002".to_string())
}

pub fn identity_request_timeout() -> Duration {
    let millis = env::var("IDENTITY_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}
