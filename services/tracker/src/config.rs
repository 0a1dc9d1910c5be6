/// Tracker service configuration loaded from environment variables.
#[derive(Debug)]
pub struct TrackerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing and validating access tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3000). Env var: `TRACKER_PORT`.
    pub tracker_port: u16,
    /// Pool size (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    pub database_max_connections: u32,
    /// Connect/acquire timeout in seconds (default 5). Env var: `DATABASE_CONNECT_TIMEOUT_SECS`.
    pub database_connect_timeout_secs: u64,
    /// Per-request timeout in seconds (default 10). Env var: `REQUEST_TIMEOUT_SECS`.
    pub request_timeout_secs: u64,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            tracker_port: env_or("TRACKER_PORT", 3000),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            database_connect_timeout_secs: env_or("DATABASE_CONNECT_TIMEOUT_SECS", 5),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 10),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
