use std::net::SocketAddr;

use clap::Parser;

/// Server configuration, resolved from CLI flags and environment variables
/// (a `.env` file is loaded before parsing).
#[derive(Parser, Debug, Clone)]
#[command(name = "clipflow-server", version)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "CLIPFLOW_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum connections in the database pool
    #[arg(long, env = "CLIPFLOW_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,

    /// HS256 secret used to validate bearer tokens
    #[arg(long, env = "CLIPFLOW_JWT_SECRET")]
    pub jwt_secret: String,
}
