//! Health check endpoints

use std::net::IpAddr;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const FALLBACK_ADDRESS: &str = "127.0.0.1";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// HTTP-style status code, always 200
    pub status: u16,
    pub status_message: String,
    /// UTC time the response was built
    pub timestamp: String,
    /// Address the host name resolves to
    pub ip_address: String,
    /// Configured listening port
    pub port: u16,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EchoQuery {
    /// Optional echo string
    pub echo: Option<String>,
}

/// Host name as reported by the operating system
fn host_name() -> Option<String> {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// First IPv4 address `name` resolves to
async fn resolve_ipv4(name: &str) -> Option<String> {
    let address = match tokio::net::lookup_host(format!("{}:0", name)).await {
        Ok(addrs) => addrs
            .map(|addr| addr.ip())
            .find(IpAddr::is_ipv4)
            .map(|ip| ip.to_string()),
        Err(e) => {
            tracing::debug!("Could not resolve host name {}: {}", name, e);
            None
        }
    };
    address
}

/// First IPv4 address of the host name, or the loopback address
pub async fn resolve_host_address() -> String {
    let address = match host_name() {
        Some(name) => resolve_ipv4(&name).await,
        None => None,
    };
    address.unwrap_or_else(|| FALLBACK_ADDRESS.to_string())
}

async fn make_health(port: u16, echo: Option<String>, path_echo: Option<String>) -> HealthResponse {
    HealthResponse {
        status: 200,
        status_message: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        ip_address: resolve_host_address().await,
        port,
        echo,
        path_echo,
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    params(EchoQuery),
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<crate::AppState>,
    Query(query): Query<EchoQuery>,
) -> Json<HealthResponse> {
    Json(make_health(state.config.server.port, query.echo, None).await)
}

/// Health check echoing a path segment
#[utoipa::path(
    get,
    path = "/health/{path_echo}",
    tag = "health",
    params(
        ("path_echo" = String, Path, description = "Required echo in the URL path"),
        EchoQuery
    ),
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check_with_echo(
    State(state): State<crate::AppState>,
    Path(path_echo): Path<String>,
    Query(query): Query<EchoQuery>,
) -> Json<HealthResponse> {
    Json(make_health(state.config.server.port, query.echo, Some(path_echo)).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_echoes() {
        let health = make_health(8000, Some("hi".into()), Some("there".into())).await;
        assert_eq!(health.status, 200);
        assert_eq!(health.port, 8000);
        assert_eq!(health.status_message, "OK");
        assert_eq!(health.echo.as_deref(), Some("hi"));
        assert_eq!(health.path_echo.as_deref(), Some("there"));
        assert!(health.timestamp.ends_with('Z'));
        assert!(health.ip_address.parse::<IpAddr>().is_ok());
    }

    #[tokio::test]
    async fn test_resolve_ipv4_for_literal_address() {
        assert_eq!(resolve_ipv4("127.0.0.1").await.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_host_name_comes_from_os() {
        assert!(host_name().is_some());
    }
}
