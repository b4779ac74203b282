use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::{ClientError, ClientResult},
    model::{Coordinate, Location, WeatherResponse, decode},
};

use super::WeatherClient;

/// Forecast endpoint for the single location this demo displays.
pub const DEFAULT_URL: &str = "https://www.metaweather.com/api/location/2459115";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint and transport settings for [`LiveClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSettings {
    pub url: String,
    pub timeout: Duration,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self { url: DEFAULT_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Fetches weather over HTTP from the metaweather-style location API.
#[derive(Debug, Clone)]
pub struct LiveClient {
    url: String,
    http: Client,
}

impl LiveClient {
    pub fn new() -> Self {
        Self { url: DEFAULT_URL.to_string(), http: Client::new() }
    }

    pub fn with_settings(settings: &LiveSettings) -> ClientResult<Self> {
        let http = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self { url: settings.url.clone(), http })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for LiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherClient for LiveClient {
    async fn weather(&self) -> ClientResult<WeatherResponse> {
        debug!(url = %self.url, "requesting weather");

        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        let response = decode(&body)?;
        debug!(entries = response.consolidated_weather.len(), "decoded weather response");

        Ok(response)
    }

    async fn search_locations(&self, _coordinate: Coordinate) -> ClientResult<Vec<Location>> {
        Ok(Vec::new())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();

            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/api/location/2459115")
    }

    fn client_for(url: String) -> LiveClient {
        let settings = LiveSettings { url, timeout: Duration::from_secs(5) };
        LiveClient::with_settings(&settings).unwrap()
    }

    #[test]
    fn default_client_points_at_fixed_location() {
        assert_eq!(LiveClient::new().url(), DEFAULT_URL);
        assert!(DEFAULT_URL.ends_with("/api/location/2459115"));
    }

    #[tokio::test]
    async fn fetches_and_decodes_body() {
        let body = r#"{"consolidated_weather":[
            {"applicable_date":"2021-04-06","id":11,"max_temp":14.2,"min_temp":4.1,"the_temp":12.0},
            {"applicable_date":"2021-04-07","id":12,"max_temp":11.0,"min_temp":2.5,"the_temp":9.5}
        ]}"#;
        let url = serve_once("200 OK", body.to_string()).await;

        let response = client_for(url).weather().await.unwrap();

        let ids: Vec<i64> = response.consolidated_weather.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(
            response.consolidated_weather[1].applicable_date,
            NaiveDate::from_ymd_opt(2021, 4, 7).unwrap()
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("404 Not Found", "x".repeat(500)).await;

        let err = client_for(url).weather().await.unwrap_err();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body.len(), 203);
                assert!(body.ends_with("..."));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let body = r#"{"consolidated_weather":[{"applicable_date":"2021-04-06 00:00","id":1,"max_temp":1.0,"min_temp":0.0,"the_temp":0.5}]}"#;
        let url = serve_once("200 OK", body.to_string()).await;

        let err = client_for(url).weather().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{addr}/")).weather().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn search_is_not_implemented_and_returns_nothing() {
        let locations = LiveClient::new()
            .search_locations(Coordinate::new(48.85, 2.35))
            .await
            .unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
        assert_eq!(truncate_body(&"é".repeat(250)).chars().count(), 203);
    }
}
