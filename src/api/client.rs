use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use super::error::ApiError;
use super::request::BookingRequest;
use crate::config::ApiConfig;
use crate::model::BookingConfirmation;

/// Something that can turn a validated request into a confirmation.
pub trait BookingApi {
    /// Submits `request` once. No retries.
    fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingConfirmation, ApiError>>;
}

/// Success body: `{ "bookingDetails": { ... } }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingResponse {
    booking_details: BookingConfirmation,
}

/// [`BookingApi`] over HTTP: `POST <endpoint>` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpBookingApi {
    /// Creates a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_builder(reqwest::Client::builder(), config)
    }

    /// Creates a client from a pre-configured builder; the timeout is applied on top.
    pub(crate) fn with_builder(
        builder: reqwest::ClientBuilder,
        config: &ApiConfig,
    ) -> Result<Self, ApiError> {
        let client = builder
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BookingApi for HttpBookingApi {
    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "posting booking request");

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %body, "booking API rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: BookingResponse = serde_json::from_str(&body)?;
        Ok(parsed.booking_details)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use super::*;
    use crate::model::{BookingDraft, DraftEdit};

    const CONFIRMATION_BODY: &str = r#"{"bookingDetails":{"bookingId":"SB-TEST-1234","when":"2025-12-24T18:00","people":4,"lanes":1,"price":580}}"#;

    fn make_request() -> BookingRequest {
        let mut draft = BookingDraft::new();
        draft.apply(DraftEdit::Date("2025-12-24".into()));
        draft.apply(DraftEdit::Time("18:00".into()));
        draft.apply(DraftEdit::Players(4));
        draft.apply(DraftEdit::Lanes(1));
        for size in ["40", "41", "42", "43"] {
            let id = draft.apply(DraftEdit::AddShoe).unwrap();
            draft.apply(DraftEdit::ShoeSize(id, size.into()));
        }
        BookingRequest::from_draft(&draft).unwrap()
    }

    fn make_api(endpoint: String, api_key: Option<&str>) -> HttpBookingApi {
        let config = ApiConfig {
            endpoint,
            api_key: api_key.map(Into::into),
            timeout_seconds: 5,
        };
        HttpBookingApi::with_builder(reqwest::Client::builder().no_proxy(), &config).unwrap()
    }

    /// Reads one HTTP request (headers plus `Content-Length` body) as text.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    /// Serves a single canned response and hands back the raw request it saw.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (format!("http://{addr}/booking"), handle)
    }

    #[tokio::test]
    async fn success_returns_booking_details() {
        let (endpoint, server) = serve_once("200 OK", CONFIRMATION_BODY).await;
        let api = make_api(endpoint, None);

        let confirmation = api.create_booking(&make_request()).await.unwrap();
        assert_eq!(confirmation.booking_id, "SB-TEST-1234");
        assert_eq!(confirmation.when, "2025-12-24T18:00");
        assert_eq!(confirmation.people, 4);
        assert_eq!(confirmation.lanes, 1);
        assert_eq!(confirmation.price, 580);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn posts_json_body() {
        let (endpoint, server) = serve_once("200 OK", CONFIRMATION_BODY).await;
        let api = make_api(endpoint, None);
        api.create_booking(&make_request()).await.unwrap();

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /booking HTTP/1.1"), "got: {raw}");
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        let body = raw.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["playerCount"], 4);
        assert_eq!(json["laneCount"], 1);
        assert_eq!(json["shoeSizes"][3], "43");
    }

    #[tokio::test]
    async fn sends_api_key_header_when_configured() {
        let (endpoint, server) = serve_once("200 OK", CONFIRMATION_BODY).await;
        let api = make_api(endpoint, Some("k-123"));
        api.create_booking(&make_request()).await.unwrap();

        let raw = server.await.unwrap();
        assert!(raw.to_lowercase().contains("x-api-key: k-123"), "got: {raw}");
    }

    #[tokio::test]
    async fn omits_api_key_header_by_default() {
        let (endpoint, server) = serve_once("200 OK", CONFIRMATION_BODY).await;
        let api = make_api(endpoint, None);
        api.create_booking(&make_request()).await.unwrap();

        let raw = server.await.unwrap();
        assert!(!raw.to_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;
        let api = make_api(endpoint, None);

        match api.create_booking(&make_request()).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("boom"));
            }
            other => panic!("expected Status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn body_without_booking_details_is_decode_error() {
        let (endpoint, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let api = make_api(endpoint, None);

        let result = api.create_booking(&make_request()).await;
        assert!(matches!(result, Err(ApiError::Decode(_))), "got {result:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = make_api(format!("http://{addr}/booking"), None);
        let result = api.create_booking(&make_request()).await;
        assert!(matches!(result, Err(ApiError::Http(_))), "got {result:?}");
    }

    #[test]
    fn endpoint_accessor() {
        let api = make_api("http://example.invalid/booking".into(), None);
        assert_eq!(api.endpoint(), "http://example.invalid/booking");
    }
}
