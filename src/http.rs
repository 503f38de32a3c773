use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, ClientBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Constants for API paths
pub mod api_paths {
    /// Path for requesting a presigned upload URL
    pub const SIGNED_URL: &str = "/api/files/aws-presigned";
    /// Path for retrieving media results
    pub const MEDIA_RESULT: &str = "/api/media/users";
    /// Path for retrieving pages of media results
    pub const ALL_MEDIA_RESULTS: &str = "/api/v2/media/users/pages";
    /// Path for submitting social media links
    pub const SOCIAL_MEDIA: &str = "/api/files/social";
}

/// Error code the API returns for requests not allowed on the free tier
const FREE_TIER_NOT_ALLOWED: &str = "free-tier-not-allowed";

/// Request/response transport used by the SDK.
///
/// Implementations must classify non-2xx responses into typed [`Error`]s so
/// callers never see raw transport failures. [`HttpClient`] is the production
/// implementation; tests may substitute their own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the base URL) with optional query parameters
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value>;

    /// POST a JSON body to `path` (relative to the base URL)
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// PUT raw bytes to an absolute URL, such as a presigned upload URL
    async fn put(&self, url: &str, data: Vec<u8>, content_type: &str) -> Result<()>;
}

/// HTTP client for making API requests
pub struct HttpClient {
    client: ReqwestClient,
    config: Config,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .user_agent(concat!("realitydefender-rust-sdk/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.get_timeout_seconds()))
            .build()?;

        Ok(Self { client, config })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.get_base_url(), path)
    }

    /// Handle API responses and parse JSON
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await?;

        if status.is_success() {
            if body.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!("Request to {url} failed with HTTP {status}");
        Err(error_for_status(status, &url, &body))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.url_for(path);
        debug!("GET {url}");

        let request = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Accept", "application/json")
            .query(params)
            .build()?;

        let response = self.client.execute(request).await?;
        self.handle_response(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url_for(path);
        debug!("POST {url}");

        let request = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(body)
            .build()?;

        let response = self.client.execute(request).await?;
        self.handle_response(response).await
    }

    async fn put(&self, url: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        debug!("PUT {} bytes ({content_type}) to presigned URL", data.len());

        // Do not include X-API-KEY for presigned URL uploads
        let request = self
            .client
            .put(url)
            .header("Content-Type", content_type)
            .header("Content-Length", data.len().to_string())
            .body(data)
            .build()?;

        let response = self.client.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await?;
        match error_for_status(status, url, &body) {
            Error::UnknownError(_) => Err(Error::UploadFailed(format!(
                "Failed to upload to presigned URL. Status: {status} Body: {}",
                String::from_utf8_lossy(&body)
            ))),
            err => Err(err),
        }
    }
}

/// Translate a non-2xx response into a typed error
pub(crate) fn error_for_status(status: StatusCode, url: &str, body: &[u8]) -> Error {
    let payload = serde_json::from_slice::<Value>(body).ok();
    let field = |name: &str| {
        payload
            .as_ref()
            .and_then(|p| p.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    match status {
        StatusCode::BAD_REQUEST
            if field("code").is_some_and(|code| code.contains(FREE_TIER_NOT_ALLOWED)) =>
        {
            Error::Unauthorized(
                field("message")
                    .or_else(|| field("response"))
                    .unwrap_or_else(|| "Free tier not allowed".to_string()),
            )
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Unauthorized("Unauthorized: Invalid API key".to_string())
        }
        StatusCode::NOT_FOUND => Error::NotFound(url.to_string()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            Error::InvalidFile("Unsupported file type".to_string())
        }
        s if s.is_server_error() => Error::ServerError(format!("Server error (HTTP {s})")),
        _ => Error::UnknownError(
            field("error")
                .or_else(|| field("message"))
                .unwrap_or_else(|| format!("Unknown error (HTTP {status})")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> HttpClient {
        HttpClient::new(Config {
            api_key: "test_api_key".to_string(),
            base_url: Some(server.url()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_new_rejects_empty_api_key() {
        let result = HttpClient::new(Config::default());
        assert!(matches!(result, Err(Error::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_get_sends_api_key_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/media/users/pages/2")
            .match_header("X-API-KEY", "test_api_key")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("size".into(), "5".into()),
                Matcher::UrlEncoded("name".into(), "clip".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"totalItems": 1}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .get(
                "/api/v2/media/users/pages/2",
                &[("size", "5".to_string()), ("name", "clip".to_string())],
            )
            .await
            .unwrap();

        assert_eq!(body["totalItems"], 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/files/social")
            .match_header("X-API-KEY", "test_api_key")
            .match_header("Content-Type", "application/json")
            .match_body(Matcher::Json(json!({"socialLink": "https://x.com/a"})))
            .with_status(200)
            .with_body(r#"{"requestId": "abc"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .post("/api/files/social", &json!({"socialLink": "https://x.com/a"}))
            .await
            .unwrap();

        assert_eq!(body["requestId"], "abc");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/empty")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.get("/empty", &[]).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_status_classification() {
        let mut server = mockito::Server::new_async().await;
        let cases = [
            (401, r#"{"error": "Unauthorized access"}"#, ErrorKind::Unauthorized),
            (403, r#"{"error": "Forbidden access"}"#, ErrorKind::Unauthorized),
            (404, r#"{"error": "Resource not found"}"#, ErrorKind::NotFound),
            (415, r#"{}"#, ErrorKind::InvalidFile),
            (500, r#"{"error": "Internal server error"}"#, ErrorKind::ServerError),
            (503, "", ErrorKind::ServerError),
            (400, r#"{"code": "bad-input"}"#, ErrorKind::UnknownError),
            (422, "Unparseable error", ErrorKind::UnknownError),
        ];

        let client = client_for(&server);
        for (status, body, expected) in cases {
            let path = format!("/status/{status}");
            let _m = server
                .mock("GET", path.as_str())
                .with_status(status)
                .with_body(body)
                .create_async()
                .await;

            let err = client.get(&path, &[]).await.unwrap_err();
            assert_eq!(err.kind(), expected, "HTTP {status}");
        }
    }

    #[tokio::test]
    async fn test_free_tier_maps_to_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/files/aws-presigned")
            .with_status(400)
            .with_body(
                json!({
                    "code": "free-tier-not-allowed",
                    "message": "Upgrade your plan to use this feature"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .post("/api/files/aws-presigned", &json!({"fileName": "a.jpg"}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::Unauthorized("Upgrade your plan to use this feature".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_error_messages() {
        let mut server = mockito::Server::new_async().await;
        let _m1 = server
            .mock("GET", "/custom")
            .with_status(400)
            .with_body(r#"{"error": "Custom error message"}"#)
            .create_async()
            .await;
        let _m2 = server
            .mock("GET", "/plain")
            .with_status(422)
            .with_header("content-type", "text/plain")
            .with_body("Unparseable error")
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(
            client.get("/custom", &[]).await.unwrap_err(),
            Error::UnknownError("Custom error message".to_string())
        );
        assert_eq!(
            client.get("/plain", &[]).await.unwrap_err(),
            Error::UnknownError("Unknown error (HTTP 422 Unprocessable Entity)".to_string())
        );
    }

    #[tokio::test]
    async fn test_put_uploads_without_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/upload")
            .match_header("Content-Type", "image/png")
            .match_header("X-API-KEY", Matcher::Missing)
            .match_body("png bytes")
            .with_status(200)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .put(
                &format!("{}/upload", server.url()),
                b"png bytes".to_vec(),
                "image/png",
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_failure_classification() {
        let mut server = mockito::Server::new_async().await;
        let _m1 = server
            .mock("PUT", "/upload-fail")
            .with_status(400)
            .with_body("Upload failed")
            .create_async()
            .await;
        let _m2 = server
            .mock("PUT", "/upload-down")
            .with_status(502)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .put(&format!("{}/upload-fail", server.url()), vec![1], "image/jpeg")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UploadFailed);

        let err = client
            .put(&format!("{}/upload-down", server.url()), vec![1], "image/jpeg")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);
    }
}
