use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Error, ErrorCode, Result};

use super::types::Envelope;

/// Open Platform API root for Feishu
pub const DEFAULT_BASE_URL: &str = "https://open.feishu.cn/open-apis";

/// Response header carrying the platform's request log ID
pub const LOG_ID_HEADER: &str = "x-tt-logid";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Feishu client for the Open Platform REST API
///
/// The client is stateless apart from the HTTP connection pool: every call
/// takes the bearer token it should authenticate with.
pub struct FeishuClient {
    /// HTTP client for REST API calls
    pub(crate) http_client: Client,
    /// API root (e.g., "https://open.feishu.cn/open-apis")
    base_url: Url,
}

impl FeishuClient {
    /// Create a new Feishu client
    ///
    /// # Arguments
    /// * `base_url` - The API root, including the `/open-apis` segment
    ///
    /// # Returns
    /// A Result containing the FeishuClient or an Error
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::new(ErrorCode::InvalidArgument, format!("Invalid URL: {e}")))?;

        let http_client = Client::builder()
            .user_agent(concat!("libminutes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client, base_url })
    }

    /// Build the full API URL for a given endpoint
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path, optionally with a query (e.g., "/contact/v3/users/u1?user_id_type=user_id")
    pub fn api_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{endpoint}")
    }

    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `token` - Bearer token, if the endpoint is authenticated
    pub async fn get(&self, endpoint: &str, token: Option<&str>) -> Result<Response> {
        let url = self.api_url(endpoint);
        let mut request = self.http_client.get(&url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("GET request failed: {e}")))
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, endpoint: &str, token: Option<&str>, body: &T) -> Result<Response> {
        self.send_json(Method::POST, endpoint, token, body).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch<T: Serialize>(&self, endpoint: &str, token: Option<&str>, body: &T) -> Result<Response> {
        self.send_json(Method::PATCH, endpoint, token, body).await
    }

    async fn send_json<T: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let url = self.api_url(endpoint);
        let payload = serde_json::to_vec(body)
            .map_err(|e| Error::invalid_argument(format!("Failed to encode request body: {e}")))?;

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::new(ErrorCode::NetworkError, format!("{method} request failed: {e}")))
    }

    /// Parse a response body and check its envelope code
    ///
    /// The HTTP status is not used to decide success: Feishu reports errors
    /// through the `code` field and often pairs them with a 4xx status. The
    /// envelope is read first; the full body is decoded only when `code == 0`.
    ///
    /// # Returns
    /// The parsed body when `code == 0`, otherwise an `ApiRejected` error
    pub async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let log_id = response
            .headers()
            .get(LOG_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let with_context = |mut err: Error| {
            err = err.with_http_status(status.as_u16());
            if let Some(id) = log_id.clone() {
                err = err.with_log_id(id);
            }
            err
        };

        let text = response
            .text()
            .await
            .map_err(|e| with_context(Error::new(ErrorCode::NetworkError, format!("Failed to read response: {e}"))))?;

        let envelope: Envelope = serde_json::from_str(&text).map_err(|e| {
            with_context(Error::new(
                ErrorCode::Unknown,
                format!("Failed to parse response with status {status}: {e}"),
            ))
        })?;

        if envelope.code != 0 {
            return Err(with_context(Error::rejected(envelope.code, envelope.msg)));
        }

        serde_json::from_str(&text).map_err(|e| {
            with_context(Error::new(
                ErrorCode::Unknown,
                format!("Failed to parse response body: {e}"),
            ))
        })
    }
}
