//! HTTP submission transport
//!
//! Posts the URL-encoded form the way the admin page's XHR helper does and
//! reports the status as its reason phrase, so `200` reads `"OK"`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use url::Url;

use procdef_editor_core::utils::log_sanitizer::truncate_for_log;
use procdef_editor_core::{
    ActionEncoding, ActionRequest, EditorConfig, EditorError, EditorResult, Transport,
    TransportResponse,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";

/// Form field carrying the CSRF token, mirrored into [`CSRF_HEADER`].
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `Transport` backed by a reqwest [`Client`].
///
/// No retries: a failed submission is reported once and the user clicks again.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<Url>,
}

impl HttpTransport {
    /// Build a client with the configured timeout and base URL.
    pub fn new(config: &EditorConfig) -> EditorResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());

        let client = builder
            .build()
            .map_err(|e| EditorError::Config(format!("Failed to build HTTP client: {e}")))?;

        let base_url = config
            .base_url
            .as_deref()
            .map(parse_base_url)
            .transpose()?;

        Ok(Self { client, base_url })
    }

    /// Use an existing client (shared connection pool, custom TLS roots).
    #[must_use]
    pub fn with_client(client: Client, base_url: Option<Url>) -> Self {
        Self { client, base_url }
    }

    /// Resolve `endpoint` against the base URL when it is relative.
    pub fn resolve(&self, endpoint: &str) -> EditorResult<Url> {
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_ref().ok_or_else(|| {
                    EditorError::Config(format!(
                        "Endpoint '{endpoint}' is relative and no base_url is configured"
                    ))
                })?;
                base.join(endpoint).map_err(|e| {
                    EditorError::Config(format!("Invalid endpoint '{endpoint}': {e}"))
                })
            }
            Err(e) => Err(EditorError::Config(format!(
                "Invalid endpoint '{endpoint}': {e}"
            ))),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn submit(
        &self,
        endpoint: &str,
        request: &ActionRequest,
        encoding: ActionEncoding,
    ) -> EditorResult<TransportResponse> {
        let url = self.resolve(endpoint)?;
        log::debug!("[http] #{} POST {url} ({})", request.seq, request.action);

        let mut builder = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, ACCEPT_JSON)
            .header("X-Requested-With", "XMLHttpRequest");

        if let Some(token) = request.fields.get(CSRF_FIELD).filter(|t| !t.is_empty()) {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = builder
            .body(request.encode(encoding))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EditorError::Transport(format!("Request to {url} timed out: {e}"))
                } else {
                    EditorError::Transport(format!("Request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        log::debug!("[http] #{} Response Status: {}", request.seq, status.as_u16());

        let response_text = response.text().await.map_err(|e| {
            EditorError::Transport(format!("Failed to read response body: {e}"))
        })?;

        log::debug!(
            "[http] #{} Response Body: {}",
            request.seq,
            truncate_for_log(&response_text)
        );

        Ok(TransportResponse::new(status_text(status), response_text))
    }
}

/// Reason phrase for `status`, `"Unknown"` for unregistered codes.
pub fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

fn parse_base_url(raw: &str) -> EditorResult<Url> {
    Url::parse(raw).map_err(|e| EditorError::Config(format!("Invalid base_url '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: Option<&str>) -> HttpTransport {
        HttpTransport::with_client(Client::new(), base.map(|b| Url::parse(b).unwrap()))
    }

    #[test]
    fn absolute_endpoint_used_as_is() {
        let url = transport(None)
            .resolve("https://admin.example.com/zato/process/definition/create/1/")
            .unwrap();
        assert_eq!(url.path(), "/zato/process/definition/create/1/");
    }

    #[test]
    fn relative_endpoint_joined_to_base() {
        let url = transport(Some("https://admin.example.com/zato/process/definition/"))
            .resolve("/zato/process/definition/create/1/")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://admin.example.com/zato/process/definition/create/1/"
        );
    }

    #[test]
    fn relative_endpoint_without_base_is_config_error() {
        let err = transport(None).resolve("/create/1/").unwrap_err();
        assert!(matches!(err, EditorError::Config(_)));
    }

    #[test]
    fn ok_status_reads_ok() {
        assert_eq!(status_text(StatusCode::OK), "OK");
        assert_eq!(status_text(StatusCode::BAD_REQUEST), "Bad Request");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "Unknown");
    }

    #[test]
    fn new_rejects_bad_base_url() {
        let config = EditorConfig {
            base_url: Some("not a url".into()),
            ..EditorConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(&config),
            Err(EditorError::Config(_))
        ));
    }
}
