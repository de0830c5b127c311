// Hand-crafted async HTTP client for the streamwatch backend REST API.
//
// Base path: /api/
// No authentication — the backend is expected to sit on a trusted network.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types;

// ── Error response shape from the backend ───────────────────────────

/// The backend reports failures as `{"error": "..."}`; a few endpoints
/// use `{"message": "..."}` instead. Both are accepted.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the streamwatch backend.
///
/// Stateless between calls: each operation maps to exactly one JSON REST
/// request under `/api/`. Cheap to clone (shares the connection pool).
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ────────────────────────────────────────────────

    /// Build a client against the backend at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::from_reqwest(base_url, reqwest::Client::new())
    }

    /// Wrap an existing `reqwest::Client` (caller manages timeouts etc.).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL with the `/api/` prefix appended exactly once.
    ///
    /// `http://host:5000` and `http://host:5000/api` both normalize to
    /// `http://host:5000/api/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ─────────────────────────────────────────────────

    /// Join a relative path (e.g. `"streams"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/`, so joining `streams/…` works.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    // ── HTTP verbs ──────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ───────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Read a best-effort error payload from a non-success response,
    /// falling back to the HTTP status text when the body is unreadable.
    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.error.or(e.message))
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::Remote {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Streams ─────────────────────────────────────────────────────

    pub async fn list_streams(&self) -> Result<types::StreamListResponse, Error> {
        self.get("streams").await
    }

    pub async fn create_stream(&self, body: &types::NewStream) -> Result<types::StreamCreated, Error> {
        self.post("streams", body).await
    }

    pub async fn delete_stream(&self, stream_id: &str) -> Result<types::Ack, Error> {
        self.delete(&format!("streams/{stream_id}")).await
    }

    // ── Models ──────────────────────────────────────────────────────

    pub async fn attach_model(&self, stream_id: &str, model: &str) -> Result<types::Ack, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            model: &'a str,
        }

        self.post(&format!("streams/{stream_id}/models"), &Body { model })
            .await
    }

    pub async fn detach_model(&self, stream_id: &str, model: &str) -> Result<types::Ack, Error> {
        self.delete(&format!("streams/{stream_id}/models/{model}"))
            .await
    }

    // ── Results ─────────────────────────────────────────────────────

    /// Per-model inference results for one stream. Opaque payload.
    pub async fn stream_results(&self, stream_id: &str) -> Result<serde_json::Value, Error> {
        self.get(&format!("results/{stream_id}")).await
    }

    // ── Alerts ──────────────────────────────────────────────────────

    pub async fn list_alerts(&self) -> Result<types::AlertListResponse, Error> {
        self.get("alerts").await
    }
}
