//! REST client for the inspection API.
//!
//! Wraps `reqwest` with the bearer-token handling the dashboard needs: the
//! token comes from an injected [`CredentialProvider`], and a 401 clears it
//! unless the request was itself a login or registration attempt.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rig_inspect::client::{ApiClient, InMemoryCredentials};
//! use rig_inspect::api::FilterCriteria;
//!
//! # async fn run() -> Result<(), rig_inspect::client::ClientError> {
//! let credentials = Arc::new(InMemoryCredentials::new("token"));
//! let client = ApiClient::new("http://localhost:8080", credentials)?;
//! let open = client
//!     .list_inspections(&FilterCriteria::all().with_status("pending"))
//!     .await?;
//! println!("{} pending inspections", open.len());
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod error;

pub use credentials::{CredentialProvider, InMemoryCredentials};
pub use error::{ClientError, ClientResult};

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{
    ApiError, FilterCriteria, Inspection, InspectionDraft, InspectionId, Inspector,
    InspectorDraft, InspectorId, MonthOrder, Period, ReportData, Rig, RigDraft, RigId,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Paths on which a 401 means "wrong credentials entered", not "session expired".
const AUTH_PATHS: [&str; 2] = ["/login", "/register"];

/// Whether a 401 on `path` should clear stored credentials.
pub fn should_clear_credentials(path: &str) -> bool {
    !AUTH_PATHS.iter().any(|p| path.contains(p))
}

/// Query-string pairs for `criteria`. Sentinel values are omitted.
pub fn criteria_query(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    let selectors = [
        ("rig", &criteria.rig),
        ("inspector", &criteria.inspector),
        ("status", &criteria.status),
        ("severity", &criteria.severity),
        ("q", &criteria.query),
    ];
    for (key, value) in selectors {
        if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            pairs.push((key, v.to_string()));
        }
    }
    if criteria.period != Period::All {
        pairs.push(("period", criteria.period.to_string()));
    }
    if let Some(start) = criteria.start_date {
        pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = criteria.end_date {
        pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
    }
    pairs
}

fn month_order_param(order: MonthOrder) -> &'static str {
    match order {
        MonthOrder::FirstSeen => "first-seen",
        MonthOrder::Calendar => "calendar",
    }
}

/// Client for the `/api` endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(
        base_url: impl AsRef<str>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> ClientResult<Self> {
        Self::with_timeout(base_url, credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl AsRef<str>,
        credentials: Arc<dyn CredentialProvider>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "base URL must be an absolute http:// or https:// URL, got '{}'",
                    raw
                ))
            })?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL for `segments` under the base URL; each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Configuration(format!("'{}' cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();

        let mut request = self.http.request(method, url).query(query);
        if let Some(token) = self.credentials.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            if should_clear_credentials(&path) {
                log::debug!("401 from {}, clearing stored credentials", path);
                self.credentials.clear();
            }
            return Err(ClientError::Unauthorized { path });
        }

        if !status.is_success() {
            let error = serde_json::from_str::<ApiError>(&text).ok();
            let message = error
                .as_ref()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| text.trim().to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                path,
                message,
                error,
            });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::Decode {
            path,
            message: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> ClientResult<T> {
        self.send::<T, ()>(Method::GET, segments, query, None).await
    }

    // ==================== Health ====================

    /// Raw `/health` body.
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get(&["health"], &[]).await
    }

    // ==================== Inspections ====================

    pub async fn list_inspections(
        &self,
        criteria: &FilterCriteria,
    ) -> ClientResult<Vec<Inspection>> {
        self.get(&["api", "inspections"], &criteria_query(criteria))
            .await
    }

    pub async fn get_inspection(&self, id: &InspectionId) -> ClientResult<Inspection> {
        self.get(&["api", "inspections", id.as_str()], &[]).await
    }

    pub async fn create_inspection(&self, draft: &InspectionDraft) -> ClientResult<Inspection> {
        self.send(Method::POST, &["api", "inspections"], &[], Some(draft))
            .await
    }

    pub async fn update_inspection(
        &self,
        id: &InspectionId,
        draft: &InspectionDraft,
    ) -> ClientResult<Inspection> {
        let segments = ["api", "inspections", id.as_str()];
        self.send(Method::PUT, &segments, &[], Some(draft)).await
    }

    pub async fn delete_inspection(&self, id: &InspectionId) -> ClientResult<Inspection> {
        let segments = ["api", "inspections", id.as_str()];
        self.send::<_, ()>(Method::DELETE, &segments, &[], None)
            .await
    }

    // ==================== Rigs ====================

    pub async fn list_rigs(&self) -> ClientResult<Vec<Rig>> {
        self.get(&["api", "rigs"], &[]).await
    }

    pub async fn get_rig(&self, id: &RigId) -> ClientResult<Rig> {
        self.get(&["api", "rigs", id.as_str()], &[]).await
    }

    pub async fn create_rig(&self, draft: &RigDraft) -> ClientResult<Rig> {
        self.send(Method::POST, &["api", "rigs"], &[], Some(draft))
            .await
    }

    pub async fn update_rig(&self, id: &RigId, draft: &RigDraft) -> ClientResult<Rig> {
        self.send(Method::PUT, &["api", "rigs", id.as_str()], &[], Some(draft))
            .await
    }

    pub async fn delete_rig(&self, id: &RigId) -> ClientResult<Rig> {
        self.send::<_, ()>(Method::DELETE, &["api", "rigs", id.as_str()], &[], None)
            .await
    }

    // ==================== Inspectors ====================

    pub async fn list_inspectors(&self) -> ClientResult<Vec<Inspector>> {
        self.get(&["api", "inspectors"], &[]).await
    }

    pub async fn get_inspector(&self, id: &InspectorId) -> ClientResult<Inspector> {
        self.get(&["api", "inspectors", id.as_str()], &[]).await
    }

    pub async fn create_inspector(&self, draft: &InspectorDraft) -> ClientResult<Inspector> {
        self.send(Method::POST, &["api", "inspectors"], &[], Some(draft))
            .await
    }

    pub async fn update_inspector(
        &self,
        id: &InspectorId,
        draft: &InspectorDraft,
    ) -> ClientResult<Inspector> {
        let segments = ["api", "inspectors", id.as_str()];
        self.send(Method::PUT, &segments, &[], Some(draft)).await
    }

    pub async fn delete_inspector(&self, id: &InspectorId) -> ClientResult<Inspector> {
        let segments = ["api", "inspectors", id.as_str()];
        self.send::<_, ()>(Method::DELETE, &segments, &[], None)
            .await
    }

    // ==================== Reports ====================

    /// Full report for `criteria`.
    pub async fn report(
        &self,
        criteria: &FilterCriteria,
        order: MonthOrder,
    ) -> ClientResult<ReportData> {
        let mut query = criteria_query(criteria);
        query.push(("monthOrder", month_order_param(order).to_string()));
        self.get(&["api", "reports"], &query).await
    }
}
