//! Client side of the activities HTTP API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;
use urlencoding::encode;

use crate::model::ActivityCollection;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `detail` is the server's human-readable reason, if any.
    #[error("server returned HTTP {status}{}", detail_suffix(.detail))]
    Server { status: u16, detail: Option<String> },

    /// Response body was not the JSON we expected.
    #[error("could not parse response: {0}")]
    Parse(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// URL builders. `base` is prepended verbatim minus any trailing `/`;
/// an empty base means same origin.
pub mod endpoints {
    use super::encode;

    pub fn activities(base: &str) -> String {
        format!("{}/activities", base.trim_end_matches('/'))
    }

    pub fn signup(base: &str, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            base.trim_end_matches('/'),
            encode(activity),
            encode(email)
        )
    }

    pub fn participant(base: &str, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            base.trim_end_matches('/'),
            encode(activity),
            encode(email)
        )
    }
}

/// The three calls the board makes. Futures are not `Send`: everything runs
/// on the browser's single thread.
#[async_trait(?Send)]
pub trait ActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// Returns the server's confirmation message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct SignupReceipt {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Pulls `detail` out of an error body. Non-string details (validation error
/// lists) are passed through as compact JSON.
pub fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Error for a non-2xx response. A body that is not JSON at all counts as a
/// parse failure, not a server-reported one.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(_) => ApiError::Server {
            status,
            detail: detail_from_body(body),
        },
        Err(e) => ApiError::Parse(e.to_string()),
    }
}

/// A removal is only acknowledged by a JSON body.
pub fn ack_from_body(body: &str) -> Result<(), ApiError> {
    serde_json::from_str::<serde_json::Value>(body)?;
    Ok(())
}

pub fn message_from_body(body: &str) -> Result<String, ApiError> {
    let receipt: SignupReceipt = serde_json::from_str(body)?;
    Ok(receipt.message)
}

/// `ActivityApi` over `fetch`, via gloo-net.
#[derive(Debug, Clone, Default)]
pub struct GlooApi {
    base: String,
}

impl GlooApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await?;
        Err(error_from_body(status, &body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        let resp = Request::get(&endpoints::activities(&self.base)).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<ActivityCollection>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = endpoints::signup(&self.base, activity, email);
        let resp = Self::check(Request::post(&url).send().await?).await?;
        let body = resp.text().await?;
        message_from_body(&body)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let url = endpoints::participant(&self.base, activity, email);
        let resp = Self::check(Request::delete(&url).send().await?).await?;
        let body = resp.text().await?;
        ack_from_body(&body)
    }
}
