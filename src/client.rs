use crate::error::{Error, Result};
use crate::models::{PollId, PollResults};
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::Value;

/// Thin wrapper over the poll service's HTTP surface. One client is built
/// per run; requests are issued strictly one at a time, so the underlying
/// connection is kept alive and reused for the whole run.
pub struct PollClient {
    inner: reqwest::Client,
    base_url: String,
}

/// What the service said to a single ballot. A rejection is an ordinary
/// outcome, not an error: the run keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { status: u16 },
}

impl PollClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Progress line for every exchange; rejections get promoted to warn so
    // the soft-failure path is visible in the log.
    fn log_status(method: &str, path: &str, status: StatusCode) {
        if status.is_success() {
            debug!("{} request to {} returned {}", method, path, status.as_u16());
        } else {
            warn!("{} request to {} returned {}", method, path, status.as_u16());
        }
    }

    /// `POST /create`. Any non-success status or a body without an `id`
    /// field is fatal: without an identifier there is no poll to exercise.
    pub async fn create_poll(&self) -> Result<PollId> {
        let path = "/create";
        let resp = self.inner.post(self.url(path)).send().await?;
        let status = resp.status();
        Self::log_status("POST", path, status);
        if !status.is_success() {
            return Err(Error::Service {
                method: "POST",
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        let body: Value = serde_json::from_str(&resp.text().await?)?;
        let id = body.get("id").ok_or(Error::MissingId)?;
        PollId::from_value(id).ok_or(Error::MissingId)
    }

    /// `POST /poll/{id}/submit` with the ballot as a JSON array. The
    /// response body is ignored; only the status matters.
    pub async fn submit_ballot(
        &self,
        poll: &PollId,
        ballot: &[String],
    ) -> Result<SubmissionOutcome> {
        let path = format!("/poll/{}/submit", poll);
        let resp = self.inner.post(self.url(&path)).json(&ballot).send().await?;
        let status = resp.status();
        Self::log_status("POST", &path, status);
        if status.is_success() {
            Ok(SubmissionOutcome::Accepted)
        } else {
            Ok(SubmissionOutcome::Rejected {
                status: status.as_u16(),
            })
        }
    }

    /// `GET /poll/{id}/results`. There is nothing left to gather after this
    /// call, so a non-success status or an unparsable body is fatal.
    pub async fn fetch_results(&self, poll: &PollId) -> Result<PollResults> {
        let path = format!("/poll/{}/results", poll);
        let resp = self.inner.get(self.url(&path)).send().await?;
        let status = resp.status();
        Self::log_status("GET", &path, status);
        if !status.is_success() {
            return Err(Error::Service {
                method: "GET",
                path,
                status: status.as_u16(),
            });
        }
        let body: Value = serde_json::from_str(&resp.text().await?)?;
        Ok(PollResults(body))
    }
}
