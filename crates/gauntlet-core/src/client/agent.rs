//! Agent service client
//!
//! The agent service accepts a task description and either returns one JSON
//! summary (`/complete_task`) or streams newline-delimited `data: ` frames
//! (`/complete_task_stream`). The streaming path hands the response body
//! straight to the reducer pipeline; this client holds no per-run state, so
//! one client can serve many runs.

use crate::error::{GauntletError, GauntletResult};
use crate::stream::{reduce_byte_stream, RenderStream};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct TaskRequest<'a> {
    task_description: &'a str,
    max_turns: u32,
}

/// Response of the unary completion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSummary {
    pub summary: String,
}

/// Client for the remote agent service
#[derive(Debug, Clone)]
pub struct AgentClient {
    http_client: reqwest::Client,
    base_url: String,
    max_turns: u32,
}

impl AgentClient {
    pub fn new(base_url: impl Into<String>, max_turns: u32) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            max_turns,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Run a task and wait for the single summary response
    pub async fn complete_task(&self, task_description: &str) -> GauntletResult<TaskSummary> {
        let response = self
            .http_client
            .post(self.endpoint("complete_task"))
            .json(&TaskRequest {
                task_description,
                max_turns: self.max_turns,
            })
            .send()
            .await
            .map_err(|e| GauntletError::agent(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GauntletError::agent(format!(
                "agent API error: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// Run a task and stream its progress as render events
    ///
    /// The returned stream yields events in strict arrival order; a
    /// transport failure surfaces once and terminates it. Dropping the
    /// stream cancels the run from this console's point of view.
    pub async fn complete_task_stream(&self, task_description: &str) -> GauntletResult<RenderStream> {
        let response = self
            .http_client
            .post(self.endpoint("complete_task_stream"))
            .json(&TaskRequest {
                task_description,
                max_turns: self.max_turns,
            })
            .send()
            .await
            .map_err(|e| GauntletError::agent(format!("streaming request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GauntletError::agent(format!(
                "agent API error: {}",
                response.status()
            )));
        }

        tracing::debug!("agent stream opened for task ({} chars)", task_description.len());
        Ok(reduce_byte_stream(response.bytes_stream()))
    }
}
