//! Judge service client
//!
//! The judge scores a produced answer against a task description, returning
//! a score in `[0, 1]` and a prose summary.

use crate::error::{GauntletError, GauntletResult};
use serde::{Deserialize, Serialize};

/// Score band; the renderer colors by it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// score >= 0.7
    Pass,
    /// 0.4 <= score < 0.7
    Partial,
    /// score < 0.4
    Fail,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    task_description: &'a str,
    agent_response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_answer: Option<&'a str>,
}

/// Score record returned by the judge
#[derive(Debug, Clone, Deserialize)]
pub struct Evaluation {
    /// Score in `[0, 1]`
    pub score: f64,
    pub summary: String,
}

impl Evaluation {
    pub fn verdict(&self) -> Verdict {
        if self.score >= 0.7 {
            Verdict::Pass
        } else if self.score >= 0.4 {
            Verdict::Partial
        } else {
            Verdict::Fail
        }
    }

    /// Score as a percentage with one decimal, e.g. `87.5%`
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

/// Client for the remote judge service
#[derive(Debug, Clone)]
pub struct JudgeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl JudgeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Score an agent response against the task it answered
    pub async fn verify(
        &self,
        task_description: &str,
        agent_response: &str,
        model_answer: Option<&str>,
    ) -> GauntletResult<Evaluation> {
        let url = format!("{}/verify", self.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .json(&VerifyRequest {
                task_description,
                agent_response,
                model_answer,
            })
            .send()
            .await
            .map_err(|e| GauntletError::judge(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GauntletError::judge(format!(
                "judge API error: {}",
                response.status()
            )));
        }

        let evaluation: Evaluation = response.json().await?;
        if !(0.0..=1.0).contains(&evaluation.score) {
            return Err(GauntletError::judge(format!(
                "score {} outside [0, 1]",
                evaluation.score
            )));
        }
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_bands() {
        let eval = |score| Evaluation {
            score,
            summary: String::new(),
        };
        assert_eq!(eval(1.0).verdict(), Verdict::Pass);
        assert_eq!(eval(0.7).verdict(), Verdict::Pass);
        assert_eq!(eval(0.69).verdict(), Verdict::Partial);
        assert_eq!(eval(0.4).verdict(), Verdict::Partial);
        assert_eq!(eval(0.39).verdict(), Verdict::Fail);
        assert_eq!(eval(0.0).verdict(), Verdict::Fail);
    }

    #[test]
    fn test_percent_formatting() {
        let eval = Evaluation {
            score: 0.875,
            summary: String::new(),
        };
        assert_eq!(eval.percent(), "87.5%");
    }

    #[test]
    fn test_request_omits_absent_model_answer() {
        let body = serde_json::to_value(VerifyRequest {
            task_description: "t",
            agent_response: "a",
            model_answer: None,
        })
        .unwrap();
        assert!(body.get("model_answer").is_none());
    }
}
