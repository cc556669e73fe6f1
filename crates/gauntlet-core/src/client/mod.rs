//! HTTP clients for the remote agent and judge services

mod agent;
mod judge;

pub use agent::{AgentClient, TaskSummary};
pub use judge::{Evaluation, JudgeClient, Verdict};
