//! Gauntlet Core Library
//!
//! This crate provides the core functionality for the Gauntlet challenge
//! console: the streaming event pipeline that turns a chunked agent byte
//! stream into ordered render events, the HTTP clients for the remote agent
//! and judge services, the challenge catalog, and configuration.

pub mod challenge;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod stream;

// Re-export commonly used types
pub use challenge::{Challenge, Difficulty};
pub use classify::{classify, Language};
pub use client::{AgentClient, Evaluation, JudgeClient, Verdict};
pub use config::Config;
pub use error::{GauntletError, GauntletResult};
pub use stream::{
    reduce_byte_stream, ChunkDecoder, EventReducer, FrameSplitter, ParsedEvent, RenderEvent,
    RenderStream,
};
