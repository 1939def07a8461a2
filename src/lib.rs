//! # signalflow
//!
//! Workspace signal triage with AI-generated summaries and suggested tasks.
//!
//! ## Features
//!
//! - **Structured Intelligence**: Returns typed `SummaryResult` structs with action items, sentiment, and a suggested task
//! - **Schema-Constrained Output**: Every request declares the JSON schema the model's reply must follow
//! - **Graceful Degradation**: Missing credentials or backend failures yield placeholder summaries instead of errors

pub mod agent;
pub mod config;
pub mod gemini;
pub mod provider;
pub mod schema;
pub mod signal;
pub mod summary;

pub use agent::SummaryClient;
pub use config::Config;
pub use signal::Signal;
pub use summary::{SuggestedTask, SummaryResult};
