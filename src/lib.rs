//! Two-stage phishing detection engine.
//!
//! Stage 1 classifies a URL from lexical features alone; only URLs that
//! cannot be ruled clearly legitimate escalate to stage 2, which fetches
//! the page and blends an LLM phishing score with a heuristic content
//! risk score into a final, auditable verdict.

pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod content;
pub mod errors;
pub mod features;
pub mod heuristics;
pub mod llm;
pub mod models;
pub mod pipeline;
