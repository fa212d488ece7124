// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod api;
pub mod config;
pub mod display;
pub mod history;
pub mod lexicon;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::{analyze, SentimentLabel, SentimentResult, SentimentScore, WordAnalysis};
pub use crate::api::{router, AppState};
pub use crate::display::{color_key, emoji, format_score};
