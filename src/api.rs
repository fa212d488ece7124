use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analyzer::{self, SentimentLabel, SentimentResult};
use crate::config::AppConfig;
use crate::display;
use crate::history::RecentHistory;

#[derive(Clone)]
pub struct AppState {
    history: Arc<RecentHistory>,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            history: Arc::new(RecentHistory::with_capacity(cfg.history_capacity)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze_text))
        .route("/history", get(recent_history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Empty submissions are rejected here, before the scorer: the scorer itself
/// treats empty text as defined neutral behavior, but an empty form submit is
/// a caller mistake and gets surfaced as one.
async fn analyze_text(State(state): State<AppState>, Json(body): Json<AnalyzeReq>) -> Response {
    if body.text.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: "Empty input".to_string(),
            }),
        )
            .into_response();
    }

    let result = analyzer::analyze(&body.text);
    info!(
        label = ?result.sentiment.label,
        score = result.sentiment.score,
        tokens = result.analysis.positive_words.len()
            + result.analysis.negative_words.len()
            + result.analysis.neutral_words.len(),
        "analyzed text"
    );

    state.history.push(result.clone());
    Json(result).into_response()
}

#[derive(serde::Serialize)]
struct HistoryOut {
    preview: String,
    label: String,
    emoji: String,
    color_key: String,
    score: String,
    confidence: f64,
    timestamp: String,
}

/// Most-recent-first summaries shaped for a history list: truncated preview
/// plus the display mappings the UI would otherwise recompute.
async fn recent_history(State(state): State<AppState>) -> Json<Vec<HistoryOut>> {
    let rows = state.history.snapshot();
    let out = rows.into_iter().map(history_row).collect::<Vec<_>>();
    Json(out)
}

fn history_row(r: SentimentResult) -> HistoryOut {
    let label = r.sentiment.label;
    HistoryOut {
        preview: preview_of(&r.original),
        label: label_str(label).to_string(),
        emoji: display::emoji(label).to_string(),
        color_key: display::color_key(label).to_string(),
        score: display::format_score(r.sentiment.score),
        confidence: r.sentiment.confidence,
        timestamp: r.timestamp.to_rfc3339(),
    }
}

fn label_str(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Neutral => "neutral",
        SentimentLabel::Negative => "negative",
    }
}

/// First 60 characters with an ellipsis, respecting char boundaries.
fn preview_of(original: &str) -> String {
    const PREVIEW_CHARS: usize = 60;
    if original.chars().count() <= PREVIEW_CHARS {
        return original.to_string();
    }
    let head: String = original.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
