//! # Sentiment Scorer
//! Pure, testable logic mapping raw text → `SentimentResult`.
//! No I/O and no shared mutable state; the only non-deterministic field is
//! the result timestamp, which is metadata and never an input to scoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::tokenize::tokenize;

/// Closed three-way label; the display mappings over it are exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Normalized polarity in [-1, 1].
    pub score: f64,
    pub label: SentimentLabel,
    /// Heuristic in [0, 1]; 1.0 exactly when no lexicon word matched.
    pub confidence: f64,
}

/// Token partitions in original order, duplicates preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    pub neutral_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Verbatim input, untouched by normalization.
    pub original: String,
    pub sentiment: SentimentScore,
    pub analysis: WordAnalysis,
    pub timestamp: DateTime<Utc>,
}

/// Sole entry point: tokenize, classify against the static lexicon, score.
pub fn analyze(text: &str) -> SentimentResult {
    let tokens = tokenize(text);
    let analysis = classify(&tokens);
    let sentiment = score(&analysis, tokens.len());

    SentimentResult {
        original: text.to_string(),
        sentiment,
        analysis,
        timestamp: Utc::now(),
    }
}

/// Partition tokens; lookup order is positive-first, negative-second.
fn classify(tokens: &[String]) -> WordAnalysis {
    let lex = lexicon::global();
    let mut analysis = WordAnalysis::default();

    for token in tokens {
        if lex.is_positive(token) {
            analysis.positive_words.push(token.clone());
        } else if lex.is_negative(token) {
            analysis.negative_words.push(token.clone());
        } else {
            analysis.neutral_words.push(token.clone());
        }
    }

    analysis
}

fn score(analysis: &WordAnalysis, total_tokens: usize) -> SentimentScore {
    let positive_count = analysis.positive_words.len();
    let negative_count = analysis.negative_words.len();
    let total_sentiment_words = positive_count + negative_count;

    // No lexicon matches (including empty input): neutral is certain.
    if total_sentiment_words == 0 {
        return SentimentScore {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 1.0,
        };
    }

    let score =
        (positive_count as f64 - negative_count as f64) / total_sentiment_words as f64;

    // Blend polarity magnitude with sentiment-word density, capped at 1.
    let density = total_sentiment_words as f64 / total_tokens as f64;
    let confidence = (score.abs() * 1.5 + density * 0.5).min(1.0);

    SentimentScore {
        score,
        label: label_for(score),
        confidence,
    }
}

/// Label thresholds: the boundaries ±0.2 themselves map to neutral.
pub fn label_for(score: f64) -> SentimentLabel {
    if score > 0.2 {
        SentimentLabel::Positive
    } else if score < -0.2 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
