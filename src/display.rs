//! Label → display-layer mappings. Total over `SentimentLabel`, checked by
//! the exhaustive match.

use crate::analyzer::SentimentLabel;

/// Semantic styling tag for UI consumers.
pub fn color_key(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "sentiment-positive",
        SentimentLabel::Negative => "sentiment-negative",
        SentimentLabel::Neutral => "sentiment-neutral",
    }
}

pub fn emoji(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "😊",
        SentimentLabel::Negative => "😔",
        SentimentLabel::Neutral => "😐",
    }
}

/// Render a fraction as a whole-number percentage.
/// Rounding rule: half away from zero (`f64::round`), so 0.125 → "13%".
pub fn format_score(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_keys_are_fixed_tags() {
        assert_eq!(color_key(SentimentLabel::Positive), "sentiment-positive");
        assert_eq!(color_key(SentimentLabel::Negative), "sentiment-negative");
        assert_eq!(color_key(SentimentLabel::Neutral), "sentiment-neutral");
    }

    #[test]
    fn emoji_are_fixed_glyphs() {
        assert_eq!(emoji(SentimentLabel::Positive), "😊");
        assert_eq!(emoji(SentimentLabel::Negative), "😔");
        assert_eq!(emoji(SentimentLabel::Neutral), "😐");
    }

    #[test]
    fn format_score_whole_percent() {
        assert_eq!(format_score(0.5), "50%");
        assert_eq!(format_score(1.0), "100%");
        assert_eq!(format_score(-1.0), "-100%");
        assert_eq!(format_score(0.0), "0%");
    }

    #[test]
    fn format_score_rounds_half_away_from_zero() {
        assert_eq!(format_score(-0.333), "-33%");
        assert_eq!(format_score(0.125), "13%");
        assert_eq!(format_score(-0.125), "-13%");
    }
}
