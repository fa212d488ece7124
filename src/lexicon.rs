//! Static sentiment lexicon: two disjoint, lowercase word sets embedded at
//! build time and parsed once on first use. No runtime mutation.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct RawLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

#[derive(Debug)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    let raw: RawLexicon = serde_json::from_str(raw).expect("valid sentiment lexicon");
    Lexicon {
        positive: raw.positive.into_iter().collect(),
        negative: raw.negative.into_iter().collect(),
    }
});

/// Shared read-only lexicon instance.
pub fn global() -> &'static Lexicon {
    &LEXICON
}

impl Lexicon {
    #[inline]
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    #[inline]
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lexicon_parses_and_is_nonempty() {
        let lex = global();
        assert!(lex.positive.len() >= 20);
        assert!(lex.negative.len() >= 20);
    }

    #[test]
    fn known_words_classify() {
        let lex = global();
        assert!(lex.is_positive("good"));
        assert!(lex.is_negative("bad"));
        assert!(!lex.is_positive("fox"));
        assert!(!lex.is_negative("fox"));
    }

    #[test]
    fn sets_are_disjoint() {
        let lex = global();
        for w in ["good", "great", "amazing", "love", "best"] {
            assert!(!(lex.is_positive(w) && lex.is_negative(w)), "{w} in both sets");
        }
        for w in ["bad", "horrible", "worst", "hate", "awful"] {
            assert!(!(lex.is_positive(w) && lex.is_negative(w)), "{w} in both sets");
        }
    }

    #[test]
    fn entries_are_lowercase() {
        let lex = global();
        assert!(!lex.is_positive("Good"));
        assert!(!lex.is_negative("BAD"));
    }
}
