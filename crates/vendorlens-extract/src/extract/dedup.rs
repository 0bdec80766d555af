//! Near-duplicate sentence removal by word overlap.

use std::collections::HashSet;

/// Sentences at or above this overlap are considered duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Fraction of `a`'s words that also occur in `b`, over the longer word count.
pub fn similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    let longest = tokens_a.len().max(tokens_b.len());
    if longest == 0 {
        return 1.0;
    }
    let in_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();
    let shared = tokens_a.iter().filter(|t| in_b.contains(t.as_str())).count();
    shared as f64 / longest as f64
}

/// Drop every sentence too similar to one already kept. Earlier sentences win.
pub fn dedupe_sentences<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for sentence in sentences {
        let sentence = sentence.as_ref();
        if kept
            .iter()
            .all(|k| similarity(sentence, k) < SIMILARITY_THRESHOLD)
        {
            kept.push(sentence.to_string());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_word_difference_collapses() {
        let sentences = [
            "All rods are inspected before shipping to the customer.",
            "All bars are inspected before shipping to the customer.",
        ];
        let kept = dedupe_sentences(&sentences);
        assert_eq!(kept, vec![sentences[0].to_string()]);
    }

    #[test]
    fn test_distinct_sentences_survive_in_order() {
        let sentences = [
            "We are ISO 9001 certified.",
            "Tensile strength is 310 MPa.",
            "Hardness testing is done per batch.",
        ];
        assert_eq!(dedupe_sentences(&sentences).len(), 3);
    }

    #[test]
    fn test_similarity_uses_longer_length() {
        // 2 shared words over max(2, 4)
        let s = similarity("carbon neutral", "carbon neutral since 2020");
        assert!((s - 0.5).abs() < 1e-9);
        assert!((similarity("Carbon Neutral", "carbon, neutral!") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("word", ""), 0.0);
        assert!(dedupe_sentences::<&str>(&[]).is_empty());
    }
}
