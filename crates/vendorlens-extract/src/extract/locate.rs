//! Finds the part of a thread that talks about a category.
//!
//! An explicit `"<Category> ...:"` section wins; otherwise the sentences
//! mentioning the category or one of its keywords are gathered.

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::Category;
use super::dedup::dedupe_sentences;

/// Text relevant to one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// Content of a section the author labeled with the category name.
    Section(String),
    /// Matching sentences joined by single spaces (may be empty).
    Sentences(String),
}

impl Located {
    pub fn text(&self) -> &str {
        match self {
            Located::Section(t) | Located::Sentences(t) => t,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

fn section_pattern(label: &str) -> Regex {
    let pattern = format!(
        r"(?is)\b{}[^:\n]*:\s*(.*?)(?:\n[ \t\r]*\n|\z)",
        regex::escape(label)
    );
    Regex::new(&pattern).unwrap()
}

static ESG_SECTION_RE: Lazy<Regex> = Lazy::new(|| section_pattern(Category::Esg.label()));
static QUALITY_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| section_pattern(Category::Quality.label()));
static SAFETY_SECTION_RE: Lazy<Regex> = Lazy::new(|| section_pattern(Category::Safety.label()));

fn section_regex(category: Category) -> &'static Regex {
    match category {
        Category::Esg => &ESG_SECTION_RE,
        Category::Quality => &QUALITY_SECTION_RE,
        Category::Safety => &SAFETY_SECTION_RE,
    }
}

/// Locate the text block describing `category`.
pub fn locate(text: &str, category: Category) -> Located {
    if let Some(section) = labeled_section(text, category) {
        return Located::Section(section);
    }

    let relevant: Vec<&str> = split_sentences(text)
        .into_iter()
        .filter(|s| category.is_mentioned_in(&s.to_lowercase()))
        .collect();

    Located::Sentences(dedupe_sentences(&relevant).join(" "))
}

/// Content of the first `"<Category>...:"` section, up to a blank line.
/// Blank lines directly after the colon are skipped.
pub fn labeled_section(text: &str, category: Category) -> Option<String> {
    section_regex(category)
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Split text into sentences.
///
/// A boundary falls after `.`, `!` or `?` (and any following whitespace)
/// only when the next character is uppercase, so decimals like `$24.99`
/// and lowercase continuations stay intact.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        while chars.peek().is_some_and(|&(_, n)| n.is_whitespace()) {
            chars.next();
        }
        if let Some(&(next, n)) = chars.peek() {
            if n.is_uppercase() {
                let s = text[start..end].trim();
                if !s.is_empty() {
                    sentences.push(s);
                }
                start = next;
            }
        }
    }

    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}
