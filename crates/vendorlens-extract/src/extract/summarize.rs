//! Category summaries: turns located ESG / Quality / Safety text into bullets.
//!
//! Each category owns an ordered checklist of detectors. A detector that
//! matches contributes one templated bullet (`${n}` expands capture `n`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::Category;
use super::dedup::dedupe_sentences;
use super::locate::Located;

/// A signature rule that emits one bullet when its pattern matches.
pub struct Detector {
    regex: Regex,
    template: &'static str,
}

impl Detector {
    fn new(pattern: &str, template: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            template,
        }
    }

    /// The rendered bullet, if the pattern matches `text`.
    pub fn detect(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let mut bullet = String::new();
        caps.expand(self.template, &mut bullet);
        Some(collapse_whitespace(&bullet))
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

static ESG_DETECTORS: Lazy<Vec<Detector>> = Lazy::new(|| {
    vec![
        Detector::new(
            r"(?i)\bcarbon[\s-]neutral(?:ity)?\b",
            "Carbon-neutral operations claimed",
        ),
        Detector::new(
            r"(?i)\b(ISO\s*14001|EMAS)\b",
            "${1} certified environmental management system",
        ),
        Detector::new(
            r"(?i)(?:(\d+(?:\.\d+)?)\s*%\s*(?:post-consumer\s+|pre-consumer\s+)?recycled|recycled\s+(?:content|material|aluminum|aluminium)\s*(?:of|is|at|:)?\s*(\d+(?:\.\d+)?)\s*%)",
            "Uses ${1}${2}% recycled content",
        ),
        Detector::new(
            r"(?i)(\d+(?:\.\d+)?\s*%\s+)?\brenewable\s+(?:energy|power|electricity)",
            "Production powered by ${1}renewable energy",
        ),
        Detector::new(
            r"(?i)\b(?:fair\s+(?:labou?r|wages?|trade)|ethical(?:ly)?\s+(?:sourc\w*|labou?r))",
            "Fair labor and ethical sourcing practices",
        ),
        Detector::new(
            r"(?i)\bcommunity\s+(?:engagement|programs?|outreach|investment|involvement|initiatives?)",
            "Community engagement programs in place",
        ),
        Detector::new(
            r"(?i)\b(?:(?:sustainability|esg|csr|impact)\s+report(?:s|ing)?|transparen(?:t|cy)\s+(?:report\w*|disclosure)|(?:GRI|CDP)\s+(?:report\w*|disclosure|standards?))",
            "Publishes sustainability and transparency reporting",
        ),
    ]
});

static QUALITY_DETECTORS: Lazy<Vec<Detector>> = Lazy::new(|| {
    vec![
        Detector::new(
            r"(?i)\b(ISO\s*9001|IATF\s*16949|AS\s*9100[A-D]?)\b",
            "${1} certified quality management system",
        ),
        Detector::new(
            r"(?i)\b(ASTM\s*[A-Z]\s?\d+(?:/[A-Z]\s?\d+M?)?)(\s+(?:grade|gr\.?)\s*[\w-]+)?",
            "Material conforms to ${1}${2}",
        ),
        Detector::new(
            r"(?i)\btensile\s+strength\s*(?:of|is|:)?\s*(?:(?:a\s+)?(?:minimum|min\.?|up\s+to|at\s+least)\s+(?:of\s+)?)?(\d+(?:,\d{3})*(?:\.\d+)?\s*(?:MPa|ksi|psi|N/mm2|N/mm²))",
            "Tensile strength: ${1}",
        ),
        Detector::new(
            r"(?i)\b(?:hardness\s+test\w*|(?:brinell|rockwell|vickers)\b)",
            "Hardness testing performed",
        ),
        Detector::new(
            r"(?i)\b(?:quality\s+control|inspect(?:ion|ions|ed)\b|QC\s+(?:checks?|process))",
            "Quality control inspections in place",
        ),
        Detector::new(
            r"(?i)\b(?:statistical\s+(?:sampling|process\s+control)|SPC\b|AQL\b|sampling\s+plan)",
            "Statistical sampling and process control applied",
        ),
    ]
});

static SAFETY_DETECTORS: Lazy<Vec<Detector>> = Lazy::new(|| {
    vec![
        Detector::new(
            r"(?i)\b(ISO\s*45001|OHSAS\s*18001)\b",
            "${1} certified occupational health and safety management",
        ),
        Detector::new(
            r"(?i)\b(?:M?SDS|(?:material\s+)?safety\s+data\s+sheets?)\b",
            "Material safety data sheets (MSDS) provided",
        ),
        Detector::new(
            r"(?i)\bhandling\s+(?:instructions|guidelines|procedures)",
            "Handling instructions available",
        ),
        // Case-sensitive: "reach" is a common verb.
        Detector::new(
            r"\b(OSHA|REACH|RoHS|ROHS|ANSI)\b",
            "Complies with ${1} regulations",
        ),
        Detector::new(
            r"(?i)\b(?:PPE|personal\s+protective\s+equipment)\b",
            "PPE recommendations provided",
        ),
        Detector::new(
            r"(?i)\b(?:hazard(?:ous)?\s+(?:label\w*|communication|warnings?|symbols?)|GHS\b)",
            "Hazard labeling on products and shipments",
        ),
        Detector::new(
            r"(?i)\b(?:safety\s+training|training\s+(?:is\s+|are\s+)?(?:available|provided|offered))",
            "Safety training available",
        ),
    ]
});

/// Detector checklist for a category, in evaluation order.
pub fn detectors(category: Category) -> &'static [Detector] {
    match category {
        Category::Esg => &ESG_DETECTORS,
        Category::Quality => &QUALITY_DETECTORS,
        Category::Safety => &SAFETY_DETECTORS,
    }
}

/// Bullet used when the category is mentioned but nothing specific is found.
pub fn mentioned_bullet(category: Category) -> String {
    format!(
        "{} mentioned but not detailed. Recommend requesting documentation.",
        category.label()
    )
}

/// Bullet used when the thread says nothing about the category.
pub fn no_information_bullet(category: Category) -> String {
    format!("No {} information available in thread", category.label())
}

/// Summarize a category into a non-empty list of bullets.
///
/// `located` is the category's block from [`super::locate::locate`]; `text`
/// is the whole thread, used only for the "mentioned" fallback.
pub fn summarize(category: Category, located: &Located, text: &str) -> Vec<String> {
    if let Located::Section(section) = located {
        if let Some(items) = list_items(section) {
            return items;
        }
    }

    let block = located.text();
    let bullets: Vec<String> = detectors(category)
        .iter()
        .filter_map(|d| d.detect(block))
        .collect();
    if !bullets.is_empty() {
        return bullets;
    }

    if category.is_mentioned_in(&text.to_lowercase()) {
        vec![mentioned_bullet(category)]
    } else {
        vec![no_information_bullet(category)]
    }
}

static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•*\-–]\s*|\d+[.)]\s+)").unwrap());

/// Items of a section written as a list, markers stripped and near-duplicates
/// removed. `None` when the section is prose.
fn list_items(section: &str) -> Option<Vec<String>> {
    let is_list = section.contains('•')
        || section
            .lines()
            .any(|line| LIST_MARKER_RE.is_match(line.trim_start()));
    if !is_list {
        return None;
    }

    let items: Vec<String> = section
        .split(['\n', '•'])
        .map(|item| LIST_MARKER_RE.replace(item.trim(), "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(dedupe_sentences(&items))
}
