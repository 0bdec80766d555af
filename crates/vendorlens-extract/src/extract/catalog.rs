//! Standards categories and their trigger keywords.

use serde::{Deserialize, Serialize};

/// A standards category summarized into bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Esg,
    Quality,
    Safety,
}

impl Category {
    /// All categories, in record order.
    pub const ALL: [Category; 3] = [Category::Esg, Category::Quality, Category::Safety];

    /// Human-facing label, also used as the section heading to look for.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Esg => "ESG",
            Self::Quality => "Quality",
            Self::Safety => "Safety",
        }
    }

    /// Trigger terms, lowercase, matched as substrings.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Esg => ESG_KEYWORDS,
            Self::Quality => QUALITY_KEYWORDS,
            Self::Safety => SAFETY_KEYWORDS,
        }
    }

    /// Whether lowercased text mentions this category by name or keyword.
    pub fn is_mentioned_in(&self, text_lower: &str) -> bool {
        text_lower.contains(&self.label().to_lowercase())
            || self.keywords().iter().any(|kw| text_lower.contains(kw))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const ESG_KEYWORDS: &[&str] = &[
    "environmental",
    "sustainab",
    "carbon",
    "emission",
    "recycled",
    "renewable",
    "green energy",
    "ethical",
    "fair labor",
    "fair labour",
    "community",
    "governance",
    "iso 14001",
];

const QUALITY_KEYWORDS: &[&str] = &[
    "iso 9001",
    "iatf",
    "as9100",
    "astm",
    "tensile",
    "hardness",
    "inspection",
    "tolerance",
    "defect",
    "quality control",
    "sampling",
    "certificate of conformance",
    "mill test",
];

const SAFETY_KEYWORDS: &[&str] = &[
    "osha",
    "msds",
    "safety data sheet",
    "hazard",
    "personal protective",
    "protective equipment",
    "handling instructions",
    "iso 45001",
    "ohsas",
    "rohs",
    "reach compliance",
    "training",
];
