//! Scalar field extractors: vendor, contact, pricing, logistics, notes.
//!
//! Every extractor is total: with no match it returns its sentinel. Pattern
//! lists are data (`FieldPattern` tables) so each rule can be tested alone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{
    DEFAULT_CONTACT, DEFAULT_VENDOR_NAME, NOT_SPECIFIED, NO_DISCOUNTS, NO_FEES, NO_NOTES,
    NO_UNIT_PRICE, REVIEW_RECOMMENDED,
};

/// Inputs longer than this (trimmed, in chars) get the review sentence
/// instead of the "no notes" sentinel when no note pattern matches.
pub const NOTES_REVIEW_MIN_CHARS: usize = 100;

/// Free text up to the end of a clause; decimals and thousands separators
/// (`$1,200.50`) do not end it.
const CLAUSE: &str = r"((?:[^.,;\n]|[.,]\d)+)";
/// Free text up to the end of a sentence.
const SENTENCE: &str = r"((?:[^.\n]|\.\d)+)";
/// Connector between a field name and its value.
const IS: &str = r"(?:\s*:|\s+(?:is|are|of|will\s+be))";
const NUMBER: &str = r"\d+(?:,\d{3})*(?:\.\d+)?";
const PER_UNIT: &str = r"(?:(?:\s*/\s*|\s+per\s+)(?:unit|piece|pc|pcs|kg|kilogram|lb|pound|ton|tonne|meter|metre|foot|ft|rod|bar|bundle)s?\b|\s+each\b)?";
const DURATION: &str = r"(\d+(?:\s*(?:-|–|to)\s*\d+)?\s*(?:business\s+|working\s+|calendar\s+)?(?:days?|weeks?|months?))";

/// One extraction rule: a pattern, the capture group holding the value, and
/// the label the value is reported under.
pub struct FieldPattern {
    pub label: &'static str,
    pub regex: Regex,
    pub group: usize,
}

impl FieldPattern {
    fn new(label: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).unwrap(),
            group,
        }
    }

    /// Trimmed value of the first match, if non-empty.
    pub fn find(&self, text: &str) -> Option<String> {
        self.regex
            .captures(text)
            .and_then(|cap| cap.get(self.group))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

static VENDOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfrom:[ \t]*([^<\n]*)").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?)?\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b").unwrap()
});

static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(&format!(r"(?i)[$€£]\s?{NUMBER}{PER_UNIT}")).unwrap(),
        Regex::new(&format!(
            r"(?i)\b{NUMBER}\s*(?:USD|EUR|GBP|dollars|euros)\b{PER_UNIT}"
        ))
        .unwrap(),
    ]
});

static FEE_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "Shipping",
            &format!(r"(?i)\bshipping(?:\s+(?:costs?|fees?|charges?|rates?))?{IS}\s*{CLAUSE}"),
            1,
        ),
        FieldPattern::new(
            "Handling",
            &format!(r"(?i)\bhandling\s+(?:fees?|charges?|costs?){IS}?\s*{CLAUSE}"),
            1,
        ),
        FieldPattern::new(
            "Additional charge",
            &format!(r"(?i)\b(?:additional|extra)\s+(?:fees?|charges?|costs?){IS}?\s*{CLAUSE}"),
            1,
        ),
        FieldPattern::new(
            "Setup fee",
            &format!(r"(?i)\bset[\s-]?up\s+(?:fees?|charges?|costs?){IS}?\s*{CLAUSE}"),
            1,
        ),
        FieldPattern::new(
            "Surcharge",
            &format!(r"(?i)\bsurcharges?{IS}?\s*{CLAUSE}"),
            1,
        ),
    ]
});

static DISCOUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\b\d+(?:\.\d+)?\s*%\s*(?:discount|off)\b(?:\s+(?:for|on)\s+(?:orders?|purchases?|quantities|volumes?)\s+(?:over|above|of|exceeding|greater\s+than)\s+\d+(?:,\d{3})*(?:\s*(?:units|pieces|pcs|kg|lbs?|tons?|rods|bars))?)?",
        )
        .unwrap(),
        Regex::new(r"(?i)\bdiscount\s+of\s+\d+(?:\.\d+)?\s*%(?:\s+(?:for|on)\s+[^.\n]+)?").unwrap(),
        Regex::new(
            r"(?i)\b(?:volume|bulk|quantity|tiered)\s+(?:discounts?|pricing)\s+(?:is\s+|are\s+)?(?:available|offered|applies|apply)[^.\n]*",
        )
        .unwrap(),
    ]
});

static DELIVERY_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "Delivery terms",
            &format!(r"(?i)\bdelivery\s+terms?(?:\s*:|\s+(?:is|are|will\s+be))\s*{SENTENCE}"),
            1,
        ),
        FieldPattern::new(
            "Incoterm",
            r"\b(?:EXW|FCA|FAS|FOB|CFR|CIF|CPT|CIP|DAP|DPU|DDP)\b(?:[ \t]+[A-Z][A-Za-z]*)*",
            0,
        ),
        FieldPattern::new(
            "Shipping service",
            r"(?i)\b(?:free|standard|expedited|express)\s+(?:shipping|delivery|freight)\b[^.\n]*",
            0,
        ),
        FieldPattern::new(
            "Carrier",
            r"(?i)\b(?:shipped|delivered|ships|delivery)\s+(?:via|by)\s+[^.\n]+",
            0,
        ),
    ]
});

static LEAD_TIME_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "Lead time",
            &format!(r"(?i)\blead[\s-]?times?\b[^.\n\d]{{0,30}}?{DURATION}"),
            1,
        ),
        FieldPattern::new(
            "Ships within",
            &format!(r"(?i)\b(?:deliver|ship|dispatch)\w*\s+(?:with)?in\s+{DURATION}"),
            1,
        ),
        FieldPattern::new(
            "From order",
            &format!(
                r"(?i){DURATION}\s+(?:lead[\s-]?time|(?:from|after)\s+(?:order|receipt|po|confirmation))"
            ),
            1,
        ),
    ]
});

/// Note labels in output order, each with its candidate patterns.
static NOTE_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "Payment terms",
            &format!(r"(?i)\bpayment\s+terms?(?:\s*:|\s+(?:is|are|will\s+be))\s*{SENTENCE}"),
            1,
        ),
        FieldPattern::new("Payment terms", r"(?i)\b(net\s?\d{2,3})\b", 1),
        FieldPattern::new(
            "Warranty",
            r"(?i)\b(\d+[\s-](?:year|month)s?\s+warranty)\b",
            1,
        ),
        FieldPattern::new(
            "Warranty",
            &format!(r"(?i)\bwarranty(?:\s*:|\s+(?:is|of|covers))\s*{SENTENCE}"),
            1,
        ),
        FieldPattern::new(
            "Minimum order",
            r"(?i)\b(?:minimum\s+order(?:\s+quantity)?|MOQ)(?:\s*:|\s+(?:is|of))?\s*(\d+(?:,\d{3})*(?:\s*[a-z]+)?)",
            1,
        ),
        FieldPattern::new(
            "Material",
            r"(?i)\b((?:aluminum|aluminium)\s+(?:alloy\s+)?\d{4}(?:-[a-z]\d+)?)\b",
            1,
        ),
        FieldPattern::new(
            "Material",
            &format!(r"(?i)\bmaterial(?:\s+spec(?:ification)?s?)?(?:\s*:|\s+is)\s*{SENTENCE}"),
            1,
        ),
    ]
});

/// Sender name from the first `From:` line.
pub fn vendor_name(text: &str) -> String {
    VENDOR_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_VENDOR_NAME.to_string())
}

/// First email address, with the first phone number appended after `" | "`.
pub fn contact_info(text: &str) -> String {
    let email = EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_CONTACT.to_string());

    match PHONE_RE.find(text) {
        Some(phone) => format!("{} | {}", email, phone.as_str().trim()),
        None => email,
    }
}

/// Longest currency amount in the text; the first one wins a tie.
pub fn unit_price(text: &str) -> String {
    // (start, char count, match)
    let mut best: Option<(usize, usize, &str)> = None;
    for re in PRICE_PATTERNS.iter() {
        for m in re.find_iter(text) {
            let candidate = m.as_str().trim();
            let chars = candidate.chars().count();
            let better = match best {
                None => true,
                Some((start, current, _)) => {
                    chars > current || (chars == current && m.start() < start)
                }
            };
            if better {
                best = Some((m.start(), chars, candidate));
            }
        }
    }
    best.map(|(_, _, s)| s.to_string())
        .unwrap_or_else(|| NO_UNIT_PRICE.to_string())
}

/// Every fee pattern that matches, as `"<label>: <detail>"`, joined by `"; "`.
pub fn additional_fees(text: &str) -> String {
    let fees: Vec<String> = FEE_PATTERNS
        .iter()
        .filter_map(|p| p.find(text).map(|detail| format!("{}: {}", p.label, detail)))
        .collect();

    if fees.is_empty() {
        NO_FEES.to_string()
    } else {
        fees.join("; ")
    }
}

/// Every discount phrase found, joined by `"; "`.
pub fn quantity_discounts(text: &str) -> String {
    let mut discounts: Vec<String> = Vec::new();
    for re in DISCOUNT_PATTERNS.iter() {
        for m in re.find_iter(text) {
            let s = m.as_str().trim().to_string();
            if !discounts.contains(&s) {
                discounts.push(s);
            }
        }
    }

    if discounts.is_empty() {
        NO_DISCOUNTS.to_string()
    } else {
        discounts.join("; ")
    }
}

/// First delivery-terms pattern that matches.
pub fn delivery_terms(text: &str) -> String {
    first_match(&DELIVERY_PATTERNS, text)
}

/// First lead-time pattern that matches.
pub fn lead_time(text: &str) -> String {
    first_match(&LEAD_TIME_PATTERNS, text)
}

fn first_match(patterns: &[FieldPattern], text: &str) -> String {
    patterns
        .iter()
        .find_map(|p| p.find(text))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Payment, warranty, minimum order and material notes, in that order.
pub fn additional_notes(text: &str) -> String {
    let mut notes = String::new();
    let mut seen_labels: Vec<&str> = Vec::new();

    for pattern in NOTE_PATTERNS.iter() {
        if seen_labels.contains(&pattern.label) {
            continue;
        }
        if let Some(value) = pattern.find(text) {
            notes.push_str(&format!(
                "{}: {}. ",
                pattern.label,
                value.trim_end_matches('.')
            ));
            seen_labels.push(pattern.label);
        }
    }

    let notes = notes.trim_end();
    if !notes.is_empty() {
        notes.to_string()
    } else if text.trim().chars().count() > NOTES_REVIEW_MIN_CHARS {
        REVIEW_RECOMMENDED.to_string()
    } else {
        NO_NOTES.to_string()
    }
}
