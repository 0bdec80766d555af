//! The vendor record produced by one extraction.

use serde::{Deserialize, Serialize};

/// Placeholder used when no `From:` line is present.
pub const DEFAULT_VENDOR_NAME: &str = "Aluminum Supplies Inc.";
/// Placeholder used when no email address is present.
pub const DEFAULT_CONTACT: &str = "contact@example.com";
pub const NO_UNIT_PRICE: &str = "Not available in thread";
pub const NO_FEES: &str = "No additional fees mentioned";
pub const NO_DISCOUNTS: &str = "No quantity discounts mentioned";
pub const NOT_SPECIFIED: &str = "Not specified in thread";
pub const NO_NOTES: &str = "No additional notes";
pub const REVIEW_RECOMMENDED: &str = "No specific terms were detected automatically. \
     Manual review of the full thread is recommended.";

/// Everything extracted from one email thread.
///
/// Built in a single pass by [`crate::extract`]; every string field is
/// populated, with a sentinel standing in for missing evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub vendor_name: String,
    /// Email address, optionally followed by `" | <phone>"`.
    pub contact_info: String,
    pub pricing: Pricing,
    pub standards: Standards,
    pub logistics: Logistics,
    pub additional_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub unit_price: String,
    pub additional_fees: String,
    pub quantity_discounts: String,
}

/// Bullet lists per standards category. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standards {
    pub esg: Vec<String>,
    pub quality: Vec<String>,
    pub safety: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    pub delivery_terms: String,
    pub lead_time: String,
}

/// True when a bullet list holds nothing but a "no information" style
/// sentinel, so presentation layers can render it as a placeholder.
pub fn is_placeholder_list(bullets: &[String]) -> bool {
    match bullets {
        [] => true,
        [only] => {
            let lower = only.to_lowercase();
            lower.contains("not available")
                || lower.contains("not specified")
                || (lower.starts_with("no ") && lower.contains("information"))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let record = VendorRecord {
            vendor_name: "Acme".into(),
            contact_info: DEFAULT_CONTACT.into(),
            pricing: Pricing {
                unit_price: NO_UNIT_PRICE.into(),
                additional_fees: NO_FEES.into(),
                quantity_discounts: NO_DISCOUNTS.into(),
            },
            standards: Standards {
                esg: vec!["x".into()],
                quality: vec!["y".into()],
                safety: vec!["z".into()],
            },
            logistics: Logistics {
                delivery_terms: NOT_SPECIFIED.into(),
                lead_time: NOT_SPECIFIED.into(),
            },
            additional_notes: NO_NOTES.into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["vendorName"], "Acme");
        assert_eq!(json["pricing"]["unitPrice"], NO_UNIT_PRICE);
        assert_eq!(json["logistics"]["leadTime"], NOT_SPECIFIED);
        assert!(json["standards"]["esg"].is_array());
        assert_eq!(json["additionalNotes"], NO_NOTES);
    }

    #[test]
    fn test_placeholder_list() {
        assert!(is_placeholder_list(&[
            "No ESG information available in thread".to_string()
        ]));
        assert!(is_placeholder_list(&["Not specified".to_string()]));
        assert!(!is_placeholder_list(&["Carbon neutral".to_string()]));
        assert!(!is_placeholder_list(&[
            "No information".to_string(),
            "ISO 9001".to_string()
        ]));
    }
}
