//! Heuristic vendor-fact extraction.
//!
//! Pulls pricing, logistics, notes and ESG / Quality / Safety summaries out
//! of an email thread using regex tables, keyword matching and word-overlap
//! deduplication. Every step is total, so extraction cannot fail.

pub mod catalog;
pub mod dedup;
pub mod fields;
pub mod locate;
pub mod summarize;

use tracing::debug;
use vendorlens_core::{Error, Result};

use crate::record::{Logistics, Pricing, Standards, VendorRecord};
use catalog::Category;

/// Run every extractor and summarizer on `text` and assemble the record.
pub fn extract(text: &str) -> VendorRecord {
    let [esg, quality, safety] = Category::ALL.map(|category| {
        let located = locate::locate(text, category);
        summarize::summarize(category, &located, text)
    });

    let record = VendorRecord {
        vendor_name: fields::vendor_name(text),
        contact_info: fields::contact_info(text),
        pricing: Pricing {
            unit_price: fields::unit_price(text),
            additional_fees: fields::additional_fees(text),
            quantity_discounts: fields::quantity_discounts(text),
        },
        standards: Standards {
            esg,
            quality,
            safety,
        },
        logistics: Logistics {
            delivery_terms: fields::delivery_terms(text),
            lead_time: fields::lead_time(text),
        },
        additional_notes: fields::additional_notes(text),
    };

    debug!(
        input_len = text.len(),
        esg = record.standards.esg.len(),
        quality = record.standards.quality.len(),
        safety = record.standards.safety.len(),
        "Extracted vendor record"
    );
    record
}

/// Reject blank submissions before they reach [`extract`].
pub fn validate_submission(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(text)
    }
}
