//! On-screen summary panels, in display order.

use serde::Serialize;
use vendorlens_extract::record::is_placeholder_list;
use vendorlens_extract::VendorRecord;

/// A label/value pair inside a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PanelBody {
    Fields { fields: Vec<PanelField> },
    /// `placeholder` is set when the only bullet is a "no information"
    /// sentinel, which the UI shows as a muted note rather than a list.
    Bullets { bullets: Vec<String>, placeholder: bool },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPanel {
    pub title: &'static str,
    #[serde(flatten)]
    pub body: PanelBody,
}

fn fields(title: &'static str, pairs: &[(&'static str, &str)]) -> SummaryPanel {
    SummaryPanel {
        title,
        body: PanelBody::Fields {
            fields: pairs
                .iter()
                .map(|&(label, value)| PanelField {
                    label,
                    value: value.to_string(),
                })
                .collect(),
        },
    }
}

fn bullets(title: &'static str, items: &[String]) -> SummaryPanel {
    SummaryPanel {
        title,
        body: PanelBody::Bullets {
            bullets: items.to_vec(),
            placeholder: is_placeholder_list(items),
        },
    }
}

/// Panels for the summary view of `record`.
pub fn summary_panels(record: &VendorRecord) -> Vec<SummaryPanel> {
    vec![
        fields(
            "GENERAL INFORMATION",
            &[
                ("Vendor Name", record.vendor_name.as_str()),
                ("Contact", record.contact_info.as_str()),
            ],
        ),
        fields(
            "PRICING",
            &[
                ("Unit Price", record.pricing.unit_price.as_str()),
                ("Additional Fees", record.pricing.additional_fees.as_str()),
                ("Quantity Discounts", record.pricing.quantity_discounts.as_str()),
            ],
        ),
        bullets("ESG STANDARDS", &record.standards.esg),
        bullets("QUALITY METRICS", &record.standards.quality),
        bullets("SAFETY STANDARDS", &record.standards.safety),
        fields(
            "LOGISTICS",
            &[
                ("Delivery Terms", record.logistics.delivery_terms.as_str()),
                ("Lead Time", record.logistics.lead_time.as_str()),
            ],
        ),
        SummaryPanel {
            title: "ADDITIONAL NOTES",
            body: PanelBody::Text {
                text: record.additional_notes.clone(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorlens_extract::extract;

    #[test]
    fn test_panel_order() {
        let panels = summary_panels(&extract(""));
        let titles: Vec<&str> = panels.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "GENERAL INFORMATION",
                "PRICING",
                "ESG STANDARDS",
                "QUALITY METRICS",
                "SAFETY STANDARDS",
                "LOGISTICS",
                "ADDITIONAL NOTES",
            ]
        );
    }

    #[test]
    fn test_placeholder_flag() {
        let record = extract("Quality: ISO 9001 certified and ASTM B221 compliant.");
        let panels = summary_panels(&record);
        assert_eq!(
            panels[2].body,
            PanelBody::Bullets {
                bullets: vec!["No ESG information available in thread".to_string()],
                placeholder: true,
            }
        );
        match &panels[3].body {
            PanelBody::Bullets {
                bullets,
                placeholder,
            } => {
                assert_eq!(bullets.len(), 2);
                assert!(!placeholder);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(summary_panels(&extract("From: Acme"))).unwrap();
        assert_eq!(json[0]["title"], "GENERAL INFORMATION");
        assert_eq!(json[0]["kind"], "fields");
        assert_eq!(json[0]["fields"][0]["label"], "Vendor Name");
        assert_eq!(json[0]["fields"][0]["value"], "Acme");
        assert_eq!(json[2]["kind"], "bullets");
        assert!(json[2]["placeholder"].is_boolean());
        assert_eq!(json[6]["kind"], "text");
    }
}
