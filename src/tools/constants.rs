//! SEC filing item tables.
//!
//! Ordered key/title pairs for the sections that the filing-items endpoint
//! can return, used to document the valid `item` values in the 10-K and
//! 10-Q tool descriptions.

/// 10-K (annual report) items.
pub const ITEMS_10K: [(&str, &str); 21] = [
    ("Item-1", "Business"),
    ("Item-1A", "Risk Factors"),
    ("Item-1B", "Unresolved Staff Comments"),
    ("Item-2", "Properties"),
    ("Item-3", "Legal Proceedings"),
    ("Item-4", "Mine Safety Disclosures"),
    (
        "Item-5",
        "Market for Registrant's Common Equity, Related Stockholder Matters and Issuer Purchases of Equity Securities",
    ),
    ("Item-6", "Selected Financial Data"),
    (
        "Item-7",
        "Management's Discussion and Analysis of Financial Condition and Results of Operations",
    ),
    ("Item-7A", "Quantitative and Qualitative Disclosures About Market Risk"),
    ("Item-8", "Financial Statements and Supplementary Data"),
    (
        "Item-9",
        "Changes in and Disagreements with Accountants on Accounting and Financial Disclosure",
    ),
    ("Item-9A", "Controls and Procedures"),
    ("Item-9B", "Other Information"),
    ("Item-10", "Directors, Executive Officers and Corporate Governance"),
    ("Item-11", "Executive Compensation"),
    (
        "Item-12",
        "Security Ownership of Certain Beneficial Owners and Management and Related Stockholder Matters",
    ),
    ("Item-13", "Certain Relationships and Related Transactions, and Director Independence"),
    ("Item-14", "Principal Accountant Fees and Services"),
    ("Item-15", "Exhibits, Financial Statement Schedules"),
    ("Item-16", "Form 10-K Summary"),
];

/// 10-Q (quarterly report) items.
pub const ITEMS_10Q: [(&str, &str); 4] = [
    ("Item-1", "Financial Statements"),
    (
        "Item-2",
        "Management's Discussion and Analysis of Financial Condition and Results of Operations",
    ),
    ("Item-3", "Quantitative and Qualitative Disclosures About Market Risk"),
    ("Item-4", "Controls and Procedures"),
];

/// Render an item table as indented description lines.
pub fn format_items_description(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(key, title)| format!("  - {}: {}", key, title))
        .collect::<Vec<_>>()
        .join("\n")
}
