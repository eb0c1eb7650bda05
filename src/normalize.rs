// 🔢 Field Normalizer - RawOrder → typed Order
// Numeric coercion with explicit, reported failure instead of silent NaN

use crate::source::RawOrder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// NORMALIZED ORDER
// ============================================================================

/// An order row with its numeric fields parsed.
/// Invariant: every numeric field of an accepted Order is finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub invoice_no: u64,
    pub invoice_date: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub customer_id: u64,
    pub country: String,
    pub line_number: usize,
}

impl Order {
    /// Quantity × unit price for this single row
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

// ============================================================================
// REJECTIONS & WARNINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Severity {
    /// Field is unusable; the row was excluded
    Critical,
    /// Field is questionable; the row was kept
    Warning,
}

/// A row excluded from the normalized set, with the reason why
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejection {
    pub line_number: usize,
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl Rejection {
    pub fn summary(&self) -> String {
        format!(
            "line {}: {} = {:?} rejected ({})",
            self.line_number, self.field, self.value, self.reason
        )
    }
}

/// A kept row with a questionable field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldWarning {
    pub line_number: usize,
    pub field: String,
    pub value: String,
    pub message: String,
    pub severity: Severity,
}

// ============================================================================
// POLICY & OUTCOME
// ============================================================================

/// What to do with a numeric field that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedFieldPolicy {
    /// Exclude the row and record a Rejection
    #[default]
    Reject,
    /// Keep the row with the field set to zero and record a warning
    SubstituteZero,
}

/// Result of normalizing a batch of raw orders
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub orders: Vec<Order>,
    pub rejections: Vec<Rejection>,
    pub warnings: Vec<FieldWarning>,
}

impl NormalizeOutcome {
    pub fn accepted_count(&self) -> usize {
        self.orders.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejections.len()
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

pub struct Normalizer {
    policy: MalformedFieldPolicy,
}

impl Normalizer {
    pub fn new(policy: MalformedFieldPolicy) -> Self {
        Normalizer { policy }
    }

    /// Normalize a batch, preserving input order of the accepted rows.
    /// Pure function of its input; nothing is printed or mutated in place.
    pub fn normalize_all(&self, raw: &[RawOrder]) -> NormalizeOutcome {
        let mut outcome = NormalizeOutcome::default();

        for record in raw {
            self.normalize_one(record, &mut outcome);
        }

        outcome
    }

    fn normalize_one(&self, raw: &RawOrder, outcome: &mut NormalizeOutcome) {
        let mut faults: Vec<(&'static str, String)> = Vec::new();

        let invoice_no = parse_integer(&raw.invoice_no).unwrap_or_else(|| {
            faults.push(("InvoiceNo", raw.invoice_no.clone()));
            0
        });
        let customer_id = parse_integer(&raw.customer_id).unwrap_or_else(|| {
            faults.push(("CustomerID", raw.customer_id.clone()));
            0
        });
        let quantity = parse_decimal(&raw.quantity).unwrap_or_else(|| {
            faults.push(("Quantity", raw.quantity.clone()));
            0.0
        });
        let unit_price = parse_decimal(&raw.unit_price).unwrap_or_else(|| {
            faults.push(("UnitPrice", raw.unit_price.clone()));
            0.0
        });

        if !faults.is_empty() {
            match self.policy {
                MalformedFieldPolicy::Reject => {
                    for (field, value) in faults {
                        outcome.rejections.push(Rejection {
                            line_number: raw.line_number,
                            field: field.to_string(),
                            value,
                            reason: "Not a finite number".to_string(),
                        });
                    }
                    return;
                }
                MalformedFieldPolicy::SubstituteZero => {
                    for (field, value) in faults {
                        outcome.warnings.push(FieldWarning {
                            line_number: raw.line_number,
                            field: field.to_string(),
                            value,
                            message: "Not a finite number; substituted zero".to_string(),
                            severity: Severity::Warning,
                        });
                    }
                }
            }
        }

        // Invoice date stays a string; a malformed one is flagged but never
        // rejected since it takes part in no arithmetic.
        if !invoice_date_is_well_formed(&raw.invoice_date) {
            outcome.warnings.push(FieldWarning {
                line_number: raw.line_number,
                field: "InvoiceDate".to_string(),
                value: raw.invoice_date.clone(),
                message: "Date does not start with MM/DD/YYYY".to_string(),
                severity: Severity::Warning,
            });
        }

        outcome.orders.push(Order {
            invoice_no,
            invoice_date: raw.invoice_date.clone(),
            quantity,
            unit_price,
            customer_id,
            country: raw.country.clone(),
            line_number: raw.line_number,
        });
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(MalformedFieldPolicy::Reject)
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

fn parse_integer(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_decimal(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// The date field reads "MM/DD/YYYY" optionally followed by a time of day
fn invoice_date_is_well_formed(value: &str) -> bool {
    let date_token = value.trim().split_whitespace().next().unwrap_or("");
    NaiveDate::parse_from_str(date_token, "%m/%d/%Y").is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
