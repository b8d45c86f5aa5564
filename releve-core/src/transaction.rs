use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized statement transaction (institution-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Booking date; `None` when the raw cell does not hold a valid date.
    pub date: Option<NaiveDate>,
    /// Value date, same convention as `date`.
    pub value_date: Option<NaiveDate>,
    pub label: String,
    /// Signed amount: negative for debits, positive for credits.
    pub value: f64,
    pub debit: bool,
}

impl Transaction {
    /// Placeholder for rows too short to normalize (fewer than four cells).
    pub fn placeholder() -> Self {
        Self {
            date: None,
            value_date: None,
            label: String::new(),
            value: 0.0,
            debit: false,
        }
    }
}

/// Parse a `DD/MM/YYYY` cell by fixed offsets.
///
/// Out-of-range components (month 13, day 32) yield `None` rather than
/// rolling over into a neighboring period.
pub fn parse_slash_date(raw: &str) -> Option<NaiveDate> {
    let day: u32 = raw.get(0..2)?.parse().ok()?;
    let month: u32 = raw.get(3..5)?.parse().ok()?;
    let year: i32 = raw.get(6..10)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve a debit/credit cell pair into a signed value.
///
/// A non-blank debit cell always wins: digits and commas are kept, the comma
/// becomes a decimal point, and the result is negated. Otherwise the credit
/// cell gets the same normalization and stays positive. Residue that still
/// fails to parse is worth 0.
pub fn debit_credit_value(debit_raw: &str, credit_raw: &str) -> (f64, bool) {
    if !debit_raw.trim().is_empty() {
        (-decimal_comma(debit_raw), true)
    } else {
        (decimal_comma(credit_raw), false)
    }
}

fn decimal_comma(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    digits.replace(',', ".").parse().unwrap_or(0.0)
}
