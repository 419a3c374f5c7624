//! Report shapes handed back to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::YearMonth;

// ─────────────────────────────────────────────────────────────────────────────
// Monthly report
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregated figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year_month: YearMonth,
    /// Number of payments dated in the month
    pub payment_count: usize,
    /// Number of line items across those payments
    pub item_count: usize,
    /// Sum of item final prices
    pub total: Decimal,
    /// Sum of regular prices minus `total`
    pub discount: Decimal,
    /// Distinct product names, sorted
    pub products: Vec<String>,
}
