//! Payment domain model.

use chrono::{DateTime, Datelike, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;
use super::year_month::YearMonth;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single line item of a payment.
///
/// `final_price` is the post-discount amount. It is expected to be at most
/// `regular_price`, but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentItem {
    pub name: String,
    pub regular_price: Decimal,
    pub final_price: Decimal,
}

impl PaymentItem {
    pub fn new(name: impl Into<String>, regular_price: Decimal, final_price: Decimal) -> Self {
        Self {
            name: name.into(),
            regular_price,
            final_price,
        }
    }

    /// Regular minus final price. Negative when the item was marked up.
    ///
    /// `None` if the difference does not fit in a `Decimal`.
    pub fn discount(&self) -> Option<Decimal> {
        self.regular_price.checked_sub(self.final_price)
    }
}

/// A payment made by one user on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// When the payment was made, in the zone it was recorded in
    pub payment_date: DateTime<FixedOffset>,
    /// Who paid
    pub user: User,
    /// Line items, in the order they were recorded
    pub payment_items: Vec<PaymentItem>,
}

impl Payment {
    /// Creates a new payment with a fresh id.
    pub fn new(
        payment_date: DateTime<FixedOffset>,
        user: User,
        payment_items: Vec<PaymentItem>,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            payment_date,
            user,
            payment_items,
        }
    }

    /// Creates a payment with all fields specified (for snapshot reconstruction).
    pub fn from_parts(
        id: PaymentId,
        payment_date: DateTime<FixedOffset>,
        user: User,
        payment_items: Vec<PaymentItem>,
    ) -> Self {
        Self {
            id,
            payment_date,
            user,
            payment_items,
        }
    }

    pub fn year(&self) -> i32 {
        self.payment_date.year()
    }

    /// Calendar month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.payment_date.month()
    }

    /// Ordinal day within the year, 1 through 366.
    pub fn day_of_year(&self) -> u32 {
        self.payment_date.ordinal()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(&self.payment_date)
    }

    /// Sort key used for date ordering: `(year, month, day_of_year)`.
    pub fn date_key(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day_of_year())
    }

    pub fn item_count(&self) -> usize {
        self.payment_items.len()
    }

    /// Sum of the final prices of all items, `None` on overflow.
    pub fn total_final_price(&self) -> Option<Decimal> {
        self.payment_items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.final_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_item_discount() {
        let item = PaymentItem::new("Coffee", dec!(10.00), dec!(7.50));
        assert_eq!(item.discount(), Some(dec!(2.50)));
    }

    #[test]
    fn test_markup_gives_negative_discount() {
        let item = PaymentItem::new("Surge", dec!(10.00), dec!(12.00));
        assert_eq!(item.discount(), Some(dec!(-2.00)));
    }

    #[test]
    fn test_discount_overflow_is_none() {
        let item = PaymentItem::new("Broken", Decimal::MAX, Decimal::MIN);
        assert_eq!(item.discount(), None);
    }

    #[test]
    fn test_date_accessors() {
        let payment = Payment::new(date(2024, 2, 1), User::new("a@b.c"), vec![]);
        assert_eq!(payment.year(), 2024);
        assert_eq!(payment.month(), 2);
        assert_eq!(payment.day_of_year(), 32);
        assert_eq!(payment.date_key(), (2024, 2, 32));
        assert_eq!(payment.year_month(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_totals() {
        let payment = Payment::new(
            date(2024, 5, 10),
            User::new("a@b.c"),
            vec![
                PaymentItem::new("Tea", dec!(5.00), dec!(4.00)),
                PaymentItem::new("Cake", dec!(12.50), dec!(12.50)),
            ],
        );
        assert_eq!(payment.item_count(), 2);
        assert_eq!(payment.total_final_price(), Some(dec!(16.50)));
    }

    #[test]
    fn test_empty_payment_totals_are_zero() {
        let payment = Payment::new(date(2024, 5, 10), User::new("a@b.c"), vec![]);
        assert_eq!(payment.total_final_price(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let payment = Payment::new(
            date(2024, 5, 10),
            User::new("a@b.c"),
            vec![
                PaymentItem::new("Big", Decimal::MAX, Decimal::MAX),
                PaymentItem::new("Bigger", Decimal::MAX, Decimal::MAX),
            ],
        );
        assert_eq!(payment.total_final_price(), None);
    }

    #[test]
    fn test_distinct_ids_make_distinct_payments() {
        let a = Payment::new(date(2024, 5, 10), User::new("a@b.c"), vec![]);
        let b = Payment::from_parts(PaymentId::new(), a.payment_date, a.user.clone(), vec![]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_payment_json_shape() {
        let payment = Payment::from_parts(
            "6f1c1e0a-3d4b-4a8e-9b8f-2f4a7c9d1e23".parse().unwrap(),
            date(2024, 5, 10),
            User::new("a@b.c"),
            vec![PaymentItem::new("Tea", dec!(5.00), dec!(4.00))],
        );
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["payment_date"], "2024-05-10T12:00:00+00:00");
        assert_eq!(json["payment_items"][0]["final_price"], "4.00");

        let back: Payment = serde_json::from_value(json).unwrap();
        assert_eq!(back, payment);
    }
}
