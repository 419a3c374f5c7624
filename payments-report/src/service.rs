//! Payment Report Service
//!
//! Answers reporting queries over a payment snapshot.
//! Contains NO infrastructure logic - every operation fetches a fresh snapshot
//! through the repository port and filters, orders or sums it in memory.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use chrono::Datelike;
use rust_decimal::Decimal;

use payments_types::{
    AppError, DateTimeProvider, MonthlySummary, Payment, PaymentItem, PaymentRepository,
    YearMonth,
};

/// Orders payments newest first by `(year, month, day_of_year)`.
pub fn by_date_desc(a: &Payment, b: &Payment) -> Ordering {
    b.date_key().cmp(&a.date_key())
}

fn sum_final_prices<'a>(mut items: impl Iterator<Item = &'a PaymentItem>) -> Result<Decimal, AppError> {
    items
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.final_price))
        .ok_or(AppError::Overflow("final prices"))
}

fn sum_discounts<'a>(mut items: impl Iterator<Item = &'a PaymentItem>) -> Result<Decimal, AppError> {
    items
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.discount()?))
        .ok_or(AppError::Overflow("discounts"))
}

fn items_of<'a>(payments: &'a [Payment]) -> impl Iterator<Item = &'a PaymentItem> + Clone {
    payments.iter().flat_map(|p| p.payment_items.iter())
}

/// Read-only report service over payments.
///
/// Generic over the repository and the clock - both are injected at compile time.
/// This enables:
/// - Swapping snapshot sources without code changes
/// - Testing with a fixed clock
pub struct PaymentReportService<R: PaymentRepository, C: DateTimeProvider> {
    repo: R,
    clock: C,
}

impl<R: PaymentRepository, C: DateTimeProvider> PaymentReportService<R, C> {
    /// Creates a new report service with the given repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    async fn snapshot(&self) -> Result<Vec<Payment>, AppError> {
        let payments = self.repo.find_all().await?;
        tracing::debug!(count = payments.len(), "Fetched payment snapshot");
        Ok(payments)
    }

    async fn payments_in(&self, year_month: YearMonth) -> Result<Vec<Payment>, AppError> {
        Ok(self
            .snapshot()
            .await?
            .into_iter()
            .filter(|p| year_month.contains(&p.payment_date))
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ordering & Date Filters
    // ─────────────────────────────────────────────────────────────────────────────

    /// All payments, newest first. Payments on the same day keep snapshot order.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_sorted_by_date_desc(&self) -> Result<Vec<Payment>, AppError> {
        let mut payments = self.snapshot().await?;
        payments.sort_by(by_date_desc);
        Ok(payments)
    }

    /// Payments dated in the clock's current year-month.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_for_current_month(&self) -> Result<Vec<Payment>, AppError> {
        let now = self.clock.year_month_now();
        self.payments_in(now).await
    }

    /// Payments dated in the given year-month.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_for_given_month(
        &self,
        year_month: YearMonth,
    ) -> Result<Vec<Payment>, AppError> {
        self.payments_in(year_month).await
    }

    /// Payments from the current year whose day-of-year is within `days` of today.
    ///
    /// Only the current calendar year is considered: a payment inside the window
    /// but dated last year is excluded.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_for_given_last_days(
        &self,
        days: u32,
    ) -> Result<Vec<Payment>, AppError> {
        let now = self.clock.zoned_date_time_now();
        let earliest = i64::from(now.ordinal()) - i64::from(days);

        Ok(self
            .snapshot()
            .await?
            .into_iter()
            .filter(|p| p.year() == now.year())
            .filter(|p| i64::from(p.day_of_year()) >= earliest)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Item Queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Payments with exactly one line item.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_with_one_payment_item(
        &self,
    ) -> Result<HashSet<Payment>, AppError> {
        Ok(self
            .snapshot()
            .await?
            .into_iter()
            .filter(|p| p.item_count() == 1)
            .collect())
    }

    /// Distinct item names sold in the clock's current year-month.
    #[tracing::instrument(skip(self))]
    pub async fn find_products_sold_in_current_month(
        &self,
    ) -> Result<HashSet<String>, AppError> {
        let payments = self.payments_in(self.clock.year_month_now()).await?;
        Ok(items_of(&payments).map(|item| item.name.clone()).collect())
    }

    /// Line items of every payment made by the user with this exact email,
    /// in snapshot order.
    #[tracing::instrument(skip(self))]
    pub async fn get_payment_items_for_user_with_email(
        &self,
        user_email: &str,
    ) -> Result<Vec<PaymentItem>, AppError> {
        Ok(self
            .snapshot()
            .await?
            .into_iter()
            .filter(|p| p.user.has_email(user_email))
            .flat_map(|p| p.payment_items)
            .collect())
    }

    /// Payments whose summed item final prices are strictly above `threshold`.
    #[tracing::instrument(skip(self))]
    pub async fn find_payments_with_value_over(
        &self,
        threshold: Decimal,
    ) -> Result<HashSet<Payment>, AppError> {
        let mut over = HashSet::new();
        for payment in self.snapshot().await? {
            let total = payment
                .total_final_price()
                .ok_or(AppError::Overflow("payment total"))?;
            if total > threshold {
                over.insert(payment);
            }
        }
        Ok(over)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Monthly Sums
    // ─────────────────────────────────────────────────────────────────────────────

    /// Sum of item final prices for payments in the given year-month.
    #[tracing::instrument(skip(self))]
    pub async fn sum_total_for_given_month(
        &self,
        year_month: YearMonth,
    ) -> Result<Decimal, AppError> {
        let payments = self.payments_in(year_month).await?;
        let total = sum_final_prices(items_of(&payments))?;
        tracing::debug!(%total, "Summed final prices");
        Ok(total)
    }

    /// Regular prices minus final prices for payments in the given year-month.
    ///
    /// Summed per item over one snapshot, which equals the sum of regular prices
    /// minus the sum of final prices. Marked-up items reduce the result, which
    /// can therefore be negative.
    #[tracing::instrument(skip(self))]
    pub async fn sum_discount_for_given_month(
        &self,
        year_month: YearMonth,
    ) -> Result<Decimal, AppError> {
        let payments = self.payments_in(year_month).await?;
        let discount = sum_discounts(items_of(&payments))?;
        tracing::debug!(%discount, "Summed discount");
        Ok(discount)
    }

    /// Counts, sums and product names for one year-month from a single snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn monthly_summary(&self, year_month: YearMonth) -> Result<MonthlySummary, AppError> {
        let payments = self.payments_in(year_month).await?;
        let items = items_of(&payments);

        let total = sum_final_prices(items.clone())?;
        let discount = sum_discounts(items.clone())?;
        let products: BTreeSet<&str> = items.clone().map(|item| item.name.as_str()).collect();

        Ok(MonthlySummary {
            year_month,
            payment_count: payments.len(),
            item_count: items.count(),
            total,
            discount,
            products: products.into_iter().map(str::to_owned).collect(),
        })
    }
}
