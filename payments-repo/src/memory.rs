//! In-memory snapshot adapter.

use async_trait::async_trait;

use payments_types::{Payment, PaymentRepository, RepoError};

/// Serves a fixed set of payments.
///
/// Every call returns a fresh copy, so callers can never alter what the next
/// call sees.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentRepo {
    payments: Vec<Payment>,
}

impl InMemoryPaymentRepo {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepo {
    async fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.clone())
    }
}
