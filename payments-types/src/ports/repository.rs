//! Repository port trait.
//!
//! Adapters (in-memory, JSON snapshot files) implement this trait.

use crate::domain::Payment;
use crate::error::RepoError;

/// Source of payment snapshots.
///
/// Returns every known payment on each call, in no particular order.
/// Filtering is done by the caller.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Fetches the full, unfiltered snapshot.
    async fn find_all(&self) -> Result<Vec<Payment>, RepoError>;
}
