//! # Payments Repository
//!
//! Concrete adapters for the payment reporting ports.
//! Provides read-only snapshot sources implementing `PaymentRepository`
//! and clocks implementing `DateTimeProvider`.

pub mod clock;
pub mod json;
pub mod memory;

pub use clock::{Clock, FixedClock, SystemClock, build_clock};
pub use json::JsonSnapshotRepo;
pub use memory::InMemoryPaymentRepo;
