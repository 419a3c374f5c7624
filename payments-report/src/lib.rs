//! # Payments Report
//!
//! Query and aggregation service over payment snapshots.
//!
//! ## Architecture
//!
//! - `service` - Report service (filters, orders and sums snapshots)
//!
//! The service is generic over `R: PaymentRepository` and
//! `C: DateTimeProvider`, allowing different adapters to be injected.

pub mod service;


pub use service::{PaymentReportService, by_date_desc};
