//! Domain models for payment reporting.

pub mod payment;
pub mod user;
pub mod year_month;

pub use payment::{Payment, PaymentId, PaymentItem};
pub use user::User;
pub use year_month::YearMonth;
