//! # Payments Types
//!
//! Domain types and port traits for payment reporting.
//! This crate has ZERO external IO dependencies - only data structures,
//! date helpers, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Payment, PaymentItem, YearMonth)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Report shapes handed to callers
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, PaymentItem, User, YearMonth};
pub use dto::MonthlySummary;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{DateTimeProvider, PaymentRepository};
