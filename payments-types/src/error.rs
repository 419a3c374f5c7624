//! Error types for payment reporting.

/// Domain-level errors (malformed values supplied by callers).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid year-month: {0} (expected YYYY-MM)")]
    InvalidYearMonth(String),
}

/// Repository-level errors (snapshot access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Application-level errors returned by the report service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("Decimal overflow while summing {0}")]
    Overflow(&'static str),
}
