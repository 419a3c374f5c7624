//! JSON snapshot file adapter.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use payments_types::{Payment, PaymentRepository, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// JSON Snapshot Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Reads payments from a JSON file holding an array of payments.
///
/// The file is re-read on every call; nothing is cached and nothing is written.
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepo {
    path: PathBuf,
}

impl JsonSnapshotRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PaymentRepository for JsonSnapshotRepo {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RepoError::Io(format!("{}: {}", self.path.display(), e)))?;

        let payments: Vec<Payment> = serde_json::from_slice(&bytes)
            .map_err(|e| RepoError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(count = payments.len(), "Loaded payment snapshot");
        Ok(payments)
    }
}
