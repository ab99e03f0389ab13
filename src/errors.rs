use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced by the orderdesk domain core.
///
/// Display lookups and view routing are total by contract and never return
/// these; strict parsing boundaries and the export writer do.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown order status: {0}")]
    InvalidStatus(String),

    #[error("Unknown subdistrict: {0}")]
    InvalidSubdistrict(String),

    #[error("CSV export failed: {0}")]
    ExportFailed(#[from] std::io::Error),
}
