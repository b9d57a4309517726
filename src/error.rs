// src/error.rs

use thiserror::Error;

/// Failure reported by an [`H3IndexService`](crate::service::H3IndexService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
  /// The service could not interpret the identifier as an H3 cell.
  #[error("H3 cell argument was not valid: {0:?}")]
  InvalidCell(String),
  /// The service itself could not be queried.
  #[error("H3 index service unavailable: {0}")]
  Unavailable(String),
}

/// Errors returned by the GeoJSON encoder.
#[derive(Debug, Error)]
pub enum EncodeError {
  /// The cell could not be validated, or the index service produced degenerate
  /// geometry or out-of-range metadata for it.
  #[error("invalid H3 cell: {cell_id:?}")]
  InvalidCell { cell_id: String },

  /// The index service could not be queried. Carries the service's reason unchanged.
  #[error("H3 index service unavailable: {reason}")]
  ServiceUnavailable { reason: String },

  #[error("failed to serialize GeoJSON: {0}")]
  Serialize(#[from] serde_json::Error),
}

impl EncodeError {
  pub(crate) fn invalid_cell(cell_id: impl Into<String>) -> Self {
    Self::InvalidCell {
      cell_id: cell_id.into(),
    }
  }

  /// The offending identifier, when the error concerns a specific cell.
  pub fn cell_id(&self) -> Option<&str> {
    match self {
      Self::InvalidCell { cell_id } => Some(cell_id.as_str()),
      _ => None,
    }
  }
}

impl From<ServiceError> for EncodeError {
  fn from(err: ServiceError) -> Self {
    match err {
      ServiceError::InvalidCell(cell_id) => Self::InvalidCell { cell_id },
      ServiceError::Unavailable(reason) => Self::ServiceUnavailable { reason },
    }
  }
}

pub type Result<T, E = EncodeError> = std::result::Result<T, E>;
