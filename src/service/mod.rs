// src/service/mod.rs

//! Lookup capability the encoder depends on.
//!
//! An [`H3IndexService`] answers questions about a single cell identifier.
//! Implementations must be stateless lookups: every method depends only on its
//! argument, which is what lets encoder calls run concurrently without locking.

mod h3o_backend;

pub use h3o_backend::H3oService;

use std::sync::Arc;

use crate::error::ServiceError;
use crate::types::{CellMeasures, LatLng};

/// Source of boundary and metadata for H3 cell identifiers.
pub trait H3IndexService: Send + Sync {
  /// Whether `cell_id` names a valid H3 cell.
  ///
  /// A service that cannot be queried must answer
  /// [`ServiceError::Unavailable`], not `Ok(false)`.
  fn is_valid(&self, cell_id: &str) -> Result<bool, ServiceError>;

  /// Cell boundary vertices, in order. The ring need not be closed.
  ///
  /// Must fail rather than return garbage for invalid identifiers.
  fn boundary(&self, cell_id: &str) -> Result<Vec<LatLng>, ServiceError>;

  /// Cell center point.
  fn centroid(&self, cell_id: &str) -> Result<LatLng, ServiceError>;

  /// Exact cell surface area in square meters.
  fn area_m2(&self, cell_id: &str) -> Result<f64, ServiceError>;

  /// Resolution level, 0 through 15.
  fn resolution(&self, cell_id: &str) -> Result<u8, ServiceError>;

  /// Centroid, area and resolution in one lookup.
  ///
  /// Backends that decode the identifier should override this to decode once.
  fn measures(&self, cell_id: &str) -> Result<CellMeasures, ServiceError> {
    Ok(CellMeasures {
      centroid: self.centroid(cell_id)?,
      area_m2: self.area_m2(cell_id)?,
      resolution: self.resolution(cell_id)?,
    })
  }
}

impl<S: H3IndexService + ?Sized> H3IndexService for &S {
  fn is_valid(&self, cell_id: &str) -> Result<bool, ServiceError> {
    (**self).is_valid(cell_id)
  }

  fn boundary(&self, cell_id: &str) -> Result<Vec<LatLng>, ServiceError> {
    (**self).boundary(cell_id)
  }

  fn centroid(&self, cell_id: &str) -> Result<LatLng, ServiceError> {
    (**self).centroid(cell_id)
  }

  fn area_m2(&self, cell_id: &str) -> Result<f64, ServiceError> {
    (**self).area_m2(cell_id)
  }

  fn resolution(&self, cell_id: &str) -> Result<u8, ServiceError> {
    (**self).resolution(cell_id)
  }

  fn measures(&self, cell_id: &str) -> Result<CellMeasures, ServiceError> {
    (**self).measures(cell_id)
  }
}

impl<S: H3IndexService + ?Sized> H3IndexService for Arc<S> {
  fn is_valid(&self, cell_id: &str) -> Result<bool, ServiceError> {
    (**self).is_valid(cell_id)
  }

  fn boundary(&self, cell_id: &str) -> Result<Vec<LatLng>, ServiceError> {
    (**self).boundary(cell_id)
  }

  fn centroid(&self, cell_id: &str) -> Result<LatLng, ServiceError> {
    (**self).centroid(cell_id)
  }

  fn area_m2(&self, cell_id: &str) -> Result<f64, ServiceError> {
    (**self).area_m2(cell_id)
  }

  fn resolution(&self, cell_id: &str) -> Result<u8, ServiceError> {
    (**self).resolution(cell_id)
  }

  fn measures(&self, cell_id: &str) -> Result<CellMeasures, ServiceError> {
    (**self).measures(cell_id)
  }
}
