// src/service/h3o_backend.rs

use std::str::FromStr;

use h3o::CellIndex;

use super::H3IndexService;
use crate::error::ServiceError;
use crate::types::{CellMeasures, LatLng};

/// [`H3IndexService`] backed by the `h3o` crate.
///
/// Identifiers are parsed as hexadecimal H3 cell indexes (`"8928308280fffff"`).
/// Parsing is lenient: `"8928308280FFFFF"`, `"+8928308280fffff"` and
/// `"08928308280fffff"` name the same cell as the canonical lowercase form.
/// The encoder deduplicates batch input by string, so such spellings produce
/// separate features; pass canonical ids (see [`H3oService::canonical`]) when
/// one feature per cell is required.
///
/// All answers are computed locally, so this service never reports
/// [`ServiceError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct H3oService;

impl H3oService {
  pub const fn new() -> Self {
    Self
  }

  fn parse(cell_id: &str) -> Result<CellIndex, ServiceError> {
    CellIndex::from_str(cell_id).map_err(|_| ServiceError::InvalidCell(cell_id.to_owned()))
  }

  /// Canonical lowercase spelling of `cell_id`.
  pub fn canonical(cell_id: &str) -> Result<String, ServiceError> {
    Ok(Self::parse(cell_id)?.to_string())
  }
}

impl From<h3o::LatLng> for LatLng {
  fn from(ll: h3o::LatLng) -> Self {
    // h3o accessors are already in degrees
    Self::new(ll.lat(), ll.lng())
  }
}

impl H3IndexService for H3oService {
  fn is_valid(&self, cell_id: &str) -> Result<bool, ServiceError> {
    Ok(Self::parse(cell_id).is_ok())
  }

  fn boundary(&self, cell_id: &str) -> Result<Vec<LatLng>, ServiceError> {
    let cell = Self::parse(cell_id)?;
    Ok(cell.boundary().iter().copied().map(LatLng::from).collect())
  }

  fn centroid(&self, cell_id: &str) -> Result<LatLng, ServiceError> {
    let cell = Self::parse(cell_id)?;
    Ok(LatLng::from(h3o::LatLng::from(cell)))
  }

  fn area_m2(&self, cell_id: &str) -> Result<f64, ServiceError> {
    Ok(Self::parse(cell_id)?.area_m2())
  }

  fn resolution(&self, cell_id: &str) -> Result<u8, ServiceError> {
    Ok(u8::from(Self::parse(cell_id)?.resolution()))
  }

  fn measures(&self, cell_id: &str) -> Result<CellMeasures, ServiceError> {
    let cell = Self::parse(cell_id)?;
    Ok(CellMeasures {
      centroid: LatLng::from(h3o::LatLng::from(cell)),
      area_m2: cell.area_m2(),
      resolution: u8::from(cell.resolution()),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  #[test]
  fn test_is_valid() {
    let svc = H3oService::new();
    assert_eq!(svc.is_valid("85283473fffffff"), Ok(true));
    assert_eq!(svc.is_valid("8928308280fffff"), Ok(true));
    assert_eq!(svc.is_valid(""), Ok(false));
    assert_eq!(svc.is_valid("asdf"), Ok(false));
    assert_eq!(svc.is_valid("not-a-real-cell"), Ok(false));
    // Null index
    assert_eq!(svc.is_valid("0"), Ok(false));
  }

  #[test]
  fn test_lenient_spellings_share_canonical_form() {
    for spelling in ["8928308280FFFFF", "+8928308280fffff", "08928308280fffff"] {
      assert_eq!(H3oService.is_valid(spelling), Ok(true), "{} should parse", spelling);
      assert_eq!(H3oService::canonical(spelling).unwrap(), "8928308280fffff");
    }
    assert_eq!(
      H3oService::canonical("asdf"),
      Err(ServiceError::InvalidCell("asdf".to_owned()))
    );
  }

  #[test]
  fn test_measures_match_single_lookups() {
    let cell = "8928342e20fffff";
    let measures = H3oService.measures(cell).unwrap();
    assert_eq!(measures.centroid, H3oService.centroid(cell).unwrap());
    assert_eq!(measures.area_m2, H3oService.area_m2(cell).unwrap());
    assert_eq!(measures.resolution, 9);
  }

  #[test]
  fn test_centroid_degrees() {
    // "cellToLatLng -c 8928342e20fffff" "POINT(-122.5003039349 37.5012466151)"
    let center = H3oService.centroid("8928342e20fffff").unwrap();
    assert_relative_eq!(center.lng, -122.5003039349, epsilon = 1e-9);
    assert_relative_eq!(center.lat, 37.5012466151, epsilon = 1e-9);
  }

  #[test]
  fn test_area_m2() {
    // "cellAreaKm2 -c 85283473fffffff" "265.0925581283"
    let area = H3oService.area_m2("85283473fffffff").unwrap();
    assert_relative_eq!(area, 265.0925581283 * 1_000_000.0, max_relative = 1e-6);
  }

  #[test]
  fn test_resolution() {
    assert_eq!(H3oService.resolution("85283473fffffff"), Ok(5));
    assert_eq!(H3oService.resolution("8928308280fffff"), Ok(9));
    assert_eq!(H3oService.resolution("8009fffffffffff"), Ok(0));
  }

  #[test]
  fn test_boundary_vertex_counts() {
    let hex = H3oService.boundary("8928342e20fffff").unwrap();
    assert_eq!(hex.len(), 6);
    assert!(hex.iter().all(|ll| ll.is_finite()));

    let pent = H3oService.boundary("8009fffffffffff").unwrap();
    assert!(pent.len() >= 5 && pent.len() <= 10, "Pentagon boundary had {} vertices", pent.len());
  }

  #[test]
  fn test_invalid_cell_names_input() {
    assert_eq!(
      H3oService.boundary("asdf"),
      Err(ServiceError::InvalidCell("asdf".to_owned()))
    );
    assert_eq!(H3oService.resolution(""), Err(ServiceError::InvalidCell(String::new())));
  }
}
