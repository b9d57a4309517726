// src/encoding/metadata.rs

use tracing::warn;

use crate::error::{EncodeError, Result};
use crate::service::H3IndexService;
use crate::types::{CellMeasures, CellMetadata, MAX_H3_RES};

/// Fails with `InvalidCell` unless the service confirms `cell_id` is a cell.
///
/// Service errors, `Unavailable` included, pass through unchanged. Callers
/// run a lookup before this check so an outage surfaces as `Unavailable` even
/// from a service that answers `false` while it cannot be queried.
pub(crate) fn ensure_valid<S: H3IndexService>(service: &S, cell_id: &str) -> Result<()> {
  if service.is_valid(cell_id)? {
    Ok(())
  } else {
    warn!(cell_id, "rejecting invalid cell");
    Err(EncodeError::invalid_cell(cell_id))
  }
}

/// Queries `service` for validity, centroid, area and resolution of `cell_id`.
///
/// Invalid cells are rejected rather than reported with `h3_is_valid: false`,
/// so a returned record always has `h3_is_valid == true`.
pub(crate) fn cell_metadata<S: H3IndexService>(service: &S, cell_id: &str) -> Result<CellMetadata> {
  let measures = service.measures(cell_id)?;
  ensure_valid(service, cell_id)?;
  metadata_from_measures(cell_id, measures)
}

/// Metadata for a cell already accepted by [`ensure_valid`].
pub(crate) fn validated_metadata<S: H3IndexService>(service: &S, cell_id: &str) -> Result<CellMetadata> {
  metadata_from_measures(cell_id, service.measures(cell_id)?)
}

/// The service reports the centroid as a named [`LatLng`](crate::types::LatLng);
/// it is stored as `[lng, lat]` so `center` reads the same way as the polygon
/// coordinates next to it.
fn metadata_from_measures(cell_id: &str, measures: CellMeasures) -> Result<CellMetadata> {
  let CellMeasures {
    centroid,
    area_m2,
    resolution,
  } = measures;

  if !centroid.is_finite() {
    warn!(cell_id, "non-finite centroid");
    return Err(EncodeError::invalid_cell(cell_id));
  }
  if !area_m2.is_finite() || area_m2 < 0.0 {
    warn!(cell_id, area_m2, "area out of range");
    return Err(EncodeError::invalid_cell(cell_id));
  }
  if resolution > MAX_H3_RES {
    warn!(cell_id, resolution, "resolution out of range");
    return Err(EncodeError::invalid_cell(cell_id));
  }

  Ok(CellMetadata {
    h3_idx: cell_id.to_owned(),
    h3_is_valid: true,
    center: centroid.to_position(),
    area_m2,
    resolution,
  })
}
