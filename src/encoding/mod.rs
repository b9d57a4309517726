// src/encoding/mod.rs

//! H3 cell to GeoJSON conversion.
//!
//! Output shapes per call and options:
//!
//! | call           | `geometry_only` | output                                          |
//! |----------------|-----------------|-------------------------------------------------|
//! | `encode_cell`  | `false`         | `FeatureCollection` holding exactly one Feature |
//! | `encode_cell`  | `true`          | one bare `Polygon` geometry object              |
//! | `encode_cells` | `false`         | `FeatureCollection`, one Feature per distinct id |
//! | `encode_cells` | `true`          | JSON array of bare `Polygon` geometry objects   |
//!
//! With `include_properties` false, feature properties are the empty object `{}`.
//! Batch calls deduplicate the ids by exact string and encode them in
//! lexicographic order. Two spellings of one cell (`"8928308280fffff"` and
//! `"8928308280FFFFF"`) are distinct ids here; canonicalize first when one
//! feature per cell is required.
//! Any invalid id fails the whole call; partial documents are never produced.

mod metadata;
mod ring;

use std::collections::BTreeSet;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use tracing::{debug, trace, warn};

use crate::error::{EncodeError, Result};
use crate::service::{H3IndexService, H3oService};
use crate::types::{CellMetadata, EncodeOptions, LatLng};

/// Converts H3 cell identifiers into GeoJSON.
///
/// Holds nothing but the injected [`H3IndexService`]; every call is
/// independent, and the encoder is `Send + Sync` whenever the service is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellGeoJsonEncoder<S = H3oService> {
  service: S,
}

impl CellGeoJsonEncoder<H3oService> {
  /// Encoder backed by the `h3o` crate.
  pub const fn new() -> Self {
    Self { service: H3oService }
  }
}

impl<S: H3IndexService> CellGeoJsonEncoder<S> {
  pub fn with_service(service: S) -> Self {
    Self { service }
  }

  pub fn service(&self) -> &S {
    &self.service
  }

  /// Validity, `[lng, lat]` center, area in m² and resolution of one cell.
  pub fn cell_metadata(&self, cell_id: &str) -> Result<CellMetadata> {
    metadata::cell_metadata(&self.service, cell_id)
  }

  /// Polygon geometry with a single closed ring.
  pub fn cell_geometry(&self, cell_id: &str) -> Result<Geometry> {
    let verts = self.service.boundary(cell_id)?;
    metadata::ensure_valid(&self.service, cell_id)?;
    ring_geometry(cell_id, &verts)
  }

  /// Feature for one cell; properties are `{}` unless `include_properties`.
  pub fn cell_feature(&self, cell_id: &str, include_properties: bool) -> Result<Feature> {
    let verts = self.service.boundary(cell_id)?;
    metadata::ensure_valid(&self.service, cell_id)?;

    let geometry = ring_geometry(cell_id, &verts)?;
    let properties: JsonObject = if include_properties {
      metadata::validated_metadata(&self.service, cell_id)?.into()
    } else {
      JsonObject::new()
    };

    Ok(Feature {
      bbox: None,
      geometry: Some(geometry),
      id: None,
      properties: Some(properties),
      foreign_members: None,
    })
  }

  /// Geometries for the distinct ids in `cell_ids`, sorted by id.
  pub fn cells_geometries<I>(&self, cell_ids: I) -> Result<Vec<Geometry>>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    distinct_sorted(cell_ids)
      .iter()
      .map(|cell_id| self.cell_geometry(cell_id))
      .collect()
  }

  /// One feature per distinct id in `cell_ids`, sorted by id.
  pub fn cells_feature_collection<I>(&self, cell_ids: I, include_properties: bool) -> Result<FeatureCollection>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let features = distinct_sorted(cell_ids)
      .iter()
      .map(|cell_id| self.cell_feature(cell_id, include_properties))
      .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection {
      bbox: None,
      features,
      foreign_members: None,
    })
  }

  /// Encodes one cell as GeoJSON text.
  ///
  /// Returns a bare Polygon when `options.geometry_only`, otherwise a
  /// FeatureCollection wrapping a single Feature.
  pub fn encode_cell(&self, cell_id: &str, options: EncodeOptions) -> Result<String> {
    debug!(cell_id, ?options, "encoding cell");

    if options.geometry_only {
      let geometry = self.cell_geometry(cell_id)?;
      return Ok(serde_json::to_string(&geometry)?);
    }

    let feature = self.cell_feature(cell_id, options.include_properties)?;
    let collection = FeatureCollection {
      bbox: None,
      features: vec![feature],
      foreign_members: None,
    };
    Ok(serde_json::to_string(&collection)?)
  }

  /// Encodes a set of cells as GeoJSON text.
  ///
  /// Returns a JSON array of bare Polygons when `options.geometry_only`,
  /// otherwise one FeatureCollection.
  pub fn encode_cells<I>(&self, cell_ids: I, options: EncodeOptions) -> Result<String>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let cell_ids = distinct_sorted(cell_ids);
    debug!(cells = cell_ids.len(), ?options, "encoding cells");

    if options.geometry_only {
      let geometries = self.cells_geometries(&cell_ids)?;
      return Ok(serde_json::to_string(&geometries)?);
    }

    let collection = self.cells_feature_collection(&cell_ids, options.include_properties)?;
    Ok(serde_json::to_string(&collection)?)
  }
}

fn ring_geometry(cell_id: &str, verts: &[LatLng]) -> Result<Geometry> {
  let Some(ring) = ring::closed_ring(verts) else {
    warn!(cell_id, vertices = verts.len(), "degenerate cell boundary");
    return Err(EncodeError::invalid_cell(cell_id));
  };
  trace!(cell_id, positions = ring.len(), "built cell ring");

  Ok(Geometry::new(Value::Polygon(vec![ring])))
}

/// Single-cell conversion with the `h3o` backend.
pub fn cell_to_geojson(cell_id: &str, options: EncodeOptions) -> Result<String> {
  CellGeoJsonEncoder::new().encode_cell(cell_id, options)
}

/// Batch conversion with the `h3o` backend.
pub fn cells_to_geojson<I>(cell_ids: I, options: EncodeOptions) -> Result<String>
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  CellGeoJsonEncoder::new().encode_cells(cell_ids, options)
}

fn distinct_sorted<I>(cell_ids: I) -> BTreeSet<String>
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  cell_ids.into_iter().map(|id| id.as_ref().to_owned()).collect()
}

impl From<CellMetadata> for JsonObject {
  fn from(meta: CellMetadata) -> Self {
    let mut props = JsonObject::new();
    props.insert("h3_idx".to_owned(), JsonValue::from(meta.h3_idx));
    props.insert("h3_is_valid".to_owned(), JsonValue::from(meta.h3_is_valid));
    props.insert("center".to_owned(), JsonValue::from(meta.center.to_vec()));
    props.insert("area_m2".to_owned(), JsonValue::from(meta.area_m2));
    props.insert("resolution".to_owned(), JsonValue::from(meta.resolution));
    props
  }
}
