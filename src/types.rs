//! Core data structures shared by the encoder and the index service.

use serde::{Deserialize, Serialize};

/// Highest resolution defined by the H3 grid.
pub const MAX_H3_RES: u8 = 15;

/// Latitude/longitude coordinates in decimal degrees (WGS84).
///
/// Points cross the service boundary in this named form. Conversion to a
/// GeoJSON position happens only through [`LatLng::to_position`], which always
/// yields `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct LatLng {
  /// Latitude in degrees.
  pub lat: f64,
  /// Longitude in degrees.
  pub lng: f64,
}

impl LatLng {
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// GeoJSON position, longitude first.
  #[must_use]
  pub const fn to_position(self) -> [f64; 2] {
    [self.lng, self.lat]
  }

  pub fn is_finite(self) -> bool {
    self.lat.is_finite() && self.lng.is_finite()
  }
}

/// Centroid, area and resolution of one cell, as reported by an index service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasures {
  pub centroid: LatLng,
  pub area_m2: f64,
  pub resolution: u8,
}

/// Per-cell properties attached to a GeoJSON feature.
///
/// `center` is a `[lng, lat]` pair, matching the coordinate order of the
/// geometry it accompanies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellMetadata {
  pub h3_idx: String,
  pub h3_is_valid: bool,
  pub center: [f64; 2],
  pub area_m2: f64,
  pub resolution: u8,
}

/// Output shape switches for the encoder.
///
/// Deserializes with per-field defaults, so a partial table such as
/// `{"geometry_only": true}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
  /// Attach [`CellMetadata`] as feature properties. When false, properties are `{}`.
  pub include_properties: bool,
  /// Emit bare Polygon geometries instead of features.
  pub geometry_only: bool,
}

impl Default for EncodeOptions {
  fn default() -> Self {
    Self {
      include_properties: true,
      geometry_only: false,
    }
  }
}

impl EncodeOptions {
  #[must_use]
  pub fn include_properties(mut self, include: bool) -> Self {
    self.include_properties = include;
    self
  }

  #[must_use]
  pub fn geometry_only(mut self, geometry_only: bool) -> Self {
    self.geometry_only = geometry_only;
    self
  }

  /// Bare geometry output; properties are irrelevant in this mode.
  #[must_use]
  pub fn geometries() -> Self {
    Self::default().geometry_only(true)
  }
}
