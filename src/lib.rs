#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Every fallible call returns EncodeError
#![allow(clippy::must_use_candidate)]

//! `h3_geojson` renders H3 cell identifiers as GeoJSON (RFC 7946).
//!
//! Cells become single-ring `Polygon` geometries, optionally wrapped in
//! features carrying per-cell metadata (validity, center, area, resolution).
//! Boundary and metadata lookups go through an [`H3IndexService`]; the default
//! [`H3oService`] answers them with the `h3o` crate.
//!
//! ```no_run
//! use h3_geojson::{cell_to_geojson, EncodeOptions};
//!
//! let json = cell_to_geojson("8928308280fffff", EncodeOptions::default())?;
//! assert!(json.starts_with('{'));
//! # Ok::<(), h3_geojson::EncodeError>(())
//! ```

pub mod encoding;
pub mod error;
pub mod service;
pub mod types;

pub use encoding::{cell_to_geojson, cells_to_geojson, CellGeoJsonEncoder};
pub use error::{EncodeError, Result, ServiceError};
pub use service::{H3IndexService, H3oService};
pub use types::{CellMeasures, CellMetadata, EncodeOptions, LatLng, MAX_H3_RES};
