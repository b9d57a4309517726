// demos/cells_to_geojson.rs
//
// Prints GeoJSON for the H3 cells given on the command line.
//
//   cargo run --example cells_to_geojson -- 8928308280fffff 85283473fffffff
//   H3_GEOJSON_OPTIONS='{"geometry_only":true}' cargo run --example cells_to_geojson -- 8928308280fffff
//
// Set RUST_LOG=h3_geojson=debug to see encoder traces.

use std::env;

use h3_geojson::{cell_to_geojson, cells_to_geojson, EncodeError, EncodeOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let options: EncodeOptions = match env::var("H3_GEOJSON_OPTIONS") {
    Ok(raw) => serde_json::from_str(&raw)?,
    Err(_) => EncodeOptions::default(),
  };

  let cells: Vec<String> = env::args().skip(1).collect();
  let result = match cells.as_slice() {
    [single] => cell_to_geojson(single, options),
    many => cells_to_geojson(many, options),
  };

  match result {
    Ok(json) => {
      println!("{json}");
      Ok(())
    }
    Err(EncodeError::InvalidCell { cell_id }) => {
      eprintln!("not an H3 cell: {cell_id}");
      std::process::exit(2);
    }
    Err(e) => Err(e.into()),
  }
}
