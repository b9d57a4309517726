// src/encoding/ring.rs

use crate::types::LatLng;

/// Minimum vertex count, excluding the closing vertex, for a non-degenerate polygon.
const MIN_RING_VERTS: usize = 3;

/// Builds a closed GeoJSON linear ring from boundary vertices.
///
/// Positions are emitted `[lng, lat]`. The first vertex is appended at the end
/// unless the input already repeats it. Returns `None` for degenerate input:
/// fewer than three vertices besides the closing one, or any non-finite
/// coordinate.
pub(crate) fn closed_ring(verts: &[LatLng]) -> Option<Vec<Vec<f64>>> {
  if verts.iter().any(|ll| !ll.is_finite()) {
    return None;
  }

  let mut ring: Vec<[f64; 2]> = verts.iter().copied().map(LatLng::to_position).collect();

  let first = *ring.first()?;
  if ring.last() != Some(&first) {
    ring.push(first);
  }

  // Closing vertex is not distinct
  if ring.len() - 1 < MIN_RING_VERTS {
    return None;
  }

  Some(ring.into_iter().map(Vec::from).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square() -> Vec<LatLng> {
    vec![
      LatLng::new(0.0, 0.0),
      LatLng::new(0.0, 1.0),
      LatLng::new(1.0, 1.0),
      LatLng::new(1.0, 0.0),
    ]
  }

  #[test]
  fn test_open_ring_is_closed() {
    let ring = closed_ring(&square()).unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
  }

  #[test]
  fn test_closed_ring_is_not_doubled() {
    let mut verts = square();
    verts.push(verts[0]);
    let ring = closed_ring(&verts).unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
  }

  #[test]
  fn test_positions_are_lng_lat() {
    let verts = vec![
      LatLng::new(10.0, 20.0),
      LatLng::new(11.0, 20.0),
      LatLng::new(11.0, 21.0),
    ];
    let ring = closed_ring(&verts).unwrap();
    assert_eq!(ring[0], vec![20.0, 10.0]);
    assert_eq!(ring[2], vec![21.0, 11.0]);
  }

  #[test]
  fn test_degenerate_rings_rejected() {
    assert_eq!(closed_ring(&[]), None);
    assert_eq!(closed_ring(&[LatLng::new(1.0, 1.0)]), None);
    assert_eq!(closed_ring(&[LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)]), None);
    // Two distinct vertices plus explicit closure is still a line
    assert_eq!(
      closed_ring(&[LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0), LatLng::new(1.0, 1.0)]),
      None
    );
  }

  #[test]
  fn test_non_finite_rejected() {
    let mut verts = square();
    verts[2].lat = f64::NAN;
    assert_eq!(closed_ring(&verts), None);
  }
}
