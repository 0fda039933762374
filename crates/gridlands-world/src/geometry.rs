//! Euclidean geometry over grid coordinates.
//!
//! Distances are real-valued even though coordinates are integers: zone
//! classification and hub-clearance checks compare against fractional
//! thresholds, and rounding here would shift the zone boundaries.

use gridlands_types::Coordinate;

/// Euclidean distance between two coordinates.
#[allow(clippy::arithmetic_side_effects)] // pure float math, cannot panic
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    dx.hypot(dy)
}

/// The hub closest to `point`, by linear scan.
///
/// Ties keep the first-seen hub: a later hub replaces the current best only
/// when strictly closer. Returns `None` for an empty hub list.
pub fn nearest_hub(point: Coordinate, hubs: &[Coordinate]) -> Option<Coordinate> {
    let mut best: Option<(Coordinate, f64)> = None;
    for &hub in hubs {
        let d = distance(point, hub);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((hub, d)),
        }
    }
    best.map(|(hub, _)| hub)
}

/// Whether any anchor lies strictly closer than `min_distance` to `point`.
///
/// An anchor at exactly `min_distance` does not count as near.
pub fn is_near_any(point: Coordinate, anchors: &[Coordinate], min_distance: f64) -> bool {
    anchors
        .iter()
        .any(|&anchor| distance(point, anchor) < min_distance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let origin = Coordinate::new(0, 0);
        assert!((distance(origin, Coordinate::new(3, 4)) - 5.0).abs() < 1e-9);
        assert!((distance(origin, Coordinate::new(-3, -4)) - 5.0).abs() < 1e-9);
        assert!(distance(origin, origin).abs() < 1e-9);
    }

    #[test]
    fn nearest_hub_picks_closest() {
        let hubs = [
            Coordinate::new(10, 0),
            Coordinate::new(2, 2),
            Coordinate::new(-20, 5),
        ];
        assert_eq!(
            nearest_hub(Coordinate::new(1, 1), &hubs),
            Some(Coordinate::new(2, 2))
        );
    }

    #[test]
    fn nearest_hub_tie_keeps_first_seen() {
        // Both hubs are distance 5 from the origin.
        let hubs = [Coordinate::new(3, 4), Coordinate::new(4, 3)];
        assert_eq!(
            nearest_hub(Coordinate::new(0, 0), &hubs),
            Some(Coordinate::new(3, 4))
        );
    }

    #[test]
    fn nearest_hub_empty_list() {
        assert_eq!(nearest_hub(Coordinate::new(0, 0), &[]), None);
    }

    #[test]
    fn near_check_is_strict() {
        let anchors = [Coordinate::new(3, 4)];
        let origin = Coordinate::new(0, 0);
        // Exactly at distance 5: not near for min_distance 5.
        assert!(!is_near_any(origin, &anchors, 5.0));
        assert!(is_near_any(origin, &anchors, 5.1));
        assert!(!is_near_any(origin, &[], 100.0));
    }
}
