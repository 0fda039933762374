//! Uniform-areal-density sampling inside a disk.
//!
//! Scatter placement draws candidate coordinates from a disk around the
//! world center. Drawing the radius uniformly would crowd candidates toward
//! the center (the area of a thin ring grows with its radius); drawing it
//! as `max_radius * sqrt(U)` compensates, giving every unit of area the
//! same hit probability. The square root lives in its own function because
//! it is the part of the formula that is easy to drop by mistake -- doing so
//! silently biases placement and no test on the caller would notice.

use std::f64::consts::TAU;

use gridlands_types::Coordinate;
use rand::Rng;

/// Radius for a uniform-area sample in a disk of radius `max_radius`,
/// given `unit` uniform in `[0, 1)`.
#[allow(clippy::arithmetic_side_effects)] // pure float math, cannot panic
pub fn disc_radius(max_radius: f64, unit: f64) -> f64 {
    max_radius * unit.sqrt()
}

/// Draw a coordinate uniformly (by area) from the disk of `max_radius`
/// around `center`, rounded to the nearest grid cell.
///
/// The result is not bounds-checked: rounding can land just outside the
/// disk, and the disk itself may extend past the world edge. Callers filter
/// out-of-range samples.
#[allow(clippy::arithmetic_side_effects)] // pure float math, cannot panic
pub fn sample_polar<R: Rng + ?Sized>(
    rng: &mut R,
    center: Coordinate,
    max_radius: f64,
) -> Coordinate {
    let angle = rng.random::<f64>() * TAU;
    let radius = disc_radius(max_radius, rng.random::<f64>());
    Coordinate::new(
        center.x.saturating_add(round_component(radius * angle.cos())),
        center.y.saturating_add(round_component(radius * angle.sin())),
    )
}

/// Round one polar component to the nearest integer offset.
#[allow(clippy::cast_possible_truncation)] // |value| <= max_radius, far below i32 range
fn round_component(value: f64) -> i32 {
    value.round() as i32
}
