mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Clamp a single shading term into the 0-1 range.
///
/// NaN passes through untouched; it is flushed to zero when a color is packed.
pub fn saturate(t: f64) -> f64 {
    t.clamp(0., 1.)
}
