use crate::{
    material::Texture,
    math::{Position3, Ray, Vector3},
};

use super::{Hit, Intersect, Intersection};

/// An infinite plane described by a unit normal and a signed offset.
///
/// Hits are placed at `(origin . normal - offset) / (dir . normal)` along the
/// ray, so a hit point satisfies `p . normal == 2 * (origin . normal) - offset`
/// rather than `p . normal == offset`. From the eye at y = 0 the floor with
/// offset -300 and an up normal is struck at y = +300.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: Vector3,

    /// The signed offset of the plane along its normal.
    pub offset: f64,

    /// The plane's surface texture.
    pub texture: Texture,
}

impl Plane {
    pub fn new(normal: Vector3, offset: f64, texture: Texture) -> Self {
        Self {
            normal,
            offset,
            texture,
        }
    }

    /// The same plane moved to a new offset.
    pub fn with_offset(&self, offset: f64) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    pub fn color_at(&self, pos: Position3) -> Vector3 {
        self.texture.at(pos)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vector3::up(),
            offset: 0.,
            texture: Texture::floor(),
        }
    }
}

impl Intersect for Plane {
    /// The distance is `(origin . n - offset) / (dir . n)`, reported whichever
    /// way the ray faces. Callers keep only `Hit::is_forward` hits.
    fn intersect(&self, ray: &Ray) -> Intersection {
        let denom = ray.direction.dot(self.normal);
        let distance = (ray.origin.dot(self.normal) - self.offset) / denom;
        if !distance.is_finite() {
            return Intersection::Degenerate;
        }

        Intersection::Hit(Hit::new(distance, denom > 0.))
    }
}
