use crate::math::{Position3, Ray, Vector3};

use super::{Hit, Intersect, Intersection};

/// A sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// The center of the sphere. Moves between frames.
    pub origin: Position3,
    pub radius: f64,

    /// Base color, each component in 0-1.
    pub albedo: Vector3,
}

impl Sphere {
    pub fn new(origin: Position3, radius: f64, albedo: Vector3) -> Self {
        Self {
            origin,
            radius,
            albedo,
        }
    }

    /// The outward unit normal at a point on the surface.
    pub fn normal_at(&self, pos: Position3) -> Vector3 {
        (pos - self.origin).normalize()
    }
}

impl Intersect for Sphere {
    /// Only the near intersection is reported. A ray starting inside the
    /// sphere, or pointing away from it, gets a negative distance rather
    /// than a miss.
    fn intersect(&self, ray: &Ray) -> Intersection {
        let to_center = self.origin - ray.origin;
        let projected = ray.direction * ray.direction.dot(to_center);
        let perpendicular = (to_center - projected).magnitude();

        if perpendicular > self.radius {
            return Intersection::Miss;
        }

        let half_chord = (self.radius.powi(2) - perpendicular.powi(2)).sqrt();
        let distance = projected.magnitude() - half_chord;
        if distance.is_nan() {
            return Intersection::Degenerate;
        }

        Intersection::Hit(Hit::new(distance, true))
    }
}
