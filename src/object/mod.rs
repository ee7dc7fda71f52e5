mod plane;
mod sphere;

use crate::math::{Position3, Ray};

pub use plane::*;
pub use sphere::*;

/// A ray striking a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// The distance along the ray to the intersection. May be negative.
    pub distance: f64,

    /// Whether the ray travels along the surface normal. Always true for spheres.
    pub front_facing: bool,
}

impl Hit {
    pub fn new(distance: f64, front_facing: bool) -> Self {
        Self {
            distance,
            front_facing,
        }
    }

    pub fn pos(&self, ray: &Ray) -> Position3 {
        ray.along(self.distance)
    }

    /// A hit that faces the ray and lies strictly ahead of its origin.
    pub fn is_forward(&self) -> bool {
        self.front_facing && self.distance > 0.
    }
}

/// The result of a ray intersection test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Hit(Hit),
    Miss,

    /// The test produced no meaningful distance, e.g. a ray parallel to a plane.
    Degenerate,
}

impl Intersection {
    pub fn hit(self) -> Option<Hit> {
        match self {
            Intersection::Hit(hit) => Some(hit),
            Intersection::Miss | Intersection::Degenerate => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Intersection::Hit(_))
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Intersection;
}
