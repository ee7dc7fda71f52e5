use super::{Position3, Vector3};

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Position3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. The direction is expected to be already normalized.
    pub fn new(origin: Position3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn along(&self, t: f64) -> Position3 {
        self.origin + self.direction * t
    }

    /// Reflect this ray off of a position and a normal.
    pub fn reflect(&self, pos: Position3, normal: Vector3) -> Ray {
        Ray::new(pos, self.direction.reflect(normal))
    }
}
