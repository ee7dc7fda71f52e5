use crate::math::{saturate, Position3, Ray, Vector3};

use super::LightShading;

/// A sun light, which has no position, just a vector direction that is
/// true for all points in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Sun {
    /// The direction the light travels in. Expected to be normalized.
    pub vector: Vector3,

    /// The power at which specular lighting will be raised to.
    pub specular_power: i32,

    /// The strength at which specular lighting will be applied.
    pub specular_strength: f64,

    /// Subtracted from a floor color that lies in shadow.
    pub shadow_tint: Vector3,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            vector: Vector3::new(-1., -1., 1.).normalize(),
            specular_power: 20,
            specular_strength: 1.,
            shadow_tint: Vector3::new(0., 0.2, 0.2),
        }
    }
}

impl Sun {
    /// Diffuse and specular terms for a ray striking a surface with `normal`.
    ///
    /// The specular base is not clamped before exponentiation; the packed
    /// color clamp catches whatever comes out.
    pub fn shading(&self, ray: &Ray, normal: Vector3) -> LightShading {
        let diffuse = saturate(self.vector.dot(normal));

        let specular = if diffuse > 0. {
            let reflected = self.vector.reflect(normal).normalize();
            self.specular_strength * reflected.dot(-ray.direction).powi(self.specular_power)
        } else {
            0.
        };

        LightShading::new(diffuse, specular)
    }

    /// The ray cast from a surface point back along the light direction.
    pub fn shadow_ray(&self, pos: Position3) -> Ray {
        Ray::new(pos, -self.vector)
    }

    /// Darken a color that lies in this light's shadow.
    pub fn darken(&self, color: Vector3) -> Vector3 {
        color - self.shadow_tint
    }
}
