mod sun;

pub use sun::*;

/// The result of a light's influence on a ray intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightShading {
    pub diffuse: f64,
    pub specular: f64,
}

impl LightShading {
    pub fn new(diffuse: f64, specular: f64) -> Self {
        Self { diffuse, specular }
    }
}
