use crate::{material::Color, math::Ray};

/// Any type that can be used as a background for a scene.
pub trait Skybox: Send + Sync {
    /// The color of a pixel whose primary ray struck nothing.
    fn pixel_color(&self, x: i32, y: i32, ray: &Ray) -> Color;
}

/// A solid color skybox.
#[derive(Debug, Clone)]
pub struct Solid(pub Color);

impl Skybox for Solid {
    fn pixel_color(&self, _: i32, _: i32, _: &Ray) -> Color {
        self.0
    }
}

/// A screen-space pattern of concentric bands, dithered on alternating pixels.
#[derive(Debug, Clone)]
pub struct Checker {
    pub on: Color,
    pub off: Color,

    /// Divisor for the squared pixel coordinates; bigger means wider bands.
    pub stride: i32,
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            on: Color::from_packed(0x00a1e3),
            off: Color::black(),
            stride: 60,
        }
    }
}

impl Skybox for Checker {
    fn pixel_color(&self, x: i32, y: i32, _: &Ray) -> Color {
        let band = (x * x / self.stride + y * y / self.stride) % 2;
        if band & ((x + y) % 2) != 0 {
            self.on
        } else {
            self.off
        }
    }
}
