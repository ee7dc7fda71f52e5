use crate::math::{Position3, Ray, Vector3};

/// A Camera object. A pinhole eye looking through a screen that lies on the
/// z = 0 plane, one world unit per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub vw: i32,
    pub vh: i32,
    pub origin: Position3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            vw: 640,
            vh: 480,
            origin: Vector3::new(0., 0., 300.),
        }
    }
}

impl Camera {
    /// The world-space point of a pixel, centered on the viewport.
    pub fn screen_point(&self, x: i32, y: i32) -> Position3 {
        Vector3::new((x - self.vw / 2) as f64, (y - self.vh / 2) as f64, 0.)
    }

    /// Calculate the Vector3 direction for a given screen point.
    pub fn direction_at(&self, x: i32, y: i32) -> Vector3 {
        (self.screen_point(x, y) - self.origin).normalize()
    }

    /// The primary ray through a pixel.
    pub fn ray_at(&self, x: i32, y: i32) -> Ray {
        Ray::new(self.origin, self.direction_at(x, y))
    }

    /// The number of pixels in the viewport.
    pub fn pixel_count(&self) -> usize {
        (self.vw.max(0) as usize) * (self.vh.max(0) as usize)
    }
}
