use crate::math::{saturate, Position3, Vector3};

/// A 24-bit color, RGB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn magenta() -> Self {
        Self::new(255, 0, 255)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s, expected to be in the range 0-1.
    ///
    /// Out of range components are clamped, NaN becomes 0.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (saturate(r) * 255.0) as u8,
            g: (saturate(g) * 255.0) as u8,
            b: (saturate(b) * 255.0) as u8,
        }
    }

    /// Unpack a `0xRRGGBB` integer.
    pub fn from_packed(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Pack into a `0xRRGGBB` integer, the layout pixel sinks consume.
    pub fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// Clamp every component of a color vector into 0-1.
pub fn clamp_color(v: Vector3) -> Vector3 {
    Vector3::new(saturate(v.x), saturate(v.y), saturate(v.z))
}

/// A surface texture, evaluated at a world-space position.
#[derive(Clone, Debug, PartialEq)]
pub enum Texture {
    /// A texture that is just a solid color.
    Solid(Vector3),

    /// Square cells on the XZ plane alternating between two colors.
    Checkerboard {
        odd: Vector3,
        even: Vector3,
        cell_size: f64,
    },
}

impl Texture {
    /// The floor checker: green and dark gray tiles, 80 units wide.
    pub fn floor() -> Self {
        Self::Checkerboard {
            odd: Vector3::new(0., 0.7, 0.3),
            even: Vector3::new(0.2, 0.2, 0.2),
            cell_size: 80.,
        }
    }

    pub fn at(&self, pos: Position3) -> Vector3 {
        match *self {
            Self::Solid(color) => color,
            Self::Checkerboard {
                odd,
                even,
                cell_size,
            } => {
                // cell indices truncate toward zero, so the negative
                // half-planes need a one cell shift to keep alternating
                let shift = (pos.x < 0.) as i64 + (pos.z < 0.) as i64;
                let cx = (pos.x / cell_size) as i64;
                let cz = (pos.z / cell_size) as i64;
                if (cx + cz + shift) % 2 != 0 {
                    odd
                } else {
                    even
                }
            }
        }
    }
}
