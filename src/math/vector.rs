use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A vector in 3D space. Also used for RGB colors in the 0-1 range.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point in 3D space. Shares all of its arithmetic with `Vector3`.
pub type Position3 = Vector3;

impl Vector3 {
    /// Instantiate a new Vector3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A Vector3 with every component set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub const fn up() -> Self {
        Self::new(0., 1., 0.)
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    ///
    /// **Note:** the zero vector has no direction; normalizing it yields NaN
    /// components. Use `try_normalize` where the input may be zero.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Normalize this Vector3, or `None` if it has no usable length.
    pub fn try_normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > 0. && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Reflect this vector about `normal`. The normal is expected to be normalized.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * 2. * self.dot(normal)
    }

    /// Whether every component is a finite number.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: Vector3, b: Vector3) -> bool {
        (a - b).magnitude() < EPS
    }

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1., 2., 3.);
        let b = Vector3::new(-4., 0.5, 2.);
        assert_eq!(a + b, Vector3::new(-3., 2.5, 5.));
        assert_eq!(a - b, Vector3::new(5., 1.5, 1.));
        assert_eq!(-a, Vector3::new(-1., -2., -3.));
        assert_eq!(a * 2., Vector3::new(2., 4., 6.));
        assert_eq!(a * b, Vector3::new(-4., 1., 6.));
        assert_eq!(a.dot(b), -4. + 1. + 6.);

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vector3::new(3., 0., 4.);
        assert_eq!(v.magnitude(), 5.);
        assert!(approx(v.normalize(), Vector3::new(0.6, 0., 0.8)));
        assert!((v.normalize().magnitude() - 1.).abs() < EPS);
    }

    #[test]
    fn zero_vector_is_guarded() {
        assert_eq!(Vector3::default().try_normalize(), None);
        assert!(!Vector3::default().normalize().is_finite());
        assert!(Vector3::new(0., 2., 0.).try_normalize().is_some());
    }

    #[test]
    fn reflection_flips_normal_component() {
        let normals = [
            Vector3::up(),
            Vector3::new(1., 1., 0.).normalize(),
            Vector3::new(-0.3, 0.2, 0.9).normalize(),
        ];
        let v = Vector3::new(0.4, -1.3, 2.2);
        for n in normals {
            let r = v.reflect(n);
            assert!((r.dot(n) + v.dot(n)).abs() < EPS);
            // the tangential part survives unchanged
            assert!(approx(r - n * r.dot(n), v - n * v.dot(n)));
            assert!(approx(r.reflect(n), v));
        }
    }
}
