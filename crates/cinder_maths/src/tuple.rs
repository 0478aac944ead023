//! 4-component tuples used as points and vectors.
//!
//! The `w` component carries the distinction: `w = 1` is a point, `w = 0` a
//! direction. Subtracting two points yields a vector; adding a vector to a
//! point yields a point - the arithmetic keeps the discipline for free.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar;

/// A 4-component tuple - position, direction, or raw quadruple.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Tuple {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// W component: 1 for points, 0 for vectors
    pub w: f64,
}

impl Tuple {
    /// The zero tuple.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The point at the origin.
    pub const ORIGIN: Self = Self::point(0.0, 0.0, 0.0);

    /// Creates a tuple with the given components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w = 1`).
    #[must_use]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a point on the `z = 0` plane.
    #[must_use]
    pub const fn point2(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// Creates a vector (`w = 0`).
    #[must_use]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a vector on the `z = 0` plane.
    #[must_use]
    pub const fn vector2(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Returns true if this tuple is a point.
    #[must_use]
    pub fn is_point(self) -> bool {
        scalar::approx_eq(self.w, 1.0)
    }

    /// Returns true if this tuple is a vector.
    #[must_use]
    pub fn is_vector(self) -> bool {
        scalar::approx_eq(self.w, 0.0)
    }

    /// Component-wise epsilon equality, `w` included.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        scalar::approx_eq(self.x, other.x)
            && scalar::approx_eq(self.y, other.y)
            && scalar::approx_eq(self.z, other.z)
            && scalar::approx_eq(self.w, other.w)
    }

    /// Length of a vector.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Compares the magnitudes of two vectors without taking square roots.
    #[must_use]
    pub fn cmp_magnitude(self, other: Self) -> std::cmp::Ordering {
        let a = self.x * self.x + self.y * self.y + self.z * self.z;
        let b = other.x * other.x + other.y * other.y + other.z * other.z;
        scalar::compare(a, b)
    }

    /// Compares this vector's magnitude against a scalar length, again
    /// without the square root.
    #[must_use]
    pub fn cmp_length(self, length: f64) -> std::cmp::Ordering {
        let a = self.x * self.x + self.y * self.y + self.z * self.z;
        scalar::compare(a, length * length)
    }

    /// Unit vector in this vector's direction; the zero vector is returned
    /// unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return self;
        }

        Self::vector(self.x / magnitude, self.y / magnitude, self.z / magnitude)
    }

    /// Dot product of two vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product - a vector at right angles to both inputs.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflects this vector about the given normal.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl std::ops::Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl std::ops::Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl std::ops::Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::ops::Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl std::ops::Div<f64> for Tuple {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}
