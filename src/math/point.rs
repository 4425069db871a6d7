use std::fmt;
use std::ops::{Add, AddAssign, Deref, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;

use super::EPSILON;
use crate::error::{GeometryError, Result};

/// A point or free vector in 3D space, backed by [`nalgebra::Vector3`].
///
/// Points and vectors share one representation. Components are read through
/// `Deref`, so `p.x`, `p.y` and `p.z` work as on the inner vector. Equality
/// through `==` is exact; use [`Point::approx_eq`] or the `approx` traits for
/// tolerant checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Vector3<f64>);

/// Vector alias for [`Point`], used where a value is a direction or offset.
pub type Vector = Point;

impl Point {
    /// Creates a new point from its three components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Creates a point in the XY plane (`z = 0`).
    #[must_use]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The origin `(0, 0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self(Vector3::zeros())
    }

    /// Borrows the underlying nalgebra vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Divides every component by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero.into());
        }
        Ok(Self(self.0 / divisor))
    }

    /// Euclidean length, computed with `hypot` to avoid intermediate overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the magnitude is below [`EPSILON`].
    pub fn normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude < EPSILON {
            return Err(GeometryError::ZeroVector { magnitude }.into());
        }
        Ok(Self(self.0 / magnitude))
    }

    /// Dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product with `other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    /// Linear interpolation towards `other`. `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }

    /// Component-wise comparison with an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.0 - other.0).amax() < epsilon
    }
}

/// Standard 3D dot product.
#[must_use]
pub fn dot_product(a: &Point, b: &Point) -> f64 {
    a.dot(b)
}

/// Standard 3D cross product `a × b`.
#[must_use]
pub fn cross_product(a: &Point, b: &Point) -> Point {
    a.cross(b)
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl Deref for Point {
    type Target = Vector3<f64>;

    fn deref(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point(rhs.0 * self)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(
                f,
                "Point({:.*}, {:.*}, {:.*})",
                prec, self.x, prec, self.y, prec, self.z
            ),
            None => write!(f, "Point({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
