//! Oriented plane bounding a half-space.

use crate::math::{Point, Real, UnitVector, Vector, Vector4};
use na::Unit;

/// A plane with a unit normal, splitting space into a front and a back half-space.
///
/// The signed distance of a point `p` to the plane is `normal · p + bias`. Points with a
/// positive distance lie in front of the plane (on the side the normal points to).
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's outward normal.
    pub normal: UnitVector,
    /// The signed offset of the plane along its normal, negated.
    pub bias: Real,
}

impl Default for Plane {
    fn default() -> Self {
        Plane::new(Vector::z_axis(), 0.0)
    }
}

impl Plane {
    /// Builds a new plane from its unit normal and bias.
    #[inline]
    pub fn new(normal: UnitVector, bias: Real) -> Plane {
        Plane { normal, bias }
    }

    /// Builds the plane passing through `point` with the given normal.
    #[inline]
    pub fn from_point_normal(point: &Point, normal: UnitVector) -> Plane {
        let bias = -normal.dot(&point.coords);
        Plane { normal, bias }
    }

    /// Builds a plane from the coefficients `(a, b, c, d)` of `a·x + b·y + c·z + d = 0`.
    ///
    /// The coefficients are rescaled so the normal becomes unit length. Returns `None`
    /// if `(a, b, c)` is too close to zero to be normalized.
    pub fn from_coefficients(coeffs: &Vector4) -> Option<Plane> {
        let (normal, length) =
            Unit::try_new_and_get(coeffs.xyz(), crate::math::DEFAULT_EPSILON)?;
        Some(Plane::new(normal, coeffs.w / length))
    }

    /// A plane that every finite point lies in front of.
    ///
    /// Used as a stand-in when a plane cannot be derived from degenerate input.
    #[inline]
    pub fn everything_in_front() -> Plane {
        Plane::new(Vector::z_axis(), Real::MAX)
    }

    /// The signed distance from `point` to this plane.
    #[inline]
    pub fn distance(&self, point: &Point) -> Real {
        self.normal.dot(&point.coords) + self.bias
    }

    /// The orthogonal projection of `point` onto this plane.
    #[inline]
    pub fn project_point(&self, point: &Point) -> Point {
        point - *self.normal * self.distance(point)
    }

    /// The plane coefficients `(a, b, c, d)`.
    #[inline]
    pub fn coefficients(&self) -> Vector4 {
        Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.bias)
    }

    /// The same plane with its orientation reversed.
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.bias)
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector, Vector4};
    use crate::shape::Plane;

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane::from_point_normal(&Point::new(0.0, 2.0, 0.0), Vector::y_axis());
        assert_relative_eq!(plane.distance(&Point::new(5.0, 3.0, -1.0)), 1.0);
        assert_relative_eq!(plane.distance(&Point::new(0.0, 0.0, 0.0)), -2.0);
        assert_relative_eq!(plane.flipped().distance(&Point::origin()), 2.0);
    }

    #[test]
    fn coefficients_are_normalized() {
        let plane = Plane::from_coefficients(&Vector4::new(0.0, 0.0, 2.0, -4.0)).unwrap();
        assert_relative_eq!(*plane.normal, Vector::z());
        assert_relative_eq!(plane.bias, -2.0);
        assert!(Plane::from_coefficients(&Vector4::new(0.0, 0.0, 0.0, 1.0)).is_none());
    }
}
