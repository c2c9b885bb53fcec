//! Linear algebra type aliases.

use na::{Matrix3, Matrix4 as NaMatrix4, Point3, Rotation3, UnitVector3, Vector3, Vector4 as NaVector4};

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// Below this magnitude a ray direction component is treated as parallel to a slab.
pub const RAY_PARALLEL_EPSILON: Real = 1.0e-6;

/// Below this length a cross-product axis is skipped by the separating axis tests.
pub const SAT_AXIS_EPSILON: Real = 1.0e-6;

/// Extents and half-extents with all components below this magnitude denote an empty box.
pub const EMPTY_EPSILON: Real = 1.0e-6;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The dimension of the space multiplied by two.
pub const TWO_DIM: usize = DIM * 2;

/// The point type.
pub type Point = Point3<Real>;

/// The vector type.
pub type Vector = Vector3<Real>;

/// The homogeneous vector type.
pub type Vector4 = NaVector4<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector3<Real>;

/// The 3x3 matrix type.
pub type Matrix = Matrix3<Real>;

/// The 4x4 homogeneous transformation matrix type.
pub type Matrix4 = NaMatrix4<Real>;

/// The rotation matrix type.
pub type Rotation = Rotation3<Real>;

/// Returns `true` if every component of `v` is within [`EMPTY_EPSILON`] of zero.
#[inline]
pub fn is_nearly_zero(v: &Vector) -> bool {
    v.iter().all(|e| e.abs() <= EMPTY_EPSILON)
}

/// Transforms a point by an affine 4x4 matrix.
///
/// The homogeneous coordinate is dropped, not divided by.
#[inline]
pub fn transform_point(m: &Matrix4, pt: &Point) -> Point {
    Point::from((m * pt.to_homogeneous()).xyz())
}

/// The linear (upper-left 3x3) part of a 4x4 matrix.
#[inline]
pub fn linear_part(m: &Matrix4) -> Matrix {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}
