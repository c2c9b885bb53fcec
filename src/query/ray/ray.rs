//! Traits and structure needed to cast rays.

use crate::math::{linear_part, transform_point, Matrix4, Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at `origin` and extending along `dir`. The
/// direction does not need to be normalized: parameters returned by the ray casts are
/// expressed in multiples of `dir`, so they are distances only for a unit direction.
///
/// # Example
///
/// ```rust
/// use boundvol3d::bounding_volume::Aabb;
/// use boundvol3d::math::{Point, Vector};
/// use boundvol3d::query::{Ray, RayCast};
///
/// let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
/// let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), Vector::x());
///
/// let t = aabb.cast_ray(&ray).unwrap();
/// assert_eq!(t, 4.0);
/// assert_eq!(ray.point_at(t), Point::new(-1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point,
    /// Direction vector of the ray.
    pub dir: Vector,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point, dir: Vector) -> Ray {
        Ray { origin, dir }
    }

    /// The ray with its origin translated by `v`.
    #[inline]
    pub fn translate_by(&self, v: Vector) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Transforms this ray by the affine matrix `m`.
    #[inline]
    pub fn transformed(&self, m: &Matrix4) -> Self {
        Self::new(transform_point(m, &self.origin), linear_part(m) * self.dir)
    }

    /// Computes the point at the given parameter along the ray, i.e., `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point {
        self.origin + self.dir * t
    }
}

/// Traits of objects which can be tested for intersection with a ray.
///
/// Volumes are solid: a ray starting inside of a volume hits it at `t = 0`.
pub trait RayCast {
    /// Computes the parameters `(t_min, t_max)` where the ray enters and leaves `self`.
    ///
    /// The interval is clipped to `t ≥ 0`, so `t_min` is zero when the origin lies inside.
    /// Returns `None` if the ray misses.
    fn clip_ray(&self, ray: &Ray) -> Option<(Real, Real)>;

    /// Computes the parameter of the first point of `self` hit by the ray.
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        self.clip_ray(ray)
            .map(|(t_min, t_max)| if t_min >= 0.0 { t_min } else { t_max })
    }

    /// Tests whether the ray hits `self`.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.clip_ray(ray).is_some()
    }
}
