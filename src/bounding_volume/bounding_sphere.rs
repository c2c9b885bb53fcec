//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{linear_part, transform_point, Matrix4, Point, Real};
use crate::utils;
use core::f32::consts::PI;
use na;
use num::Zero;

/// A Bounding Sphere.
///
/// A negative radius marks the empty sphere. A sphere of radius zero is a valid sphere
/// reduced to its center point.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point,
    /// The sphere radius, negative for the empty sphere.
    pub radius: Real,
}

impl Default for BoundingSphere {
    /// The unit sphere centered at the origin.
    fn default() -> Self {
        BoundingSphere::new(Point::origin(), 1.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The empty bounding sphere.
    pub fn empty() -> BoundingSphere {
        BoundingSphere::new(Point::origin(), -1.0)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The radius, or zero for the empty sphere.
    #[inline]
    fn effective_radius(&self) -> Real {
        self.radius.max(0.0)
    }

    /// Whether this is the empty sphere.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius < 0.0
    }

    /// Sets the center and radius of this sphere.
    #[inline]
    pub fn set(&mut self, center: Point, radius: Real) {
        self.center = center;
        self.radius = radius;
    }

    /// Turns this sphere into the empty sphere.
    #[inline]
    pub fn clear(&mut self) {
        *self = BoundingSphere::empty();
    }

    /// Fits this sphere on a set of points: centered on their centroid, with a radius
    /// reaching the farthest point.
    ///
    /// The sphere is cleared if `pts` is empty.
    pub fn set_from_points(&mut self, pts: &[Point]) {
        match super::bounding_sphere_utils::point_cloud_bounding_sphere(pts) {
            Some((center, radius)) => self.set(center, radius),
            None => {
                log::debug!("Fitting a bounding sphere on an empty point set; the sphere is cleared.");
                self.clear();
            }
        }
    }

    /// Fits this sphere on the points of a strided float buffer.
    ///
    /// See [`utils::strided_points`] for the buffer layout.
    pub fn set_from_strided(&mut self, data: &[Real], count: usize, stride: usize) {
        let pts = utils::collect_strided_points(data, count, stride);
        self.set_from_points(&pts);
    }

    /// The volume of this sphere, zero if it is empty.
    #[inline]
    pub fn volume(&self) -> Real {
        let r = self.effective_radius();
        PI * r * r * r * 4.0 / 3.0
    }

    /// The surface area of this sphere, zero if it is empty.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let r = self.effective_radius();
        4.0 * PI * r * r
    }

    /// Checks if this sphere intersects `other`. Touching spheres intersect.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    /// Checks if this sphere fully contains `other`.
    #[inline]
    pub fn contains(&self, other: &BoundingSphere) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let distance = na::distance(&self.center, &other.center);
        distance + other.radius <= self.radius
    }

    /// The distance between the surfaces of the two spheres, zero if they intersect.
    #[inline]
    pub fn distance(&self, other: &BoundingSphere) -> Real {
        let distance = na::distance(&self.center, &other.center);
        (distance - self.effective_radius() - other.effective_radius()).max(0.0)
    }

    /// Replaces this sphere with the smallest sphere enclosing both `self` and `other`.
    pub fn merge(&mut self, other: &BoundingSphere) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            *self = *other;
            return;
        }

        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm + other.radius <= self.radius {
            return;
        }

        if norm + self.radius <= other.radius || norm.is_zero() {
            *self = *other;
            return;
        }

        let radius = (norm + self.radius + other.radius) * 0.5;
        self.center += dir * (radius - self.radius);
        self.radius = radius;
    }

    /// The smallest sphere enclosing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    /// Grows the radius of this sphere until it contains `pt`.
    ///
    /// The center never moves, except for the empty sphere which becomes a point sphere
    /// at `pt`.
    #[inline]
    pub fn expand_to_include(&mut self, pt: &Point) {
        if self.is_empty() {
            self.set(*pt, 0.0);
        } else {
            self.radius = self.radius.max(na::distance(&self.center, pt));
        }
    }

    /// Transforms this bounding sphere by the affine matrix `m`.
    ///
    /// The radius is scaled by the largest scaling factor of the linear part of `m`, so the
    /// result still encloses the transformed sphere under non-uniform scaling. The empty
    /// sphere is returned unchanged.
    pub fn transformed(&self, m: &Matrix4) -> BoundingSphere {
        if self.is_empty() {
            return *self;
        }

        let linear = linear_part(m);
        let scale = linear
            .column_iter()
            .map(|c| c.norm())
            .fold(0.0, Real::max);

        BoundingSphere::new(transform_point(m, &self.center), self.radius * scale)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point {
        *self.center()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        self.intersects(other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        self.contains(other)
    }

    #[inline]
    fn distance(&self, other: &BoundingSphere) -> Real {
        self.distance(other)
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        self.merge(other)
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        self.merged(other)
    }

    #[inline]
    fn expand_to_include(&mut self, pt: &Point) {
        self.expand_to_include(pt)
    }

    #[inline]
    fn transformed(&self, m: &Matrix4) -> BoundingSphere {
        self.transformed(m)
    }
}
