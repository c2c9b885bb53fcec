//! An AABB, an OBB and a bounding sphere fitted on the same geometry.

use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::{Matrix4, Point, Real};
use crate::query::{PlaneClassify, PlaneSide, PointQuery, Ray, RayCast};
use crate::shape::Plane;
use crate::utils;

/// The three bounding volumes of one object.
///
/// Each member encloses the whole geometry on its own, so a query rejected by any of them
/// is rejected by the geometry. The pairwise [`BoundingVolumes::intersects`] test relies on
/// this to run the cheap sphere test first, then the AABB test, and the OBB test last.
///
/// The composite is empty only when all three members are empty.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingVolumes {
    /// The axis-aligned box.
    pub aabb: Aabb,
    /// The oriented box.
    pub obb: Obb,
    /// The bounding sphere.
    pub bsphere: BoundingSphere,
}

impl Default for BoundingVolumes {
    /// The volumes of the default unit AABB.
    fn default() -> Self {
        BoundingVolumes::from_aabb(&Aabb::default())
    }
}

impl BoundingVolumes {
    /// Creates a composite where every member is empty.
    pub fn empty() -> Self {
        BoundingVolumes {
            aabb: Aabb::empty(),
            obb: Obb::empty(),
            bsphere: BoundingSphere::empty(),
        }
    }

    /// Creates a composite from an AABB. See [`BoundingVolumes::set_from_aabb`].
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let mut result = BoundingVolumes::empty();
        result.set_from_aabb(aabb);
        result
    }

    /// Empties every member.
    pub fn clear(&mut self) {
        *self = BoundingVolumes::empty();
    }

    /// Whether all three members are empty.
    pub fn is_empty(&self) -> bool {
        self.aabb.is_empty() && self.obb.is_empty() && self.bsphere.is_empty()
    }

    /// Sets the AABB, its axis-aligned OBB and the sphere through its corners.
    pub fn set_from_aabb(&mut self, aabb: &Aabb) {
        self.aabb = *aabb;
        self.obb = aabb.to_obb();
        self.bsphere = aabb.bounding_sphere();
    }

    /// Sets the volumes from the corners of an AABB.
    pub fn set_from_mins_maxs(&mut self, mins: Point, maxs: Point) {
        self.set_from_aabb(&Aabb::new(mins, maxs));
    }

    /// Fits the three members independently on `pts`.
    ///
    /// Returns `false` and clears the volumes if `pts` is empty.
    pub fn set_from_points(&mut self, pts: &[Point]) -> bool {
        if pts.is_empty() {
            self.clear();
            return false;
        }

        self.aabb.set_from_points(pts);
        self.obb.set_from_points(pts);
        self.bsphere.set_from_points(pts);
        true
    }

    /// Fits the three members on the points of a strided float buffer.
    ///
    /// See [`utils::strided_points`] for the buffer layout. Returns `false` and clears
    /// the volumes if the buffer holds no point.
    pub fn set_from_strided(&mut self, data: &[Real], count: usize, stride: usize) -> bool {
        let pts = utils::collect_strided_points(data, count, stride);
        self.set_from_points(&pts)
    }

    /// Whether `pt` lies inside of any member.
    pub fn contains_point(&self, pt: &Point) -> bool {
        self.aabb.contains_point(pt) || self.obb.contains_point(pt) || self.bsphere.contains_point(pt)
    }

    /// The point of the bounding sphere closest to `pt`.
    pub fn project_point(&self, pt: &Point) -> Point {
        self.bsphere.closest_point(pt)
    }

    /// The distance from `pt` to the AABB.
    pub fn distance_to_point(&self, pt: &Point) -> Real {
        self.aabb.distance_to_point(pt)
    }

    /// Sphere-only intersection test.
    #[inline]
    pub fn intersects_fast(&self, other: &BoundingVolumes) -> bool {
        self.bsphere.intersects(&other.bsphere)
    }

    /// AABB-only intersection test.
    #[inline]
    pub fn intersects_aabb(&self, other: &BoundingVolumes) -> bool {
        self.aabb.intersects(&other.aabb)
    }

    /// OBB-only intersection test.
    #[inline]
    pub fn intersects_obb(&self, other: &BoundingVolumes) -> bool {
        self.obb.intersects(&other.obb)
    }

    /// Tests the spheres, then the AABBs, then the OBBs, stopping at the first rejection.
    ///
    /// This is exactly the conjunction of the three tests.
    pub fn intersects(&self, other: &BoundingVolumes) -> bool {
        self.intersects_fast(other) && self.intersects_aabb(other) && self.intersects_obb(other)
    }

    /// Whether both the AABB and the sphere of `self` contain those of `other`.
    pub fn contains(&self, other: &BoundingVolumes) -> bool {
        self.aabb.contains(&other.aabb) && self.bsphere.contains(&other.bsphere)
    }

    /// Merges each member with its counterpart in `other`.
    pub fn merge(&mut self, other: &BoundingVolumes) {
        self.aabb.merge(&other.aabb);
        self.obb.merge(&other.obb);
        self.bsphere.merge(&other.bsphere);
    }

    /// Sphere-only ray test.
    #[inline]
    pub fn intersects_ray_fast(&self, ray: &Ray) -> bool {
        self.bsphere.intersects_ray(ray)
    }

    /// The distance along `ray` to the AABB, if the ray also hits the sphere.
    pub fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        if !self.intersects_ray_fast(ray) {
            return None;
        }

        self.aabb.cast_ray(ray)
    }

    /// Whether `ray` hits both the sphere and the AABB.
    #[inline]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }

    /// The side of `plane` the AABB lies on.
    #[inline]
    pub fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        self.aabb.classify_plane(plane)
    }

    /// Whether `plane` crosses the AABB or the sphere.
    #[inline]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        self.aabb.intersects_plane(plane) || self.bsphere.intersects_plane(plane)
    }

    /// Enlarges every member so it contains `pt`.
    pub fn expand_to_include(&mut self, pt: &Point) {
        self.aabb.expand_to_include(pt);
        self.obb.expand_to_include(pt);
        self.bsphere.expand_to_include(pt);
    }

    /// The radius of the bounding sphere.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.bsphere.radius
    }

    /// The center of the AABB.
    #[inline]
    pub fn center(&self) -> Point {
        self.aabb.center()
    }

    /// Transforms each member by the affine matrix `m`.
    pub fn transformed(&self, m: &Matrix4) -> BoundingVolumes {
        BoundingVolumes {
            aabb: self.aabb.transformed(m),
            obb: self.obb.transformed(m),
            bsphere: self.bsphere.transformed(m),
        }
    }
}
