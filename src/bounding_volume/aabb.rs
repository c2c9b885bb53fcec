//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, Obb};
use crate::math::{is_nearly_zero, Matrix4, Point, Real, UnitVector, Vector, DIM, TWO_DIM};
use crate::query::PointQuery;
use crate::shape::{Plane, Triangle};
use crate::utils;
use na::{self, Unit};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// Its edges are always parallel to the coordinate axes, which makes it very fast to test
/// and compute.
///
/// Besides `mins` and `maxs`, an `Aabb` caches its center, its extents, the center point
/// of each of its six faces and the plane supporting each face. All of them are rebuilt
/// immediately by every mutating method, so the fields are only reachable through
/// accessors.
///
/// Faces are numbered `0: -X`, `1: +X`, `2: -Y`, `3: +Y`, `4: -Z`, `5: +Z`, and every
/// face plane has its normal pointing outward.
///
/// # Empty AABB
///
/// [`Aabb::empty`] (or [`Aabb::clear`]) produces a box of zero extents at the origin.
/// [`Aabb::is_empty`] reports it, and every query accepts it.
///
/// # Example
///
/// ```rust
/// use boundvol3d::bounding_volume::Aabb;
/// use boundvol3d::math::{Point, Vector};
///
/// let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
///
/// assert_eq!(aabb.center(), Point::origin());
/// assert_eq!(aabb.extents(), Vector::new(2.0, 2.0, 2.0));
/// assert_eq!(aabb.face_plane(1).distance(&Point::new(3.0, 0.0, 0.0)), 2.0);
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    mins: Point,
    maxs: Point,
    center: Point,
    extents: Vector,
    face_centers: [Point; TWO_DIM],
    face_planes: [Plane; TWO_DIM],
}

impl Default for Aabb {
    /// The unit box with its minimum corner at the origin.
    fn default() -> Self {
        Aabb::from_corner_extents(Point::origin(), Vector::repeat(1.0))
    }
}

impl Aabb {
    /// The vertex indices of each edge of this `Aabb`.
    ///
    /// This gives, for each edge of this `Aabb`, the indices of its
    /// vertices when taken from the `self.vertices()` array.
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// The outward normal of the `i`-th face.
    ///
    /// Faces are ordered `-X, +X, -Y, +Y, -Z, +Z`.
    #[inline]
    pub fn face_normal(i: usize) -> UnitVector {
        let mut normal = Vector::zeros();
        normal[(i / 2) % DIM] = if i % 2 == 0 { -1.0 } else { 1.0 };
        Unit::new_unchecked(normal)
    }

    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        let mut result = Aabb::empty();
        result.set_mins_maxs(mins, maxs);
        result
    }

    /// Creates a new AABB from its minimum corner and its extents along each axis.
    #[inline]
    pub fn from_corner_extents(corner: Point, extents: Vector) -> Aabb {
        let mut result = Aabb::empty();
        result.set_corner_extents(corner, extents);
        result
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// An empty set of points gives the empty AABB.
    ///
    /// ```rust
    /// use boundvol3d::bounding_volume::Aabb;
    /// use boundvol3d::math::Point;
    ///
    /// let aabb = Aabb::from_points([
    ///     Point::new(1.0, 2.0, 3.0),
    ///     Point::new(-1.0, 4.0, 2.0),
    ///     Point::new(0.0, 0.0, 5.0),
    /// ]);
    ///
    /// assert_eq!(aabb.mins(), Point::new(-1.0, 0.0, 2.0));
    /// assert_eq!(aabb.maxs(), Point::new(1.0, 4.0, 5.0));
    /// ```
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// The empty AABB: zero extents at the origin.
    pub fn empty() -> Self {
        let zero = Point::origin();
        let mut result = Aabb {
            mins: zero,
            maxs: zero,
            center: zero,
            extents: Vector::zeros(),
            face_centers: [zero; TWO_DIM],
            face_planes: [Plane::default(); TWO_DIM],
        };
        result.update();
        result
    }

    /// Sets this AABB from its minimum and maximum corners.
    pub fn set_mins_maxs(&mut self, mins: Point, maxs: Point) {
        self.mins = mins;
        self.maxs = maxs;
        self.extents = maxs - mins;
        self.center = na::center(&mins, &maxs);
        self.update();
    }

    /// Sets this AABB from its minimum corner and its extents along each axis.
    pub fn set_corner_extents(&mut self, corner: Point, extents: Vector) {
        self.mins = corner;
        self.extents = extents;
        self.maxs = corner + extents;
        self.center = na::center(&self.mins, &self.maxs);
        self.update();
    }

    /// Sets this AABB to the tightest box enclosing `pts`, or clears it if `pts` is empty.
    pub fn set_from_points(&mut self, pts: &[Point]) {
        self.set_from_iter(pts.iter().copied());
    }

    /// Sets this AABB to the tightest box enclosing the points of a strided float buffer.
    ///
    /// See [`utils::strided_points`] for the buffer layout. The AABB is cleared if the
    /// buffer holds no point.
    pub fn set_from_strided(&mut self, data: &[Real], count: usize, stride: usize) {
        self.set_from_iter(utils::strided_points(data, count, stride));
    }

    fn set_from_iter(&mut self, pts: impl IntoIterator<Item = Point>) {
        match super::aabb_utils::point_cloud_bounds(pts) {
            Some((mins, maxs)) => self.set_mins_maxs(mins, maxs),
            None => {
                log::debug!("Fitting an AABB on an empty point set; the AABB is cleared.");
                self.clear();
            }
        }
    }

    /// Resets this AABB to the empty AABB.
    pub fn clear(&mut self) {
        *self = Aabb::empty();
    }

    /// Rebuilds the cached face centers and face planes.
    fn update(&mut self) {
        let (mins, maxs, c) = (self.mins, self.maxs, self.center);

        self.face_centers = [
            Point::new(mins.x, c.y, c.z),
            Point::new(maxs.x, c.y, c.z),
            Point::new(c.x, mins.y, c.z),
            Point::new(c.x, maxs.y, c.z),
            Point::new(c.x, c.y, mins.z),
            Point::new(c.x, c.y, maxs.z),
        ];

        for (i, plane) in self.face_planes.iter_mut().enumerate() {
            *plane = Plane::from_point_normal(&self.face_centers[i], Self::face_normal(i));
        }
    }

    /// The point with minimum coordinates.
    #[inline]
    pub fn mins(&self) -> Point {
        self.mins
    }

    /// The point with maximum coordinates.
    #[inline]
    pub fn maxs(&self) -> Point {
        self.maxs
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The full size of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.extents
    }

    /// Half the size of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        self.extents * 0.5
    }

    /// The plane supporting the `i`-th face, with an outward normal.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 6`.
    #[inline]
    pub fn face_plane(&self, i: usize) -> &Plane {
        &self.face_planes[i]
    }

    /// The planes supporting the six faces.
    #[inline]
    pub fn face_planes(&self) -> &[Plane; TWO_DIM] {
        &self.face_planes
    }

    /// The center of the `i`-th face.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 6`.
    #[inline]
    pub fn face_center(&self, i: usize) -> Point {
        self.face_centers[i]
    }

    /// The centers of the six faces.
    #[inline]
    pub fn face_centers(&self) -> &[Point; TWO_DIM] {
        &self.face_centers
    }

    /// Whether this is an empty AABB, i.e., all its extents are nearly zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        is_nearly_zero(&self.extents)
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// The surface area of this AABB.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let e = self.extents;
        2.0 * (e.x * (e.y + e.z) + e.y * e.z)
    }

    /// The corner of this AABB farthest along `normal` (the P-vertex).
    #[inline]
    pub fn positive_vertex(&self, normal: &Vector) -> Point {
        let mut res = self.mins;

        for i in 0..DIM {
            if normal[i] > 0.0 {
                res[i] += self.extents[i];
            }
        }

        res
    }

    /// The corner of this AABB farthest against `normal` (the N-vertex).
    #[inline]
    pub fn negative_vertex(&self, normal: &Vector) -> Point {
        let mut res = self.mins;

        for i in 0..DIM {
            if normal[i] < 0.0 {
                res[i] += self.extents[i];
            }
        }

        res
    }

    /// Computes the vertices of this AABB.
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Checks if this AABB intersects `other` (closed intervals: touching boxes intersect).
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Checks if this AABB fully contains `other`.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Computes the intersection of this AABB and another one.
    ///
    /// Returns `None` if the boxes are disjoint.
    ///
    /// ```rust
    /// use boundvol3d::bounding_volume::Aabb;
    /// use boundvol3d::math::Point;
    ///
    /// let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 2.0, 2.0));
    /// let b = Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(3.0, 3.0, 3.0));
    /// let inter = a.intersection(&b).unwrap();
    ///
    /// assert_eq!(inter.mins(), Point::new(1.0, 1.0, 1.0));
    /// assert_eq!(inter.maxs(), Point::new(2.0, 2.0, 2.0));
    /// ```
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let mins = self.mins.sup(&other.mins);
        let maxs = self.maxs.inf(&other.maxs);

        for i in 0..DIM {
            if mins[i] > maxs[i] {
                return None;
            }
        }

        Some(Aabb::new(mins, maxs))
    }

    /// The distance between this AABB and `other`, zero if they intersect.
    ///
    /// This is the norm of the per-axis gaps between the two boxes.
    pub fn distance(&self, other: &Aabb) -> Real {
        let gaps = (other.mins - self.maxs)
            .sup(&(self.mins - other.maxs))
            .sup(&Vector::zeros());
        gaps.norm()
    }

    /// Enlarges this AABB so it also covers `other`.
    ///
    /// Empty boxes cover nothing: merging an empty box is a no-op, and merging into an
    /// empty box copies `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            *self = *other;
        } else {
            self.set_mins_maxs(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs));
        }
    }

    /// The smallest AABB covering both `self` and `other`. See [`Aabb::merge`].
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        let mut res = *self;
        res.merge(other);
        res
    }

    /// Enlarges this AABB so it contains `pt`.
    #[inline]
    pub fn expand_to_include(&mut self, pt: &Point) {
        self.set_mins_maxs(self.mins.inf(pt), self.maxs.sup(pt));
    }

    /// Checks if this AABB intersects a bounding sphere.
    ///
    /// An empty sphere intersects nothing.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        !sphere.is_empty()
            && self.distance_to_point_squared(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// Checks if this AABB intersects an oriented box.
    ///
    /// This shares the partial separating-axis test of [`Obb::intersects_aabb`].
    #[inline]
    pub fn intersects_obb(&self, obb: &Obb) -> bool {
        obb.intersects_aabb(self)
    }

    /// Checks if any vertex of `triangle` lies inside of this AABB.
    ///
    /// This is not a full triangle-box test: a triangle crossing the box without any of
    /// its vertices inside is reported as not intersecting.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        triangle
            .vertices()
            .iter()
            .any(|pt| self.contains_point(pt))
    }

    /// The AABB of the eight corners of this AABB transformed by `m`.
    ///
    /// This is a valid but not necessarily tight bound of the transformed box. A box with
    /// zero extents stays empty and moves with `m`.
    pub fn transformed(&self, m: &Matrix4) -> Aabb {
        super::aabb_utils::point_cloud_aabb(m, &self.vertices())
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point {
        self.center()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        self.intersects(other)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        self.contains(other)
    }

    #[inline]
    fn distance(&self, other: &Aabb) -> Real {
        self.distance(other)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.merge(other)
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        self.merged(other)
    }

    #[inline]
    fn expand_to_include(&mut self, pt: &Point) {
        self.expand_to_include(pt)
    }

    #[inline]
    fn transformed(&self, m: &Matrix4) -> Aabb {
        self.transformed(m)
    }
}
