//! Oriented Bounding Box.

use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, ObbFitSteps};
use crate::math::{
    is_nearly_zero, linear_part, transform_point, Matrix, Matrix4, Point, Real, Vector, DIM,
    TWO_DIM,
};
use crate::query::{sat, PointQuery};
use crate::shape::{Plane, Triangle};
use crate::utils;
use na::Unit;

/// An Oriented Bounding Box (OBB).
///
/// A box of arbitrary orientation, described by its center, three orthonormal axes and
/// its half-extent along each axis. Like [`Aabb`], it caches the planes of its six faces,
/// ordered `+axis0, -axis0, +axis1, -axis1, +axis2, -axis2`, with outward normals. The
/// planes are rebuilt by every mutating method.
///
/// An OBB whose half-extents are all nearly zero is empty.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Obb {
    center: Point,
    axes: [Vector; DIM],
    half_extents: Vector,
    face_planes: [Plane; TWO_DIM],
}

impl Default for Obb {
    /// The axis-aligned cube of half-extent 1 centered at the origin.
    fn default() -> Self {
        Obb::new(Point::origin(), Vector::repeat(1.0))
    }
}

impl Obb {
    /// Creates an axis-aligned OBB from its center and half-extents.
    #[inline]
    pub fn new(center: Point, half_extents: Vector) -> Obb {
        Obb::with_axes(center, Self::identity_axes(), half_extents)
    }

    /// Creates an OBB from its center, its three orthonormal axes and its half-extents.
    #[inline]
    pub fn with_axes(center: Point, axes: [Vector; DIM], half_extents: Vector) -> Obb {
        let mut result = Obb {
            center,
            axes,
            half_extents,
            face_planes: [Plane::default(); TWO_DIM],
        };
        result.update();
        result
    }

    /// The empty OBB: zero half-extents at the origin.
    #[inline]
    pub fn empty() -> Obb {
        Obb::new(Point::origin(), Vector::zeros())
    }

    fn identity_axes() -> [Vector; DIM] {
        [Vector::x(), Vector::y(), Vector::z()]
    }

    /// Sets the center and half-extents of this OBB and resets its axes to the world axes.
    pub fn set(&mut self, center: Point, half_extents: Vector) {
        self.set_with_axes(center, Self::identity_axes(), half_extents);
    }

    /// Sets the center, the orthonormal axes and the half-extents of this OBB.
    pub fn set_with_axes(&mut self, center: Point, axes: [Vector; DIM], half_extents: Vector) {
        self.center = center;
        self.axes = axes;
        self.half_extents = half_extents;
        self.update();
    }

    /// Resets this OBB to the empty OBB.
    pub fn clear(&mut self) {
        *self = Obb::empty();
    }

    /// Fits a minimum-volume OBB on `pts` with the default search steps.
    ///
    /// See [`Obb::set_from_points_with`].
    pub fn set_from_points(&mut self, pts: &[Point]) {
        self.set_from_points_with(pts, ObbFitSteps::default());
    }

    /// Fits a minimum-volume OBB on `pts` by a coarse-to-fine search over orientations.
    ///
    /// The OBB is cleared if `pts` is empty.
    pub fn set_from_points_with(&mut self, pts: &[Point], steps: ObbFitSteps) {
        match super::obb_fit::fit_obb(pts, &steps) {
            Some(obb) => *self = obb,
            None => {
                log::debug!("Fitting an OBB on an empty point set; the OBB is cleared.");
                self.clear();
            }
        }
    }

    /// Fits a minimum-volume OBB on the points of a strided float buffer.
    ///
    /// See [`utils::strided_points`] for the buffer layout.
    pub fn set_from_strided(&mut self, data: &[Real], count: usize, stride: usize) {
        let pts = utils::collect_strided_points(data, count, stride);
        self.set_from_points(&pts);
    }

    fn update(&mut self) {
        for i in 0..DIM {
            let offset = self.axes[i] * self.half_extents[i];
            let normal = Unit::new_unchecked(self.axes[i]);
            self.face_planes[i * 2] = Plane::from_point_normal(&(self.center + offset), normal);
            self.face_planes[i * 2 + 1] =
                Plane::from_point_normal(&(self.center - offset), -normal);
        }
    }

    /// The center of this OBB.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The `i`-th axis of this OBB.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector {
        self.axes[i]
    }

    /// The three axes of this OBB.
    #[inline]
    pub fn axes(&self) -> &[Vector; DIM] {
        &self.axes
    }

    /// The rotation matrix whose columns are the axes of this OBB.
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix {
        Matrix::from_columns(&self.axes)
    }

    /// The half-extents of this OBB along each of its axes.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        self.half_extents
    }

    /// The plane supporting the `i`-th face.
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

    /// Whether this OBB is empty, i.e., all its half-extents are nearly zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        is_nearly_zero(&self.half_extents)
    }

    /// The volume of this OBB.
    #[inline]
    pub fn volume(&self) -> Real {
        self.half_extents.x * self.half_extents.y * self.half_extents.z * 8.0
    }

    /// The surface area of this OBB.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let size = self.half_extents * 2.0;
        2.0 * (size.x * size.y + size.y * size.z + size.z * size.x)
    }

    /// The eight corners of this OBB.
    ///
    /// Corner `i` is offset by `+half_extents[k] * axis(k)` when bit `k` of `i` is set,
    /// and by `-half_extents[k] * axis(k)` otherwise.
    pub fn vertices(&self) -> [Point; 8] {
        let ex = self.axes[0] * self.half_extents.x;
        let ey = self.axes[1] * self.half_extents.y;
        let ez = self.axes[2] * self.half_extents.z;
        let c = self.center;

        [
            c - ex - ey - ez,
            c + ex - ey - ez,
            c - ex + ey - ez,
            c + ex + ey - ez,
            c - ex - ey + ez,
            c + ex - ey + ez,
            c - ex + ey + ez,
            c + ex + ey + ez,
        ]
    }

    /// An affine matrix placing a cube centered at the origin onto this OBB.
    ///
    /// Column `i` is `axis(i) * half_extents[i] * (cube_size / 0.5)` and the translation
    /// is the center. With `cube_size = 1`, the cube `[-0.5, 0.5]³` maps exactly onto
    /// this box.
    pub fn matrix(&self, cube_size: Real) -> Matrix4 {
        let scale = cube_size / 0.5;
        let mut result = Matrix4::identity();

        for i in 0..DIM {
            result
                .fixed_view_mut::<3, 1>(0, i)
                .copy_from(&(self.axes[i] * (self.half_extents[i] * scale)));
        }

        result
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.center.coords);
        result
    }

    /// The half-length of the projection of this OBB onto `dir`.
    ///
    /// This is the actual half-length only if `dir` is unit-sized.
    #[inline]
    pub fn projected_radius(&self, dir: &Vector) -> Real {
        (0..DIM)
            .map(|i| self.half_extents[i] * dir.dot(&self.axes[i]).abs())
            .sum()
    }

    /// The coordinates of `pt` along the axes of this OBB, relative to its center.
    #[inline]
    pub fn local_coordinates(&self, pt: &Point) -> Vector {
        let d = pt - self.center;
        Vector::new(
            d.dot(&self.axes[0]),
            d.dot(&self.axes[1]),
            d.dot(&self.axes[2]),
        )
    }

    /// Checks if this OBB intersects `other` with the full 15-axis separating axis test.
    #[inline]
    pub fn intersects(&self, other: &Obb) -> bool {
        sat::obb_obb_intersects(self, other)
    }

    /// Checks if all the corners of `other` lie inside of this OBB.
    pub fn contains(&self, other: &Obb) -> bool {
        other.vertices().iter().all(|pt| self.contains_point(pt))
    }

    /// An approximate distance between this OBB and `other`.
    ///
    /// Zero if they intersect. Otherwise, the distance between the centers minus the largest
    /// half-extent of each box, clamped to zero. This underestimates the true distance.
    pub fn distance(&self, other: &Obb) -> Real {
        if self.intersects(other) {
            return 0.0;
        }

        let dist = na::distance(&self.center, &other.center);
        (dist - self.half_extents.max() - other.half_extents.max()).max(0.0)
    }

    /// Checks if this OBB intersects an AABB.
    ///
    /// Only the three axes of each box are tested; the nine edge-edge axes are not, so the
    /// result may be a false positive for some configurations of disjoint boxes.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        sat::obb_aabb_intersects(self, aabb)
    }

    /// Checks if this OBB intersects a bounding sphere. An empty sphere intersects nothing.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        !sphere.is_empty()
            && self.distance_to_point_squared(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// Checks if any vertex of `triangle` lies inside of this OBB.
    ///
    /// This is not a full triangle-box test: a triangle crossing the box without any of
    /// its vertices inside is reported as not intersecting.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        triangle
            .vertices()
            .iter()
            .any(|pt| self.contains_point(pt))
    }

    /// Grows the half-extents of this OBB until it contains `pt`.
    ///
    /// The center and the axes are left unchanged, so the box grows symmetrically.
    pub fn expand_to_include(&mut self, pt: &Point) {
        let local = self.local_coordinates(pt);
        self.half_extents = self.half_extents.sup(&local.abs());
        self.update();
    }

    /// Replaces this OBB with the axis-aligned box enclosing the corners of both OBBs.
    ///
    /// The result is a valid bound of both boxes, but it is not a minimal oriented box.
    /// Empty boxes cover nothing: merging an empty box is a no-op, and merging into an
    /// empty box copies `other`.
    pub fn merge(&mut self, other: &Obb) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            *self = *other;
            return;
        }

        let corners = self.vertices();
        let other_corners = other.vertices();
        let aabb = Aabb::from_points(corners.iter().chain(other_corners.iter()).copied());
        self.set(aabb.center(), aabb.half_extents());
    }

    /// Transforms this OBB by the affine matrix `m`.
    ///
    /// Any scaling of `m` along an axis is folded into the corresponding half-extent. An
    /// axis collapsed to zero by `m` keeps its previous direction. A box with zero
    /// half-extents stays empty and moves with `m`.
    pub fn transformed(&self, m: &Matrix4) -> Obb {
        let linear = linear_part(m);
        let mut axes = self.axes;
        let mut half_extents = self.half_extents;

        for i in 0..DIM {
            let v = linear * self.axes[i];
            let length = v.norm();

            if length > 0.0 {
                axes[i] = v / length;
            }

            half_extents[i] *= length;
        }

        Obb::with_axes(transform_point(m, &self.center), axes, half_extents)
    }

    /// The tightest AABB enclosing this OBB.
    ///
    /// An OBB with zero half-extents gives an empty AABB at its center.
    pub fn aabb(&self) -> Aabb {
        let extents: Vector = (0..DIM)
            .map(|i| self.axes[i].abs() * self.half_extents[i])
            .sum();
        Aabb::from_half_extents(self.center, extents)
    }
}

impl BoundingVolume for Obb {
    #[inline]
    fn center(&self) -> Point {
        self.center()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn intersects(&self, other: &Obb) -> bool {
        self.intersects(other)
    }

    #[inline]
    fn contains(&self, other: &Obb) -> bool {
        self.contains(other)
    }

    #[inline]
    fn distance(&self, other: &Obb) -> Real {
        self.distance(other)
    }

    #[inline]
    fn merge(&mut self, other: &Obb) {
        self.merge(other)
    }

    #[inline]
    fn expand_to_include(&mut self, pt: &Point) {
        self.expand_to_include(pt)
    }

    #[inline]
    fn transformed(&self, m: &Matrix4) -> Obb {
        self.transformed(m)
    }
}
