use crate::math::{Point, Real};
use na;

/// Description of the projection of a point on a bounding volume.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the volume.
    pub is_inside: bool,
    /// The projection result.
    ///
    /// Points inside of the volume are their own projection; points outside are
    /// clamped onto the volume's surface.
    pub point: Point,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point) -> Self {
        PointProjection { is_inside, point }
    }

    /// Returns `true` if `Self::is_inside` is `true` or if the distance between the projected
    /// point and `queried_point` is smaller than `min_dist`.
    pub fn is_inside_eps(&self, queried_point: &Point, min_dist: Real) -> bool {
        self.is_inside || na::distance_squared(queried_point, &self.point) < min_dist * min_dist
    }
}

/// Trait of volumes that can be tested for point inclusion and point projection.
///
/// All volumes are treated as solid: a point inside of the volume projects onto itself and
/// has a distance of zero.
pub trait PointQuery {
    /// Projects a point on `self`.
    fn project_point(&self, pt: &Point) -> PointProjection;

    /// The closest point of `self` to `pt`.
    #[inline]
    fn closest_point(&self, pt: &Point) -> Point {
        self.project_point(pt).point
    }

    /// Tests if the given point is inside of `self`.
    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        self.project_point(pt).is_inside
    }

    /// Computes the squared distance from a point to `self`.
    #[inline]
    fn distance_to_point_squared(&self, pt: &Point) -> Real {
        let proj = self.project_point(pt);

        if proj.is_inside {
            0.0
        } else {
            na::distance_squared(pt, &proj.point)
        }
    }

    /// Computes the distance from a point to `self`.
    #[inline]
    fn distance_to_point(&self, pt: &Point) -> Real {
        self.distance_to_point_squared(pt).sqrt()
    }
}
