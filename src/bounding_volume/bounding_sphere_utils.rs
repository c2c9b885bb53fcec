use crate::math::{Point, Real};
use crate::utils;

/// Computes the bounding sphere of a set of point, given its center.
///
/// The radius is the largest distance from `center` to one of the points, or zero if
/// `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(pts: &[Point], center: Point) -> (Point, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, sqradius.sqrt())
}

/// Computes a bounding sphere of the specified set of point.
///
/// The sphere is centered at the centroid of the points, so it is not the minimal
/// enclosing sphere in general. Returns `None` if `pts` is empty.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point]) -> Option<(Point, Real)> {
    utils::center(pts).map(|center| point_cloud_bounding_sphere_with_center(pts, center))
}
