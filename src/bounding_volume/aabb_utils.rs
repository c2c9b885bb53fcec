use crate::bounding_volume::Aabb;
use crate::math::{transform_point, Matrix4, Point};

/// Computes the componentwise minimum and maximum of a set of points.
///
/// Returns `None` if the iterator yields no point.
pub fn point_cloud_bounds<I>(pts: I) -> Option<(Point, Point)>
where
    I: IntoIterator<Item = Point>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min: Point = p0;
    let mut max: Point = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Some((min, max))
}

/// Computes the AABB of a set of points.
///
/// An empty set of points gives the empty AABB.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point>,
{
    match point_cloud_bounds(pts) {
        Some((min, max)) => Aabb::new(min, max),
        None => Aabb::empty(),
    }
}

/// Computes the AABB of a set of points transformed by the affine matrix `m`.
pub fn point_cloud_aabb<'a, I>(m: &Matrix4, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| transform_point(m, pt)))
}
