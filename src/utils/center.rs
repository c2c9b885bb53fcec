use crate::math::{Point, Real};

/// The centroid of a point set, or `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// use boundvol3d::utils::center;
/// use boundvol3d::math::Point;
///
/// let pts = [Point::new(0.0, 0.0, 0.0), Point::new(4.0, 2.0, -2.0)];
///
/// assert_eq!(center(&pts), Some(Point::new(2.0, 1.0, -1.0)));
/// assert_eq!(center(&[]), None);
/// ```
#[inline]
pub fn center(pts: &[Point]) -> Option<Point> {
    if pts.is_empty() {
        return None;
    }

    let denom = 1.0 / (pts.len() as Real);
    Some(
        pts.iter()
            .fold(Point::origin(), |acc, pt| acc + pt.coords * denom),
    )
}
