use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use na;

impl PointQuery for BoundingSphere {
    /// Points outside of the sphere are projected along the ray from the center.
    ///
    /// The empty sphere projects every point onto its center.
    #[inline]
    fn project_point(&self, pt: &Point) -> PointProjection {
        if self.is_empty() {
            return PointProjection::new(false, self.center);
        }

        let dcenter = pt - self.center;
        let distance = dcenter.norm();

        if distance <= self.radius {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, self.center + dcenter * (self.radius / distance))
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        !self.is_empty() && na::distance(pt, &self.center) <= self.radius
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point) -> Real {
        (na::distance(pt, &self.center) - self.radius.max(0.0)).max(0.0)
    }

    #[inline]
    fn distance_to_point_squared(&self, pt: &Point) -> Real {
        let distance = self.distance_to_point(pt);
        distance * distance
    }
}
