use crate::bounding_volume::BoundingSphere;
use crate::query::{PlaneClassify, PlaneSide};
use crate::shape::Plane;

impl PlaneClassify for BoundingSphere {
    /// The empty sphere is classified as a point at its center.
    #[inline]
    fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        PlaneSide::from_center_distance(plane.distance(&self.center), self.radius.max(0.0))
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> bool {
        !self.is_empty() && self.classify_plane(plane) == PlaneSide::Straddling
    }
}
