use crate::bounding_volume::Aabb;
use crate::query::{PlaneClassify, PlaneSide};
use crate::shape::Plane;

impl PlaneClassify for Aabb {
    #[inline]
    fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        let radius = self.half_extents().dot(&plane.normal.abs());
        PlaneSide::from_center_distance(plane.distance(&self.center()), radius)
    }
}
