use crate::bounding_volume::Obb;
use crate::query::{PlaneClassify, PlaneSide};
use crate::shape::Plane;

impl PlaneClassify for Obb {
    #[inline]
    fn classify_plane(&self, plane: &Plane) -> PlaneSide {
        let radius = self.projected_radius(&plane.normal);
        PlaneSide::from_center_distance(plane.distance(&self.center()), radius)
    }
}
