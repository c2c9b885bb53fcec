use crate::bounding_volume::Obb;
use crate::math::{Point, DIM};
use crate::query::{PointProjection, PointQuery};

impl PointQuery for Obb {
    fn project_point(&self, pt: &Point) -> PointProjection {
        let local = self.local_coordinates(pt);
        let half_extents = self.half_extents();
        let mut inside = true;
        let mut result = self.center();

        for i in 0..DIM {
            let coord = local[i];

            if coord.abs() > half_extents[i] {
                inside = false;
            }

            result += self.axis(i) * coord.clamp(-half_extents[i], half_extents[i]);
        }

        if inside {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, result)
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        let local = self.local_coordinates(pt);
        let half_extents = self.half_extents();
        (0..DIM).all(|i| local[i].abs() <= half_extents[i])
    }
}
