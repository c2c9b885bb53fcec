use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use na;
use num::Zero;

impl PointQuery for Aabb {
    #[inline]
    fn project_point(&self, pt: &Point) -> PointProjection {
        let mins_pt = self.mins() - pt;
        let pt_maxs = pt - self.maxs();
        let shift = mins_pt.sup(&na::zero()) - pt_maxs.sup(&na::zero());

        PointProjection::new(shift.is_zero(), pt + shift)
    }

    #[inline]
    fn contains_point(&self, pt: &Point) -> bool {
        na::partial_le(&self.mins(), pt) && na::partial_ge(&self.maxs(), pt)
    }

    #[inline]
    fn distance_to_point_squared(&self, pt: &Point) -> Real {
        let mins_pt = self.mins() - pt;
        let pt_maxs = pt - self.maxs();
        mins_pt.sup(&pt_maxs).sup(&na::zero()).norm_squared()
    }
}
