use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM, RAY_PARALLEL_EPSILON};
use crate::query::{Ray, RayCast};
use core::mem;

impl RayCast for Aabb {
    fn clip_ray(&self, ray: &Ray) -> Option<(Real, Real)> {
        let mins = self.mins();
        let maxs = self.maxs();
        let mut tmin: Real = 0.0;
        let mut tmax: Real = Real::MAX;

        for i in 0usize..DIM {
            if ray.dir[i].abs() <= RAY_PARALLEL_EPSILON {
                if ray.origin[i] < mins[i] || ray.origin[i] > maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return None;
                }
            }
        }

        if tmax >= 0.0 {
            Some((tmin, tmax))
        } else {
            None
        }
    }
}
