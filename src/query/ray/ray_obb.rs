use crate::bounding_volume::Obb;
use crate::math::{Real, DIM, RAY_PARALLEL_EPSILON};
use crate::query::{Ray, RayCast};
use core::mem;

impl RayCast for Obb {
    /// Slab test in the frame of the box axes.
    fn clip_ray(&self, ray: &Ray) -> Option<(Real, Real)> {
        let local_origin = self.local_coordinates(&ray.origin);
        let half_extents = self.half_extents();
        let mut tmin: Real = 0.0;
        let mut tmax: Real = Real::MAX;

        for i in 0usize..DIM {
            let dir = self.axis(i).dot(&ray.dir);
            let e = local_origin[i];

            if dir.abs() <= RAY_PARALLEL_EPSILON {
                if e.abs() > half_extents[i] {
                    return None;
                }
            } else {
                let mut t1 = (-half_extents[i] - e) / dir;
                let mut t2 = (half_extents[i] - e) / dir;

                if t1 > t2 {
                    mem::swap(&mut t1, &mut t2);
                }

                tmin = tmin.max(t1);
                tmax = tmax.min(t2);

                if tmin > tmax {
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
