use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Real, Vector, DIM};
use arrayvec::ArrayVec;

/// Computes the separation of an OBB and an AABB along the unit axis `axis`.
///
/// Positive when the projections of the boxes onto `axis` are disjoint, negative when they
/// overlap.
#[inline]
pub fn obb_aabb_separation_wrt_axis(obb: &Obb, aabb: &Aabb, axis: &Vector) -> Real {
    let centers_distance = (aabb.center() - obb.center()).dot(axis).abs();
    let aabb_radius = aabb.half_extents().dot(&axis.abs());
    centers_distance - obb.projected_radius(axis) - aabb_radius
}

/// The axes tested by [`obb_aabb_intersects`]: the three OBB axes then the three world axes.
pub fn obb_aabb_candidate_axes(obb: &Obb) -> ArrayVec<Vector, 6> {
    let mut axes = ArrayVec::new();
    axes.extend(obb.axes().iter().copied());
    axes.extend((0..DIM).map(|i| Vector::ith(i, 1.0)));
    axes
}

/// Tests an OBB and an AABB for intersection on the face normals of both boxes.
///
/// The nine edge-edge axes are not tested. This never misses an intersection, but may
/// report one for disjoint boxes separated only along an edge-edge axis.
pub fn obb_aabb_intersects(obb: &Obb, aabb: &Aabb) -> bool {
    obb_aabb_candidate_axes(obb)
        .iter()
        .all(|axis| obb_aabb_separation_wrt_axis(obb, aabb, axis) <= 0.0)
}

#[cfg(test)]
mod test {
    use super::obb_aabb_intersects;
    use crate::bounding_volume::{Aabb, Obb};
    use crate::math::{Point, Rotation, Vector};

    #[test]
    fn rotated_obb_against_aabb() {
        let rot = Rotation::from_axis_angle(&Vector::z_axis(), core::f32::consts::FRAC_PI_4);
        let m = rot.matrix();
        let obb = Obb::with_axes(
            Point::origin(),
            [
                m.column(0).into_owned(),
                m.column(1).into_owned(),
                m.column(2).into_owned(),
            ],
            Vector::new(1.0, 1.0, 1.0),
        );
        let touching = Aabb::new(Point::new(1.3, -0.1, -1.0), Point::new(2.0, 0.1, 1.0));
        let apart = Aabb::new(Point::new(1.5, -0.1, -1.0), Point::new(2.0, 0.1, 1.0));

        assert!(obb_aabb_intersects(&obb, &touching));
        assert!(!obb_aabb_intersects(&obb, &apart));
        assert!(obb_aabb_intersects(&Obb::default(), &Aabb::default()));
    }
}
