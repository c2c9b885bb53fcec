use crate::bounding_volume::Obb;
use crate::math::{Real, Vector, DIM, SAT_AXIS_EPSILON};
use arrayvec::ArrayVec;

/// Computes the separation of two OBBs along the unit axis `axis`.
///
/// Positive when the projections of the boxes onto `axis` are disjoint (the value is the
/// gap between them), negative when they overlap.
#[inline]
pub fn obb_obb_separation_wrt_axis(obb1: &Obb, obb2: &Obb, axis: &Vector) -> Real {
    let centers_distance = (obb2.center() - obb1.center()).dot(axis).abs();
    centers_distance - obb1.projected_radius(axis) - obb2.projected_radius(axis)
}

/// The 15 candidate separating axes of two OBBs, normalized.
///
/// These are the three axes of each box followed by the cross products of each pair of
/// axes. Cross products shorter than [`SAT_AXIS_EPSILON`] come from nearly parallel axes
/// and are skipped, so fewer than 15 axes may be returned.
pub fn obb_obb_candidate_axes(obb1: &Obb, obb2: &Obb) -> ArrayVec<Vector, 15> {
    let mut axes = ArrayVec::new();
    axes.extend(obb1.axes().iter().copied());
    axes.extend(obb2.axes().iter().copied());

    for i in 0..DIM {
        for j in 0..DIM {
            let axis = obb1.axis(i).cross(&obb2.axis(j));
            let length = axis.norm();

            if length >= SAT_AXIS_EPSILON {
                axes.push(axis / length);
            }
        }
    }

    axes
}

/// Finds an axis along which the two OBBs are separated, if any.
pub fn obb_obb_find_separating_axis(obb1: &Obb, obb2: &Obb) -> Option<Vector> {
    obb_obb_candidate_axes(obb1, obb2)
        .into_iter()
        .find(|axis| obb_obb_separation_wrt_axis(obb1, obb2, axis) > 0.0)
}

/// Tests two OBBs for intersection with the 15-axis separating axis test.
///
/// Touching boxes intersect.
#[inline]
pub fn obb_obb_intersects(obb1: &Obb, obb2: &Obb) -> bool {
    obb_obb_find_separating_axis(obb1, obb2).is_none()
}
