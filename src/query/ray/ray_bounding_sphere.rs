use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::query::{Ray, RayCast};
use num::Zero;

impl RayCast for BoundingSphere {
    #[inline]
    fn clip_ray(&self, ray: &Ray) -> Option<(Real, Real)> {
        if self.is_empty() {
            return None;
        }

        ray_clip_with_ball(self.center(), self.radius(), ray)
    }
}

/// Computes the parameters where a ray enters and leaves a ball.
///
/// The entry parameter is clamped to zero when the ray origin is inside of the ball. The
/// direction of the ray does not need to be normalized.
#[inline]
pub fn ray_clip_with_ball(center: &Point, radius: Real, ray: &Ray) -> Option<(Real, Real)> {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    // Special case for when the dir is zero.
    if a.is_zero() {
        return if c > 0.0 { None } else { Some((0.0, 0.0)) };
    }

    if c > 0.0 && b > 0.0 {
        return None;
    }

    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        return None;
    }

    let sqrt_delta = delta.sqrt();
    let t_near = (-b - sqrt_delta) / a;
    let t_far = (-b + sqrt_delta) / a;

    // The origin is inside of the ball if t_near is negative.
    Some((t_near.max(0.0), t_far))
}
