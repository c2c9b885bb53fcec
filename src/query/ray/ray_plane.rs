use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast};
use crate::shape::Plane;

/// Computes the parameter where a line crosses a plane given by a point and a normal.
///
/// Returns `None` if the line is parallel to the plane.
#[inline]
pub fn line_toi_with_plane(
    plane_point: &Point,
    plane_normal: &Vector,
    line_origin: &Point,
    line_dir: &Vector,
) -> Option<Real> {
    let dpos = *plane_point - *line_origin;
    let denom = plane_normal.dot(line_dir);

    if relative_eq!(denom, 0.0) {
        None
    } else {
        Some(plane_normal.dot(&dpos) / denom)
    }
}

impl RayCast for Plane {
    /// The solid half-space behind the plane is cast against.
    ///
    /// A ray starting behind the plane hits it at `t = 0`. A ray leaving the plane or
    /// parallel to it misses unless its origin is behind the plane.
    fn clip_ray(&self, ray: &Ray) -> Option<(Real, Real)> {
        let origin_distance = self.distance(&ray.origin);
        let plane_point = self.project_point(&ray.origin);
        let t = line_toi_with_plane(&plane_point, &self.normal, &ray.origin, &ray.dir);

        if origin_distance <= 0.0 {
            let t_out = t.filter(|t| *t > 0.0).unwrap_or(Real::MAX);
            Some((0.0, t_out))
        } else {
            t.filter(|t| *t >= 0.0).map(|t| (t, Real::MAX))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::query::{Ray, RayCast};
    use crate::shape::Plane;

    #[test]
    fn ray_toward_plane() {
        let plane = Plane::from_point_normal(&Point::origin(), Vector::y_axis());

        assert_relative_eq!(
            plane
                .cast_ray(&Ray::new(Point::new(0.0, 3.0, 0.0), -Vector::y()))
                .unwrap(),
            3.0
        );
        assert!(!plane.intersects_ray(&Ray::new(Point::new(0.0, 3.0, 0.0), Vector::x())));
        assert_eq!(
            plane.cast_ray(&Ray::new(Point::new(0.0, -1.0, 0.0), Vector::x())),
            Some(0.0)
        );
    }
}
