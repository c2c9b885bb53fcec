use boundvol3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolumes, Obb};
use boundvol3d::math::{Point, Real, Rotation, Vector};
use boundvol3d::query::{PointQuery, Ray, RayCast};

fn random_dir(rng: &mut oorandom::Rand32) -> Vector {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );

        if let Some(dir) = na::Unit::try_new(v, 1.0e-2) {
            return dir.into_inner();
        }
    }
}

/// Casts rays from far away toward the center of `shape` and checks the hit lies on its
/// boundary.
fn check_hits_on_boundary<S: RayCast + PointQuery>(shape: &S, center: Point, seed: u64) {
    let mut rng = oorandom::Rand32::new(seed);
    let nudge: Real = 1.0e-3;

    for _ in 0..1000 {
        let dir = random_dir(&mut rng);
        let ray = Ray::new(center - dir * 20.0, dir);
        let toi = shape
            .cast_ray(&ray)
            .expect("a ray aimed at the center hits");
        let hit = ray.point_at(toi);

        assert!(toi > 0.0);
        assert!(shape.contains_point(&(hit + dir * nudge)));
        assert!(!shape.contains_point(&(hit - dir * nudge)));

        // Turning the ray around misses.
        assert!(!shape.intersects_ray(&Ray::new(ray.origin, -dir)));
    }
}

#[test]
fn aabb_ray_sweep() {
    let aabb = Aabb::new(Point::new(-1.0, 0.0, 2.0), Point::new(2.0, 0.5, 4.0));
    check_hits_on_boundary(&aabb, aabb.center(), 42);
}

#[test]
fn obb_ray_sweep() {
    let m = Rotation::from_euler_angles(0.5, -0.3, 1.2);
    let axes = [
        m.matrix().column(0).into_owned(),
        m.matrix().column(1).into_owned(),
        m.matrix().column(2).into_owned(),
    ];
    let obb = Obb::with_axes(Point::new(3.0, 1.0, -2.0), axes, Vector::new(1.5, 0.25, 0.75));
    check_hits_on_boundary(&obb, obb.center(), 43);
}

#[test]
fn sphere_ray_sweep() {
    let sphere = BoundingSphere::new(Point::new(-4.0, 2.0, 1.0), 1.75);
    check_hits_on_boundary(&sphere, sphere.center, 44);
}

#[test]
fn ray_scenario_hits_at_four() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), Vector::x());

    assert_eq!(aabb.cast_ray(&ray), Some(4.0));
    assert_relative_eq!(BoundingVolumes::from_aabb(&aabb).cast_ray(&ray).unwrap(), 4.0);
}

#[test]
fn origin_inside_hits_at_zero() {
    let obb = Obb::new(Point::origin(), Vector::repeat(1.0));
    let sphere = BoundingSphere::new(Point::origin(), 1.0);
    let ray = Ray::new(Point::new(0.2, 0.1, 0.0), Vector::new(0.0, 3.0, 0.0));

    assert_eq!(obb.cast_ray(&ray), Some(0.0));
    assert_eq!(sphere.cast_ray(&ray), Some(0.0));
    assert!(!BoundingSphere::empty().intersects_ray(&ray));
}
