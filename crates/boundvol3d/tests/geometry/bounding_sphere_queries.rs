use boundvol3d::bounding_volume::{Aabb, BoundingSphere};
use boundvol3d::math::{Point, Real, Vector};
use boundvol3d::query::PointQuery;

#[test]
fn distant_spheres_are_disjoint() {
    let a = BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 1.0);
    let b = BoundingSphere::new(Point::new(3.0, 0.0, 0.0), 1.0);

    assert!(!a.intersects(&b));
    assert_relative_eq!(a.distance(&b), 1.0);
    assert_relative_eq!(b.distance(&a), 1.0);
}

#[test]
fn surface_points_are_contained() {
    let mut rng = oorandom::Rand32::new(3);
    let sphere = BoundingSphere::new(Point::new(1.0, -2.0, 0.5), 2.5);

    for _ in 0..500 {
        let dir = Vector::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        );

        if let Some(dir) = na::Unit::try_new(dir, 1.0e-3) {
            let pt = sphere.center + *dir * sphere.radius;

            assert_relative_eq!(sphere.distance_to_point(&pt), 0.0, epsilon = 1.0e-5);
            assert!(sphere.contains_point(&(sphere.center + *dir * (sphere.radius - 1.0e-3))));
        }
    }
}

#[test]
fn merged_sphere_contains_both() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..200 {
        let mut random_sphere = || {
            BoundingSphere::new(
                Point::new(
                    rng.rand_float() * 10.0,
                    rng.rand_float() * 10.0,
                    rng.rand_float() * 10.0,
                ),
                rng.rand_float() * 3.0,
            )
        };
        let a = random_sphere();
        let b = random_sphere();
        let merged = a.merged(&b);
        let slack: Real = 1.0e-4;

        assert!(na::distance(&merged.center, &a.center) + a.radius <= merged.radius + slack);
        assert!(na::distance(&merged.center, &b.center) + b.radius <= merged.radius + slack);
    }
}

#[test]
fn sphere_of_aabb_contains_its_corners() {
    let aabb = Aabb::new(Point::new(-1.0, 2.0, 0.0), Point::new(3.0, 4.0, 8.0));
    let sphere = aabb.bounding_sphere();

    for corner in aabb.vertices() {
        assert_relative_eq!(na::distance(&sphere.center, &corner), sphere.radius, epsilon = 1.0e-5);
    }
}
