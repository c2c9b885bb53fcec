use boundvol3d::bounding_volume::{Aabb, Obb};
use boundvol3d::math::{Point, Real, Rotation, Vector};
use boundvol3d::query::PointQuery;

fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point {
    Point::new(
        (rng.rand_float() - 0.5) * scale,
        (rng.rand_float() - 0.5) * scale,
        (rng.rand_float() - 0.5) * scale,
    )
}

fn rotated_obb(center: Point, half_extents: Vector, rot: &Rotation) -> Obb {
    let m = rot.matrix();
    Obb::with_axes(
        center,
        [
            m.column(0).into_owned(),
            m.column(1).into_owned(),
            m.column(2).into_owned(),
        ],
        half_extents,
    )
}

#[test]
fn identity_obb_contains_like_aabb() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..100 {
        let center = random_point(&mut rng, 10.0);
        let half_extents = Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 2.0;
        let obb = Obb::new(center, half_extents);
        let aabb = Aabb::from_half_extents(center, half_extents);

        for _ in 0..50 {
            let pt = center + random_point(&mut rng, 5.0).coords;
            assert_eq!(obb.contains_point(&pt), aabb.contains_point(&pt));
        }
    }
}

#[test]
fn sat_matches_inscribed_and_circumscribed_spheres() {
    let mut rng = oorandom::Rand32::new(17);
    let half_extents = Vector::new(1.0, 0.5, 2.0);
    let inner = half_extents.min();
    let outer = half_extents.norm();

    for _ in 0..300 {
        let rot1 = Rotation::from_euler_angles(
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
        );
        let rot2 = Rotation::from_euler_angles(
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
        );
        let a = rotated_obb(Point::origin(), half_extents, &rot1);
        let b = rotated_obb(random_point(&mut rng, 12.0), half_extents, &rot2);
        let dist = b.center().coords.norm();

        if dist < 2.0 * inner {
            assert!(a.intersects(&b));
        } else if dist > 2.0 * outer {
            assert!(!a.intersects(&b));
        }

        assert_eq!(a.intersects(&b), b.intersects(&a));
    }
}

#[test]
fn aabb_obb_test_accepts_enclosed_boxes() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let rot = Rotation::from_euler_angles(0.3, 0.7, -1.1);
    let inside = rotated_obb(Point::new(0.1, 0.0, -0.2), Vector::repeat(0.3), &rot);
    let far = rotated_obb(Point::new(10.0, 0.0, 0.0), Vector::repeat(0.3), &rot);

    assert!(aabb.intersects_obb(&inside));
    assert!(inside.intersects_aabb(&aabb));
    assert!(!aabb.intersects_obb(&far));
}
