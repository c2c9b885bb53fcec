use boundvol3d::bounding_volume::BoundingVolumes;
use boundvol3d::math::{Point, Rotation, Vector};

fn random_volumes(rng: &mut oorandom::Rand32) -> BoundingVolumes {
    let center = Vector::new(
        rng.rand_float() * 8.0,
        rng.rand_float() * 8.0,
        rng.rand_float() * 8.0,
    );
    let rot = Rotation::from_euler_angles(
        rng.rand_float() * 3.0,
        rng.rand_float() * 3.0,
        rng.rand_float() * 3.0,
    );
    let half_extents = Vector::new(2.0, 0.5, 0.2);
    let pts: Vec<Point> = (0..8)
        .map(|i| {
            let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            let local = Vector::new(
                sign(1) * half_extents.x,
                sign(2) * half_extents.y,
                sign(4) * half_extents.z,
            );
            Point::from(rot * local + center)
        })
        .collect();

    let mut volumes = BoundingVolumes::empty();
    volumes.set_from_points(&pts);
    volumes
}

#[test]
fn cascade_is_conjunction_of_members() {
    let mut rng = oorandom::Rand32::new(8);
    let mut hits = 0;

    for _ in 0..500 {
        let a = random_volumes(&mut rng);
        let b = random_volumes(&mut rng);
        let expected = a.bsphere.intersects(&b.bsphere)
            && a.aabb.intersects(&b.aabb)
            && a.obb.intersects(&b.obb);

        assert_eq!(a.intersects(&b), expected);
        assert_eq!(a.intersects(&b), b.intersects(&a));

        if expected {
            hits += 1;
        }
    }

    // The sweep exercises both outcomes.
    assert!(hits > 0 && hits < 500);
}

#[test]
fn merged_volumes_contain_both() {
    let mut rng = oorandom::Rand32::new(21);

    for _ in 0..100 {
        let a = random_volumes(&mut rng);
        let b = random_volumes(&mut rng);
        let mut merged = a;
        merged.merge(&b);

        assert!(merged.aabb.contains(&a.aabb) && merged.aabb.contains(&b.aabb));
        assert!(merged.intersects(&a) && merged.intersects(&b));
    }
}
