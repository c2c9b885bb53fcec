use boundvol3d::bounding_volume::Aabb;
use boundvol3d::math::{Point, Real, Vector};
use boundvol3d::query::PointQuery;

fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point {
    Point::new(
        (rng.rand_float() - 0.5) * scale,
        (rng.rand_float() - 0.5) * scale,
        (rng.rand_float() - 0.5) * scale,
    )
}

fn random_aabb(rng: &mut oorandom::Rand32) -> Aabb {
    let corner = random_point(rng, 10.0);
    let extents = Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 3.0;
    Aabb::from_corner_extents(corner, extents)
}

#[test]
fn overlapping_boxes_intersection() {
    let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 2.0, 2.0));
    let b = Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(3.0, 3.0, 3.0));
    let inter = a.intersection(&b).expect("the boxes overlap");

    assert!(a.intersects(&b));
    assert_eq!(inter.mins(), Point::new(1.0, 1.0, 1.0));
    assert_eq!(inter.maxs(), Point::new(2.0, 2.0, 2.0));
    assert_eq!(a.distance(&b), 0.0);
    assert_eq!(a.merged(&b).maxs(), Point::new(3.0, 3.0, 3.0));
}

#[test]
fn contained_points_have_zero_distance() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let aabb = random_aabb(&mut rng);

        for _ in 0..20 {
            let pt = random_point(&mut rng, 12.0);

            if aabb.contains_point(&pt) {
                assert_eq!(aabb.distance_to_point(&pt), 0.0);
            } else {
                assert!(aabb.distance_to_point(&pt) > 0.0);
            }
        }
    }
}

#[test]
fn pairwise_tests_are_symmetric() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..500 {
        let a = random_aabb(&mut rng);
        let b = random_aabb(&mut rng);

        assert_eq!(a.intersects(&b), b.intersects(&a));

        if !a.intersects(&b) {
            assert!(a.intersection(&b).is_none());
            assert!(a.distance(&b) > 0.0);
            assert_eq!(a.distance(&b), b.distance(&a));
        } else {
            assert_eq!(a.distance(&b), 0.0);
        }
    }
}

#[test]
fn disjoint_boxes_distance_is_gap_norm() {
    let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point::new(4.0, 5.0, 0.5), Point::new(6.0, 6.0, 2.0));

    assert_relative_eq!(a.distance(&b), 5.0);
    assert!(!a.contains(&b));
    assert!(a.merged(&b).contains(&b));
}
