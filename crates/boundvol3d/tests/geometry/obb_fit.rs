use boundvol3d::bounding_volume::{Obb, ObbFitSteps};
use boundvol3d::math::{Point, Real, Rotation, Vector};

fn point_cloud(rng: &mut oorandom::Rand32, half_extents: Vector, rot: &Rotation) -> Vec<Point> {
    let offset = Vector::new(3.0, -1.0, 2.0);

    (0..64)
        .map(|_| {
            let local = Vector::new(
                (rng.rand_float() * 2.0 - 1.0) * half_extents.x,
                (rng.rand_float() * 2.0 - 1.0) * half_extents.y,
                (rng.rand_float() * 2.0 - 1.0) * half_extents.z,
            );
            Point::from(rot * local + offset)
        })
        .collect()
}

fn encloses(obb: &Obb, pts: &[Point], slack: Real) -> bool {
    pts.iter().all(|pt| {
        let local = obb.local_coordinates(pt);
        (0..3).all(|i| local[i].abs() <= obb.half_extents()[i] + slack)
    })
}

#[test]
fn fitted_obb_encloses_and_beats_axis_aligned_box() {
    let mut rng = oorandom::Rand32::new(1234);
    let rot = Rotation::from_euler_angles(0.4, 0.2, 0.9);
    let pts = point_cloud(&mut rng, Vector::new(3.0, 1.0, 0.25), &rot);

    let mut fitted = Obb::empty();
    fitted.set_from_points(&pts);
    let mut aligned = Obb::empty();
    aligned.set_from_points_with(&pts, ObbFitSteps::new(0.0, 0.0, 0.0));

    assert!(!fitted.is_empty());
    assert!(encloses(&fitted, &pts, 1.0e-4));
    assert!(encloses(&aligned, &pts, 1.0e-4));
    assert!(fitted.volume() <= aligned.volume());

    for i in 0..3 {
        assert_relative_eq!(fitted.axis(i).norm(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(aligned.axis(i), Vector::ith(i, 1.0));
    }
}

#[test]
fn fit_on_single_point_is_degenerate() {
    let mut obb = Obb::empty();
    obb.set_from_points(&[Point::new(1.0, 2.0, 3.0)]);

    assert_relative_eq!(obb.center(), Point::new(1.0, 2.0, 3.0), epsilon = 1.0e-5);
    assert_relative_eq!(obb.half_extents(), Vector::zeros(), epsilon = 1.0e-5);
}
