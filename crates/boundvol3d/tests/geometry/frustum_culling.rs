use boundvol3d::bounding_volume::{Aabb, BoundingVolumes};
use boundvol3d::culling::{ClipDepth, Containment, Frustum};
use boundvol3d::math::{Matrix4, Point, Real, Vector};

const ZNEAR: Real = 0.1;
const ZFAR: Real = 100.0;

/// A camera at `(0, 0, 5)` looking at the origin.
fn view_projection() -> Matrix4 {
    let proj = na::Perspective3::new(1.0, core::f32::consts::FRAC_PI_2, ZNEAR, ZFAR);
    let view = Matrix4::look_at_rh(
        &Point::new(0.0, 0.0, 5.0),
        &Point::origin(),
        &Vector::y(),
    );
    proj.to_homogeneous() * view
}

/// Remaps the `[-1, 1]` clip depth of `mvp` to `[0, 1]`.
fn zero_to_one(mvp: &Matrix4) -> Matrix4 {
    let remap = Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.5, 0.5, //
        0.0, 0.0, 0.0, 1.0,
    );
    remap * mvp
}

#[test]
fn perspective_point_classification() {
    for frustum in [
        Frustum::new(&view_projection()),
        Frustum::with_clip_depth(&zero_to_one(&view_projection()), ClipDepth::ZeroToOne),
    ] {
        // Just past the near plane.
        let near = Point::new(0.0, 0.0, 5.0 - 2.0 * ZNEAR);
        assert_eq!(frustum.point_in(&near), Containment::Inside);
        // Behind the camera.
        assert_eq!(frustum.point_in(&Point::new(0.0, 0.0, 6.0)), Containment::Outside);
        // Beyond the far plane.
        assert_eq!(frustum.point_in(&Point::new(0.0, 0.0, -200.0)), Containment::Outside);
        // Far to the side of the 90° field of view.
        assert_eq!(frustum.point_in(&Point::new(100.0, 0.0, 0.0)), Containment::Outside);
        assert_eq!(frustum.point_in(&Point::origin()), Containment::Inside);
    }
}

#[test]
fn perspective_volume_classification() {
    let frustum = Frustum::new(&view_projection());
    let small = BoundingVolumes::from_aabb(&Aabb::new(
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ));
    let straddling = BoundingVolumes::from_aabb(&Aabb::new(
        Point::new(2.0, -0.5, -0.5),
        Point::new(8.0, 0.5, 0.5),
    ));
    let hidden = BoundingVolumes::from_aabb(&Aabb::new(
        Point::new(50.0, -0.5, -0.5),
        Point::new(51.0, 0.5, 0.5),
    ));

    assert_eq!(frustum.volumes_in(&small), Containment::Inside);
    assert_eq!(frustum.volumes_in(&straddling), Containment::Intersect);
    assert_eq!(frustum.volumes_in(&hidden), Containment::Outside);
    assert_eq!(frustum.volumes_in(&BoundingVolumes::empty()), Containment::Outside);
}

#[test]
fn sphere_result_never_contradicts_box_result() {
    let mut rng = oorandom::Rand32::new(99);
    let frustum = Frustum::new(&view_projection());

    for _ in 0..500 {
        let corner = Point::new(
            (rng.rand_float() - 0.5) * 40.0,
            (rng.rand_float() - 0.5) * 40.0,
            (rng.rand_float() - 0.5) * 40.0,
        );
        let aabb = Aabb::from_corner_extents(corner, Vector::repeat(rng.rand_float() * 3.0));
        let volumes = BoundingVolumes::from_aabb(&aabb);

        if frustum.box_in(&aabb) == Containment::Outside {
            assert_eq!(frustum.volumes_in(&volumes), Containment::Outside);
        }

        if frustum.bounding_sphere_in(&volumes.bsphere) == Containment::Inside {
            assert_eq!(frustum.box_in(&aabb), Containment::Inside);
        }
    }
}
