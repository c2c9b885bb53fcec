use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolumes};
use crate::math::{Matrix4, Point, Real, Vector4};
use crate::shape::Plane;

/// The six planes of a view frustum, in the order they are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FrustumSide {
    /// The left clipping plane.
    Left = 0,
    /// The right clipping plane.
    Right,
    /// The near clipping plane.
    Front,
    /// The far clipping plane.
    Back,
    /// The top clipping plane.
    Top,
    /// The bottom clipping plane.
    Bottom,
}

impl FrustumSide {
    /// All the sides, in storage order.
    pub const ALL: [FrustumSide; 6] = [
        FrustumSide::Left,
        FrustumSide::Right,
        FrustumSide::Front,
        FrustumSide::Back,
        FrustumSide::Top,
        FrustumSide::Bottom,
    ];
}

/// Result of a frustum test, ordered from the least to the most contained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Containment {
    /// Entirely outside of the frustum.
    Outside,
    /// Partially inside of the frustum, or not proven to be outside.
    Intersect,
    /// Entirely inside of the frustum.
    Inside,
}

/// The depth range of the clip space produced by a projection matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ClipDepth {
    /// Clip-space depth in `[-w, w]` (OpenGL convention).
    #[default]
    NegativeOneToOne,
    /// Clip-space depth in `[0, w]` (Vulkan, Direct3D and wgpu convention).
    ZeroToOne,
}

/// Extracts the six clipping planes of a model-view-projection matrix.
///
/// The planes are returned in [`FrustumSide`] order, normalized, with their normals
/// pointing toward the inside of the frustum. A plane that cannot be normalized, because
/// the matrix is degenerate, is replaced by a plane every point lies in front of.
pub fn frustum_planes(mvp: &Matrix4, depth: ClipDepth) -> [Plane; 6] {
    let row = |i: usize| -> Vector4 { mvp.row(i).transpose() };
    let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

    let near = match depth {
        ClipDepth::NegativeOneToOne => r3 + r2,
        ClipDepth::ZeroToOne => r2,
    };
    let coefficients = [r3 + r0, r3 - r0, near, r3 - r2, r3 - r1, r3 + r1];

    let mut planes = [Plane::everything_in_front(); 6];

    for (side, (plane, coeffs)) in FrustumSide::ALL
        .iter()
        .zip(planes.iter_mut().zip(coefficients.iter()))
    {
        match Plane::from_coefficients(coeffs) {
            Some(extracted) => *plane = extracted,
            None => log::warn!(
                "Degenerate {side:?} frustum plane {coeffs:?}; the plane culls nothing."
            ),
        }
    }

    planes
}

/// A view frustum described by six inward-facing planes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Frustum {
    planes: [Plane; 6],
    clip_depth: ClipDepth,
}

impl Frustum {
    /// The frustum of a model-view-projection matrix with a `[-w, w]` clip depth.
    pub fn new(mvp: &Matrix4) -> Self {
        Self::with_clip_depth(mvp, ClipDepth::default())
    }

    /// The frustum of a model-view-projection matrix with the given clip depth.
    pub fn with_clip_depth(mvp: &Matrix4, clip_depth: ClipDepth) -> Self {
        Frustum {
            planes: frustum_planes(mvp, clip_depth),
            clip_depth,
        }
    }

    /// Rebuilds the planes from a new matrix, keeping the clip depth convention.
    pub fn set_matrix(&mut self, mvp: &Matrix4) {
        self.planes = frustum_planes(mvp, self.clip_depth);
    }

    /// The clip depth convention of this frustum.
    #[inline]
    pub fn clip_depth(&self) -> ClipDepth {
        self.clip_depth
    }

    /// The plane of the given side.
    #[inline]
    pub fn plane(&self, side: FrustumSide) -> &Plane {
        &self.planes[side as usize]
    }

    /// The six planes, in [`FrustumSide`] order.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Classifies a point. Points on a plane are inside.
    pub fn point_in(&self, pt: &Point) -> Containment {
        if self.planes.iter().any(|plane| plane.distance(pt) < 0.0) {
            Containment::Outside
        } else {
            Containment::Inside
        }
    }

    /// Classifies a sphere given by its center and radius.
    pub fn sphere_in(&self, center: &Point, radius: Real) -> Containment {
        let mut result = Containment::Inside;

        for plane in &self.planes {
            let distance = plane.distance(center);

            if distance < -radius {
                return Containment::Outside;
            } else if distance < radius {
                result = Containment::Intersect;
            }
        }

        result
    }

    /// Classifies a bounding sphere. The empty sphere is outside.
    pub fn bounding_sphere_in(&self, sphere: &BoundingSphere) -> Containment {
        if sphere.is_empty() {
            Containment::Outside
        } else {
            self.sphere_in(&sphere.center, sphere.radius)
        }
    }

    /// Classifies an AABB with its positive and negative vertices.
    ///
    /// For each plane, the box is outside if its corner farthest along the plane normal is
    /// behind the plane. Otherwise it straddles the plane if its opposite corner is behind.
    pub fn box_in(&self, aabb: &Aabb) -> Containment {
        let mut result = Containment::Inside;

        for plane in &self.planes {
            if plane.distance(&aabb.positive_vertex(&plane.normal)) < 0.0 {
                return Containment::Outside;
            }

            if plane.distance(&aabb.negative_vertex(&plane.normal)) < 0.0 {
                result = Containment::Intersect;
            }
        }

        result
    }

    /// Classifies bounding volumes, sphere first.
    ///
    /// The sphere decides `Outside` and `Inside`; an intersecting sphere is refined with
    /// the AABB. Volumes with an empty sphere are classified by their AABB alone, and
    /// empty volumes are outside.
    pub fn volumes_in(&self, volumes: &BoundingVolumes) -> Containment {
        if volumes.is_empty() {
            return Containment::Outside;
        }

        if volumes.bsphere.is_empty() {
            return self.box_in(&volumes.aabb);
        }

        match self.bounding_sphere_in(&volumes.bsphere) {
            Containment::Intersect => self.box_in(&volumes.aabb),
            decided => decided,
        }
    }
}
