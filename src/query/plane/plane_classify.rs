use crate::math::Real;
use crate::shape::Plane;

/// The position of a volume relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum PlaneSide {
    /// Entirely behind the plane, against its normal.
    Back = -1,
    /// Crossing or touching the plane.
    Straddling = 0,
    /// Entirely in front of the plane.
    Front = 1,
}

impl PlaneSide {
    /// Classifies a volume from the signed distance of its center to the plane and the
    /// half-length of its projection onto the plane normal.
    #[inline]
    pub fn from_center_distance(distance: Real, radius: Real) -> PlaneSide {
        if distance > radius {
            PlaneSide::Front
        } else if distance < -radius {
            PlaneSide::Back
        } else {
            PlaneSide::Straddling
        }
    }
}

/// Trait of volumes that can be classified against a plane.
pub trait PlaneClassify {
    /// The side of `plane` this volume lies on.
    fn classify_plane(&self, plane: &Plane) -> PlaneSide;

    /// Whether `plane` crosses or touches this volume.
    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> bool {
        self.classify_plane(plane) == PlaneSide::Straddling
    }
}
