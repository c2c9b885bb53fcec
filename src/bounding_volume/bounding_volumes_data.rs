//! Flat, fixed-layout record of a [`BoundingVolumes`].

use crate::bounding_volume::{BoundingVolumes, PackError};
use crate::math::{Point, Real, Vector};
use bytemuck::{Pod, Zeroable};
use static_assertions::{assert_eq_align, const_assert_eq};

/// The 25 floats of a [`BoundingVolumes`], laid out for storage or GPU upload.
///
/// The record has no padding, no version tag, and uses the native float endianness.
/// Packing then unpacking reproduces every float bit for bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct BoundingVolumesData {
    /// Minimum corner of the AABB.
    pub aabb_min: [Real; 3],
    /// Maximum corner of the AABB.
    pub aabb_max: [Real; 3],
    /// Center of the OBB.
    pub obb_center: [Real; 3],
    /// First axis of the OBB.
    pub obb_axis_x: [Real; 3],
    /// Second axis of the OBB.
    pub obb_axis_y: [Real; 3],
    /// Third axis of the OBB.
    pub obb_axis_z: [Real; 3],
    /// Half-extents of the OBB.
    pub obb_half_size: [Real; 3],
    /// Center of the bounding sphere.
    pub sphere_center: [Real; 3],
    /// Radius of the bounding sphere.
    pub sphere_radius: Real,
}

/// The number of floats in a [`BoundingVolumesData`].
pub const PACKED_FLOAT_COUNT: usize = 25;

const_assert_eq!(
    size_of::<BoundingVolumesData>(),
    PACKED_FLOAT_COUNT * size_of::<Real>()
);
const_assert_eq!(size_of::<BoundingVolumesData>(), 100);
assert_eq_align!(BoundingVolumesData, Real);

impl BoundingVolumes {
    /// Packs these volumes into their flat record.
    pub fn pack(&self) -> BoundingVolumesData {
        let axes = self.obb.axes();

        BoundingVolumesData {
            aabb_min: self.aabb.mins().coords.into(),
            aabb_max: self.aabb.maxs().coords.into(),
            obb_center: self.obb.center().coords.into(),
            obb_axis_x: axes[0].into(),
            obb_axis_y: axes[1].into(),
            obb_axis_z: axes[2].into(),
            obb_half_size: self.obb.half_extents().into(),
            sphere_center: self.bsphere.center.coords.into(),
            sphere_radius: self.bsphere.radius,
        }
    }
}

impl From<&BoundingVolumes> for BoundingVolumesData {
    fn from(volumes: &BoundingVolumes) -> Self {
        volumes.pack()
    }
}

impl From<&BoundingVolumesData> for BoundingVolumes {
    fn from(data: &BoundingVolumesData) -> Self {
        data.to_volumes()
    }
}

impl BoundingVolumesData {
    /// Rebuilds the volumes stored in this record.
    pub fn to_volumes(&self) -> BoundingVolumes {
        let mut result = BoundingVolumes::empty();
        self.unpack_into(&mut result);
        result
    }

    /// Overwrites `volumes` with the volumes stored in this record.
    pub fn unpack_into(&self, volumes: &mut BoundingVolumes) {
        volumes
            .aabb
            .set_mins_maxs(Point::from(self.aabb_min), Point::from(self.aabb_max));
        volumes.obb.set_with_axes(
            Point::from(self.obb_center),
            [
                Vector::from(self.obb_axis_x),
                Vector::from(self.obb_axis_y),
                Vector::from(self.obb_axis_z),
            ],
            Vector::from(self.obb_half_size),
        );
        volumes
            .bsphere
            .set(Point::from(self.sphere_center), self.sphere_radius);
    }

    /// The raw bytes of this record.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a record from raw bytes. The buffer does not need to be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PackError> {
        let expected = size_of::<Self>();

        if bytes.len() != expected {
            return Err(PackError::LengthMismatch {
                expected,
                found: bytes.len(),
            });
        }

        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// The 25 floats of this record, in field order.
    #[inline]
    pub fn to_array(&self) -> [Real; PACKED_FLOAT_COUNT] {
        bytemuck::cast(*self)
    }

    /// Builds a record from its 25 floats, in field order.
    #[inline]
    pub fn from_array(floats: [Real; PACKED_FLOAT_COUNT]) -> Self {
        bytemuck::cast(floats)
    }
}
