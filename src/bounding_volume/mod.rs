//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::bounding_volumes::BoundingVolumes;
pub use crate::bounding_volume::bounding_volumes_data::{BoundingVolumesData, PACKED_FLOAT_COUNT};
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;
pub use crate::bounding_volume::obb_fit::{ObbFitSteps, MAX_FIT_STEPS_PER_ANGLE};
pub use crate::bounding_volume::pack_error::PackError;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_conversions;
mod aabb_utils;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;

#[doc(hidden)]
pub mod obb;
mod obb_fit;

mod bounding_volumes;
mod bounding_volumes_data;
mod pack_error;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb, point_cloud_bounds};
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
}
