//! Classification of volumes against planes.

pub use self::plane_classify::{PlaneClassify, PlaneSide};

mod plane_aabb;
mod plane_bounding_sphere;
#[doc(hidden)]
pub mod plane_classify;
mod plane_obb;
