//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast};
pub use self::ray_bounding_sphere::ray_clip_with_ball;
pub use self::ray_plane::line_toi_with_plane;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_bounding_sphere;
mod ray_obb;
mod ray_plane;
