//! Geometric queries on bounding volumes.
//!
//! # Summary
//!
//! | Query                | Trait or function                    | Description                               |
//! |----------------------|--------------------------------------|-------------------------------------------|
//! | Point projection     | [`PointQuery`]                       | Closest point, inclusion and distance     |
//! | Ray casting          | [`RayCast`]                          | Entry/exit parameters of a ray            |
//! | Plane classification | [`PlaneClassify`]                    | Which side of a plane a volume lies on    |
//! | Box-box overlap      | [`sat`] functions                    | Separating axis tests for OBBs and AABBs  |
//!
//! All the volumes are solid: a point or a ray origin inside of a volume is at distance
//! zero from it.

pub use self::plane::{PlaneClassify, PlaneSide};
pub use self::point::{PointProjection, PointQuery};
pub use self::ray::{Ray, RayCast};

pub mod plane;
pub mod point;
pub mod ray;
pub mod sat;

/// Free functions for some special cases of queries.
pub mod details {
    pub use super::ray::{line_toi_with_plane, ray_clip_with_ball};
}
