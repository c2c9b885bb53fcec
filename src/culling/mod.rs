//! View-frustum culling.
//!
//! A [`Frustum`] is built from a combined model-view-projection matrix and classifies
//! points, spheres, boxes and [`BoundingVolumes`](crate::bounding_volume::BoundingVolumes)
//! as [`Containment::Outside`], [`Containment::Intersect`] or [`Containment::Inside`].

pub use self::frustum::{frustum_planes, ClipDepth, Containment, Frustum, FrustumSide};

mod frustum;
