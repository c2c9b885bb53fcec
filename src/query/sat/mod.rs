//! Application of the Separating Axis Theorem (SAT) to oriented and axis-aligned boxes.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For two boxes, it is sufficient to test the three
//! face normals of each box, plus the nine cross products of one axis of each box.
//!
//! The projection of a box onto a unit axis `L` is an interval centered on the projection
//! of its center, with a half-length of `Σ hᵢ·|L·aᵢ|` where `aᵢ` are the box axes and `hᵢ`
//! its half-extents. The boxes are separated along `L` if the distance between the two
//! projected centers exceeds the sum of the two half-lengths.
//!
//! # Example
//!
//! ```rust
//! use boundvol3d::bounding_volume::Obb;
//! use boundvol3d::math::{Point, Vector};
//! use boundvol3d::query::sat;
//!
//! let box1 = Obb::new(Point::origin(), Vector::new(1.0, 1.0, 1.0));
//! let box2 = Obb::new(Point::new(2.5, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));
//!
//! let separation = sat::obb_obb_separation_wrt_axis(&box1, &box2, &Vector::x());
//! assert_eq!(separation, 0.5);
//! assert!(!sat::obb_obb_intersects(&box1, &box2));
//! ```

pub use self::sat_obb_aabb::*;
pub use self::sat_obb_obb::*;

mod sat_obb_aabb;
mod sat_obb_obb;
