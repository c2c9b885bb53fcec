/*!
boundvol3d
==========

**boundvol3d** is a 3-dimensional bounding-volume library written with
the rust programming language. It provides axis-aligned boxes, oriented boxes,
bounding spheres and view frustums, together with the queries a renderer needs
for visibility culling and coarse collision tests.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod culling;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
