//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point,
    /// The triangle second point.
    pub b: Point,
    /// The triangle third point.
    pub c: Point,
}

impl From<[Point; 3]> for Triangle {
    fn from(arr: [Point; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    /// The vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The non-normalized normal of this triangle, following the `a, b, c` winding.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
