use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::{linear_part, transform_point, Matrix4, Vector, DIM};

impl Aabb {
    /// The sphere centered on this AABB and passing through its corners.
    ///
    /// The empty AABB gives the empty sphere.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        if self.is_empty() {
            BoundingSphere::empty()
        } else {
            BoundingSphere::new(self.center(), self.half_extents().norm())
        }
    }

    /// This AABB as an axis-aligned OBB.
    #[inline]
    pub fn to_obb(&self) -> Obb {
        Obb::new(self.center(), self.half_extents())
    }

    /// The OBB obtained by transforming this AABB with the affine matrix `m`.
    ///
    /// The normalized columns of the linear part of `m` become the axes, and their lengths
    /// scale the half-extents. A zero column is replaced by the corresponding world axis.
    pub fn to_transformed_obb(&self, m: &Matrix4) -> Obb {
        let linear = linear_part(m);
        let mut axes = [Vector::x(), Vector::y(), Vector::z()];
        let mut half_extents = self.half_extents();

        for i in 0..DIM {
            let column = linear.column(i);
            let length = column.norm();

            if length > 0.0 {
                axes[i] = column / length;
            }

            half_extents[i] *= length;
        }

        Obb::with_axes(transform_point(m, &self.center()), axes, half_extents)
    }
}
