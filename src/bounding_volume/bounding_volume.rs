use crate::math::{Matrix4, Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. They have constant time
/// intersection and inclusion tests, and two bounding volumes of the same kind can be
/// merged into a bigger one.
///
/// This trait is only a shared capability shape: it is implemented by value types and
/// always used through static dispatch.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point;

    /// Whether this bounding volume is the explicit empty volume.
    fn is_empty(&self) -> bool;

    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// The distance between this bounding volume and another one, zero if they intersect.
    fn distance(&self, _: &Self) -> Real;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, other: &Self) -> Self
    where
        Self: Sized + Clone,
    {
        let mut res = self.clone();
        res.merge(other);
        res
    }

    /// Enlarges this bounding volume so it contains the given point.
    fn expand_to_include(&mut self, _: &Point);

    /// Returns this bounding volume transformed by an affine matrix.
    fn transformed(&self, _: &Matrix4) -> Self
    where
        Self: Sized;
}
