//! Leaf shapes the bounding volumes are tested against.

pub use self::plane::Plane;
pub use self::triangle::Triangle;

mod plane;
mod triangle;
