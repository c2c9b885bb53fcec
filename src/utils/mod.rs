//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::strided::{collect_strided_points, strided_points};

mod center;
mod strided;
