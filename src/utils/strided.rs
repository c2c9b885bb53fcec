use crate::math::{Point, Real, DIM};

/// Iterates over the points stored in a strided buffer of floats.
///
/// Point `i` is read from `data[i * stride..i * stride + 3]`, so `stride` is the number of
/// floats per vertex (at least 3, e.g. 6 for interleaved position + normal). At most `count`
/// points are yielded. Points that do not fit in `data` are dropped, and a stride below 3
/// yields nothing; both cases are logged as warnings.
///
/// # Example
///
/// ```
/// use boundvol3d::utils::strided_points;
/// use boundvol3d::math::Point;
///
/// // Positions interleaved with a 2D texture coordinate.
/// let data = [1.0, 2.0, 3.0, 0.0, 0.0, 4.0, 5.0, 6.0, 1.0, 1.0];
/// let pts: Vec<_> = strided_points(&data, 2, 5).collect();
///
/// assert_eq!(pts, vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)]);
/// ```
pub fn strided_points(data: &[Real], count: usize, stride: usize) -> impl Iterator<Item = Point> + '_ {
    let available = if stride < DIM {
        log::warn!("Strided point buffer with a stride of {stride} floats cannot hold 3D points.");
        0
    } else if data.len() < DIM {
        0
    } else {
        (data.len() - DIM) / stride + 1
    };

    if count > available && stride >= DIM {
        log::warn!(
            "Strided point buffer holds {available} points but {count} were requested; extra points are ignored."
        );
    }

    data.chunks(stride.max(DIM))
        .take(count.min(available))
        .map(|p| Point::new(p[0], p[1], p[2]))
}

/// Collects the points of a strided buffer. See [`strided_points`].
pub fn collect_strided_points(data: &[Real], count: usize, stride: usize) -> Vec<Point> {
    strided_points(data, count, stride).collect()
}
