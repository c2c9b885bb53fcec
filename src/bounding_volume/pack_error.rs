/// Errors raised while decoding a [`BoundingVolumesData`](super::BoundingVolumesData) record.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The byte buffer does not have the size of one record.
    #[error("expected {expected} bytes for a packed bounding volume record, found {found}")]
    LengthMismatch {
        /// The size of one record, in bytes.
        expected: usize,
        /// The length of the buffer provided.
        found: usize,
    },
}
