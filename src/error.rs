//! Errors reported while building a [`PairedZip`](crate::PairedZip)
use core::fmt;

/// One of the two inputs of the alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The input whose elements end up in the left position of each pair
    Left,
    /// The input whose elements end up in the right position of each pair
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Returned by [`Builder::try_build`](crate::paired_zip::Builder::try_build) when
/// an input doesn't fit into a fixed-capacity sort buffer.
///
/// Growable storage (`Vec`) never produces this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{side} input has more than {capacity} items")]
pub struct CapacityError {
    /// Input that overflowed
    pub side: Side,
    /// Capacity of the sort buffer
    pub capacity: usize,
}
