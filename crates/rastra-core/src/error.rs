//! Error types for store construction and positional access.

use std::fmt;

/// Errors arising from store construction or accessor positioning.
///
/// Out-of-bounds coordinates are deliberately absent: they are not
/// errors but defined outcomes resolved by the bound out-of-bounds
/// strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The extent vector passed to a constructor is malformed:
    /// zero axes or a negative size on some axis.
    InvalidDimensions {
        /// What went wrong.
        reason: String,
    },
    /// A coordinate vector's length does not match the dimensionality
    /// of the store or interval it was applied to.
    DimensionMismatch {
        /// Dimensionality of the target.
        expected: usize,
        /// Length of the offending coordinate vector.
        actual: usize,
    },
    /// The requested buffer length exceeds the addressable capacity.
    AllocationTooLarge {
        /// Requested number of entities.
        requested: u64,
        /// Maximum addressable number of entities.
        max: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { reason } => {
                write!(f, "invalid dimensions: {reason}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "coordinate has {actual} axes, expected {expected}"
                )
            }
            Self::AllocationTooLarge { requested, max } => {
                write!(
                    f,
                    "requested {requested} entities exceeds addressable capacity {max}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_quantity() {
        let e = GridError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "coordinate has 2 axes, expected 3");

        let e = GridError::AllocationTooLarge {
            requested: 1 << 40,
            max: (1 << 31) - 1,
        };
        assert!(e.to_string().contains("exceeds addressable capacity"));
    }
}
