//  Errors.

use core::{error, fmt};

/// An error in growing the storage of a bit set.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StoreError {
    /// The number of words required cannot be represented, or exceeds the maximum size of an allocation.
    CapacityOverflow,
    /// The allocator could not provide the memory.
    AllocationFailed,
}

impl fmt::Display for StoreError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::CapacityOverflow => f.write_str("word storage capacity overflow"),
            Self::AllocationFailed => f.write_str("word storage allocation failed"),
        }
    }
}

impl error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!("word storage capacity overflow", StoreError::CapacityOverflow.to_string());
        assert_eq!("word storage allocation failed", StoreError::AllocationFailed.to_string());
    }
} // mod tests
