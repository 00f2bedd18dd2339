use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over pip values 0..=7
///
/// Used for distinctness checks when evaluating NOT_EQUAL regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipSet {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl PipSet {
    /// Create a set with no pips present
    pub const fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Insert a pip value
    ///
    /// Returns `true` if the value was not present before. Values that do not
    /// fit the set are reported as already present.
    pub fn insert(&mut self, pip: u8) -> bool {
        let index = usize::from(pip);
        if index >= self.bits.len() || self.contains(pip) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test pip membership
    pub fn contains(&self, pip: u8) -> bool {
        self.bits.get(usize::from(pip)).as_deref() == Some(&true)
    }

    /// Test if no pips are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count pips in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all pip values in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bits
            .iter_ones()
            .filter_map(|index| u8::try_from(index).ok())
            .collect()
    }
}

impl fmt::Display for PipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PipSet({:?})", self.to_vec())
    }
}
