//! Strongly typed location identifier.
//!
//! Routes refer to locations through `LocationId` rather than by owning a
//! copy, so "same location" is a plain integer comparison and the directory
//! stays the single owner of every `Location`.

use std::fmt;

/// Index of a location in the [`TravelMap`][crate::TravelMap] directory.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl TryFrom<usize> for LocationId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LocationId, Self::Error> {
        u32::try_from(n).map(LocationId)
    }
}
