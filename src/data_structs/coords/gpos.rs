use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    ContigId,
    PosType,
};

/// Represents a genomic position with a contig identifier and a position.
///
/// Positions are ordered by contig first, then by position, which is the
/// order of the globally sorted evidence stream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GenomicPosition {
    contig:   ContigId,
    position: PosType,
}

impl GenomicPosition {
    /// Creates a new `GenomicPosition`.
    pub fn new(
        contig: ContigId,
        position: PosType,
    ) -> Self {
        Self { contig, position }
    }

    /// Returns the contig identifier.
    pub fn contig(&self) -> ContigId {
        self.contig
    }

    /// Returns the position.
    pub fn position(&self) -> PosType {
        self.position
    }
}

impl Display for GenomicPosition {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}", self.contig, self.position)
    }
}
