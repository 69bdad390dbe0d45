use std::fmt::{
    Debug,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::GenomicPosition;
use crate::data_structs::typedef::{
    ContigId,
    PosType,
};

/// Location contract required by the clustering machinery.
///
/// Implementors describe a closed-open interval on a single contig.
pub trait ClusterLocus: Clone + Debug {
    /// Returns the contig identifier.
    fn contig(&self) -> ContigId;

    /// Returns the (inclusive) start position.
    fn start(&self) -> PosType;

    /// Returns the (exclusive) end position.
    fn end(&self) -> PosType;

    /// Checks whether both intervals lie on the same contig.
    fn same_contig(
        &self,
        other: &Self,
    ) -> bool {
        self.contig() == other.contig()
    }

    /// Number of bases strictly between two intervals.
    ///
    /// Overlapping or abutting intervals have a gap of zero. Intervals on
    /// different contigs must report a gap no smaller than any usable gap
    /// threshold, so that they are never merged.
    fn gap_len(
        &self,
        other: &Self,
    ) -> PosType;

    /// Minimal interval covering both `self` and `other`.
    ///
    /// Only meaningful for intervals on the same contig.
    fn join(
        &self,
        other: &Self,
    ) -> Self;
}

/// A closed-open interval `[start, end)` on a contig.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "SvIntervalFields")]
pub struct SvInterval {
    contig: ContigId,
    start:  PosType,
    end:    PosType,
}

/// Unchecked serialized form of [`SvInterval`].
#[derive(Deserialize)]
struct SvIntervalFields {
    contig: ContigId,
    start:  PosType,
    end:    PosType,
}

impl TryFrom<SvIntervalFields> for SvInterval {
    type Error = anyhow::Error;

    fn try_from(value: SvIntervalFields) -> Result<Self, Self::Error> {
        Self::try_new(value.contig, value.start, value.end)
    }
}

impl SvInterval {
    /// Creates a new `SvInterval`.
    pub fn new(
        contig: ContigId,
        start: PosType,
        end: PosType,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self { contig, start, end }
    }

    /// Creates a new `SvInterval`, failing if `start > end`.
    pub fn try_new(
        contig: ContigId,
        start: PosType,
        end: PosType,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            start <= end,
            "Start position must be less than or equal to end position ({}:{}-{})",
            contig,
            start,
            end
        );
        Ok(Self { contig, start, end })
    }

    /// Returns the length of the interval.
    pub fn length(&self) -> PosType {
        self.end - self.start
    }

    /// Checks if two intervals share at least one base.
    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        self.contig == other.contig
            && self.start < other.end
            && other.start < self.end
    }

    /// Returns the start position of the interval.
    pub fn start_gpos(&self) -> GenomicPosition {
        GenomicPosition::new(self.contig, self.start)
    }
}

impl ClusterLocus for SvInterval {
    fn contig(&self) -> ContigId {
        self.contig
    }

    fn start(&self) -> PosType {
        self.start
    }

    fn end(&self) -> PosType {
        self.end
    }

    fn gap_len(
        &self,
        other: &Self,
    ) -> PosType {
        if !self.same_contig(other) {
            return PosType::MAX;
        }
        let left_end = self.end.min(other.end);
        let right_start = self.start.max(other.start);
        right_start.saturating_sub(left_end)
    }

    fn join(
        &self,
        other: &Self,
    ) -> Self {
        Self {
            contig: self.contig,
            start:  self.start.min(other.start),
            end:    self.end.max(other.end),
        }
    }
}

impl Display for SvInterval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}
