use anyhow::Context;
use log::warn;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::coords::{
    ClusterLocus,
    GenomicPosition,
};
use crate::data_structs::typedef::{
    ContigId,
    PosType,
};
use crate::getter_fn;

/// First and last mapped positions observed in a partition.
///
/// A partition holding no mapped data has neither, see
/// [`PartitionBounds::UNMAPPED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "PartitionBoundsFields")]
pub struct PartitionBounds {
    first: Option<GenomicPosition>,
    last:  Option<GenomicPosition>,
}

/// Unchecked serialized form of [`PartitionBounds`].
#[derive(Deserialize)]
struct PartitionBoundsFields {
    first: Option<GenomicPosition>,
    last:  Option<GenomicPosition>,
}

impl TryFrom<PartitionBoundsFields> for PartitionBounds {
    type Error = anyhow::Error;

    fn try_from(value: PartitionBoundsFields) -> Result<Self, Self::Error> {
        match (value.first, value.last) {
            (Some(first), Some(last)) => Self::try_new(first, last),
            (None, None) => Ok(Self::UNMAPPED),
            (first, last) => {
                anyhow::bail!(
                    "Partition bounds must set both first and last positions or neither \
                     (first: {:?}, last: {:?})",
                    first,
                    last
                )
            },
        }
    }
}

impl PartitionBounds {
    pub const UNMAPPED: PartitionBounds = PartitionBounds {
        first: None,
        last:  None,
    };

    /// Creates bounds for a partition holding mapped data.
    pub fn new(
        first: GenomicPosition,
        last: GenomicPosition,
    ) -> Self {
        assert!(
            first <= last,
            "First position of a partition must not follow its last position"
        );
        Self {
            first: Some(first),
            last:  Some(last),
        }
    }

    /// Creates bounds for a partition holding mapped data, failing if `first`
    /// follows `last`.
    pub fn try_new(
        first: GenomicPosition,
        last: GenomicPosition,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            first <= last,
            "First position of a partition must not follow its last position ({} > {})",
            first,
            last
        );
        Ok(Self {
            first: Some(first),
            last:  Some(last),
        })
    }

    /// Derives bounds from the (sorted) locations of one partition.
    ///
    /// The first and last start positions encountered are kept, so the
    /// result is only meaningful for input ordered by contig, then start.
    pub fn from_locations<'a, L, I>(locations: I) -> Self
    where
        L: ClusterLocus + 'a,
        I: IntoIterator<Item = &'a L>, {
        let mut bounds = Self::UNMAPPED;
        for location in locations {
            let gpos = GenomicPosition::new(location.contig(), location.start());
            if bounds.first.is_none() {
                bounds.first = Some(gpos);
            }
            bounds.last = Some(gpos);
        }
        bounds
    }

    pub fn is_unmapped(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    pub fn first(&self) -> Option<GenomicPosition> {
        self.first
    }

    pub fn last(&self) -> Option<GenomicPosition> {
        self.last
    }

    pub fn first_contig(&self) -> Option<ContigId> {
        self.first.map(|p| p.contig())
    }

    pub fn first_start(&self) -> Option<PosType> {
        self.first.map(|p| p.position())
    }

    pub fn last_contig(&self) -> Option<ContigId> {
        self.last.map(|p| p.contig())
    }

    pub fn last_start(&self) -> Option<PosType> {
        self.last.map(|p| p.position())
    }
}

/// Read-only access to globally computed per-partition bounds.
pub trait PartitionBoundsSource {
    /// Returns the bounds of partition `idx`.
    fn partition_bounds(
        &self,
        idx: usize,
    ) -> PartitionBounds;

    /// Returns the total number of partitions.
    fn n_partitions(&self) -> usize;
}

/// Precomputed bounds for every partition of a sorted evidence stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartitionMetadata {
    bounds: Vec<PartitionBounds>,
}

impl PartitionMetadata {
    pub fn new(bounds: Vec<PartitionBounds>) -> Self {
        Self { bounds }
    }

    /// Computes metadata from locally available partitions.
    pub fn from_partitions<'a, L, P>(partitions: &'a [P]) -> Self
    where
        L: ClusterLocus + 'a,
        &'a P: IntoIterator<Item = &'a L>, {
        Self {
            bounds: partitions
                .iter()
                .map(|partition| PartitionBounds::from_locations::<L, _>(partition))
                .collect(),
        }
    }

    /// Parses metadata serialized as JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse partition metadata")
    }

    getter_fn!(bounds, Vec<PartitionBounds>);
}

impl From<Vec<PartitionBounds>> for PartitionMetadata {
    fn from(value: Vec<PartitionBounds>) -> Self {
        Self::new(value)
    }
}

impl PartitionBoundsSource for PartitionMetadata {
    fn partition_bounds(
        &self,
        idx: usize,
    ) -> PartitionBounds {
        match self.bounds.get(idx) {
            Some(bounds) => *bounds,
            None => {
                warn!(
                    "Partition index {} out of range ({} partitions), treating as unmapped",
                    idx,
                    self.bounds.len()
                );
                PartitionBounds::UNMAPPED
            },
        }
    }

    fn n_partitions(&self) -> usize {
        self.bounds.len()
    }
}
