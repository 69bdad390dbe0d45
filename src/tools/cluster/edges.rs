use log::debug;

use crate::data_structs::typedef::{
    ContigId,
    PosType,
};
use crate::data_structs::{
    ClusterLocus,
    PartitionBoundsSource,
};

/// A half-open coordinate zone on one contig next to a partition boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeZone {
    contig:   ContigId,
    boundary: i64,
}

/// Zones near the start and end of a partition where local clustering is
/// suppressed.
///
/// The leading zone covers starts below the last start of the previous
/// partition plus the edge width. The trailing zone covers starts at or
/// above the first start of the next partition minus the edge width. A zone
/// is absent for the first/last partition and next to a partition without
/// mapped data.
///
/// Immutable once built; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionEdges {
    leading:  Option<EdgeZone>,
    trailing: Option<EdgeZone>,
}

impl PartitionEdges {
    /// Edges that never trigger. Used when the stream is not partitioned.
    pub fn none() -> Self {
        Self::default()
    }

    /// Computes the edges of partition `partition_idx`.
    pub fn new<M: PartitionBoundsSource + ?Sized>(
        partition_idx: usize,
        metadata: &M,
        edge_width: PosType,
    ) -> Self {
        let width = i64::from(edge_width);

        let leading = if partition_idx == 0 {
            None
        }
        else {
            let bounds = metadata.partition_bounds(partition_idx - 1);
            bounds.last().map(|last| {
                EdgeZone {
                    contig:   last.contig(),
                    boundary: i64::from(last.position()) + width,
                }
            })
        };

        let trailing = if partition_idx + 1 >= metadata.n_partitions() {
            None
        }
        else {
            let bounds = metadata.partition_bounds(partition_idx + 1);
            bounds.first().map(|first| {
                EdgeZone {
                    contig:   first.contig(),
                    boundary: i64::from(first.position()) - width,
                }
            })
        };

        let edges = Self { leading, trailing };
        debug!("Partition {} edges: {:?}", partition_idx, edges);
        edges
    }

    /// Checks if `location` starts inside the leading zone.
    pub fn on_leading_edge<L: ClusterLocus>(
        &self,
        location: &L,
    ) -> bool {
        self.leading.is_some_and(|zone| {
            location.contig() == zone.contig
                && i64::from(location.start()) < zone.boundary
        })
    }

    /// Checks if `location` starts inside the trailing zone.
    pub fn on_trailing_edge<L: ClusterLocus>(
        &self,
        location: &L,
    ) -> bool {
        self.trailing.is_some_and(|zone| {
            location.contig() == zone.contig
                && i64::from(location.start()) >= zone.boundary
        })
    }

    pub fn on_edge<L: ClusterLocus>(
        &self,
        location: &L,
    ) -> bool {
        self.on_leading_edge(location) || self.on_trailing_edge(location)
    }

    /// Returns `(contig, boundary)` of the leading zone, if any.
    pub fn leading_boundary(&self) -> Option<(ContigId, i64)> {
        self.leading.map(|zone| (zone.contig, zone.boundary))
    }

    /// Returns `(contig, boundary)` of the trailing zone, if any.
    pub fn trailing_boundary(&self) -> Option<(ContigId, i64)> {
        self.trailing.map(|zone| (zone.contig, zone.boundary))
    }
}
