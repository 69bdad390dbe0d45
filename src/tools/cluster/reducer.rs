use log::trace;
use smallvec::{
    smallvec,
    SmallVec,
};

use super::PartitionEdges;
use crate::data_structs::typedef::{
    PosType,
    WeightType,
};
use crate::data_structs::{
    ClusterLocus,
    Evidence,
    StreamItem,
};

/// Output of one reducer step: zero, one or two records.
pub type ClusterOutput<L> = SmallVec<[Evidence<L>; 2]>;

/// State carried by [`EvidenceClusterer`] between input elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReducerState<L> {
    Idle,
    /// A cluster under construction. `weight` is the summed weight of every
    /// record merged into `interval` so far, saturating at
    /// `WeightType::MAX`.
    Accumulating { interval: L, weight: WeightType },
}

impl<L> Default for ReducerState<L> {
    fn default() -> Self {
        ReducerState::Idle
    }
}

impl<L: ClusterLocus> ReducerState<L> {
    /// Applies one input element, returning the next state and the records
    /// to emit.
    pub fn transition(
        self,
        item: StreamItem<L>,
        gap_size: PosType,
        edges: &PartitionEdges,
    ) -> (Self, ClusterOutput<L>) {
        let evidence = match item {
            StreamItem::Evidence(evidence) => evidence,
            StreamItem::EndOfPartition => {
                return (ReducerState::Idle, self.finish().into_iter().collect());
            },
        };

        if edges.on_edge(evidence.location()) {
            trace!("Passing edge evidence through: {:?}", evidence.location());
            let output = match self.finish() {
                Some(cluster) => smallvec![cluster, evidence],
                None => smallvec![evidence],
            };
            return (ReducerState::Idle, output);
        }

        match self {
            ReducerState::Idle => {
                let next = ReducerState::Accumulating {
                    interval: evidence.location().clone(),
                    weight:   evidence.weight(),
                };
                (next, SmallVec::new())
            },
            ReducerState::Accumulating { interval, weight }
                if interval.gap_len(evidence.location()) < gap_size =>
            {
                let next = ReducerState::Accumulating {
                    interval: interval.join(evidence.location()),
                    weight:   weight.saturating_add(evidence.weight()),
                };
                (next, SmallVec::new())
            },
            pending @ ReducerState::Accumulating { .. } => {
                let next = ReducerState::Accumulating {
                    interval: evidence.location().clone(),
                    weight:   evidence.weight(),
                };
                (next, pending.finish().into_iter().collect())
            },
        }
    }

    /// Turns a pending accumulation into a cluster summary.
    fn finish(self) -> Option<Evidence<L>> {
        match self {
            ReducerState::Idle => None,
            ReducerState::Accumulating { interval, weight } => {
                trace!("Cluster finalized with weight {}", weight);
                Some(Evidence::cluster_summary(interval, weight))
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ReducerState::Idle)
    }
}

/// Groups a sorted stream of breakpoint evidence of one partition into
/// clusters.
///
/// Interior evidence closer than `gap_size` to the pending cluster is merged
/// into it. Evidence inside the partition edges is never merged: it finalizes
/// the pending cluster and is passed through unchanged, to be reconciled with
/// the neighbouring partition later.
///
/// The clusterer never flushes on its own. A pending cluster is only emitted
/// when another element arrives, so [`StreamItem::EndOfPartition`] has to be
/// pushed after the last record.
#[derive(Debug, Clone)]
pub struct EvidenceClusterer<L> {
    gap_size: PosType,
    edges:    PartitionEdges,
    state:    ReducerState<L>,
}

impl<L: ClusterLocus> EvidenceClusterer<L> {
    pub fn new(
        gap_size: PosType,
        edges: PartitionEdges,
    ) -> Self {
        Self {
            gap_size,
            edges,
            state: ReducerState::Idle,
        }
    }

    /// Clusterer for an unpartitioned stream.
    pub fn single_shard(gap_size: PosType) -> Self {
        Self::new(gap_size, PartitionEdges::none())
    }

    /// Consumes one element and returns the records it releases.
    pub fn apply(
        &mut self,
        item: StreamItem<L>,
    ) -> ClusterOutput<L> {
        let state = std::mem::take(&mut self.state);
        let (state, output) = state.transition(item, self.gap_size, &self.edges);
        self.state = state;
        output
    }

    pub fn state(&self) -> &ReducerState<L> {
        &self.state
    }

    pub fn edges(&self) -> &PartitionEdges {
        &self.edges
    }

    pub fn gap_size(&self) -> PosType {
        self.gap_size
    }
}
