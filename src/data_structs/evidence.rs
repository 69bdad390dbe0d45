use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::coords::{
    ClusterLocus,
    SvInterval,
};
use crate::data_structs::typedef::WeightType;
use crate::getter_fn;

/// Origin of an [`Evidence`] record.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum EvidenceKind {
    /// Raw signal extracted from reads.
    Raw,
    /// A finalized cluster built from one or more merged records.
    ClusterSummary,
}

impl Display for EvidenceKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            EvidenceKind::Raw => write!(f, "raw"),
            EvidenceKind::ClusterSummary => write!(f, "cluster"),
        }
    }
}

/// One unit of breakpoint signal: a location and an integer support weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence<L = SvInterval> {
    location: L,
    weight:   WeightType,
    kind:     EvidenceKind,
}

impl<L: ClusterLocus> Evidence<L> {
    /// Creates a raw evidence record.
    pub fn raw(
        location: L,
        weight: WeightType,
    ) -> Self {
        Self {
            location,
            weight,
            kind: EvidenceKind::Raw,
        }
    }

    /// Creates a cluster summary record.
    pub fn cluster_summary(
        location: L,
        weight: WeightType,
    ) -> Self {
        Self {
            location,
            weight,
            kind: EvidenceKind::ClusterSummary,
        }
    }

    getter_fn!(location, L);

    pub fn weight(&self) -> WeightType {
        self.weight
    }

    pub fn kind(&self) -> EvidenceKind {
        self.kind
    }

    pub fn is_cluster_summary(&self) -> bool {
        self.kind == EvidenceKind::ClusterSummary
    }

    /// Raw records left in a partition's output sit next to a partition
    /// boundary and still have to be merged across partitions.
    pub fn needs_reconciliation(&self) -> bool {
        self.kind == EvidenceKind::Raw
    }

    pub fn into_location(self) -> L {
        self.location
    }
}

impl<L: Display> Display for Evidence<L> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} w={} ({})", self.location, self.weight, self.kind)
    }
}

/// Input element of the clustering reducer.
///
/// `EndOfPartition` is the terminal sentinel pushed after the last record of
/// a partition. It flushes the pending cluster and is never emitted itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem<L = SvInterval> {
    Evidence(Evidence<L>),
    EndOfPartition,
}

impl<L> From<Evidence<L>> for StreamItem<L> {
    fn from(value: Evidence<L>) -> Self {
        StreamItem::Evidence(value)
    }
}
