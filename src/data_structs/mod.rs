//! This module contains the core data structures used throughout the
//! `bpcluster` crate for representing breakpoint evidence and the metadata
//! describing how a sorted evidence stream was split into partitions.
//!
//! Key components of this module include:
//!
//! - [`coords`]: Basic structures for representing genomic locations:
//!   [`GenomicPosition`] for single points and [`SvInterval`] for intervals,
//!   together with the [`ClusterLocus`] contract used by the clustering code.
//! - [`Evidence`] and [`EvidenceKind`]: located, weighted signal records,
//!   either raw or already merged into a cluster summary.
//! - [`StreamItem`]: the element type fed to the clustering reducer, which
//!   carries the end-of-partition sentinel.
//! - [`PartitionBounds`] and [`PartitionMetadata`]: per-partition first/last
//!   mapped positions, exposed through [`PartitionBoundsSource`].
//! - [`typedef`]: type aliases for contig identifiers, positions and weights.

pub mod coords;
mod evidence;
mod partition;
pub mod typedef;

pub use coords::{
    ClusterLocus,
    GenomicPosition,
    SvInterval,
};
pub use evidence::{
    Evidence,
    EvidenceKind,
    StreamItem,
};
pub use partition::{
    PartitionBounds,
    PartitionBoundsSource,
    PartitionMetadata,
};
