//! # bpcluster
//!
//! `bpcluster` clusters structural-variant breakpoint evidence into candidate
//! intervals while the evidence stream is split into independently processed
//! partitions.
//!
//! Every evidence record is tied to an interval on a contig and carries an
//! integer support weight. Within one partition, evidence is consumed in
//! sorted order and neighbouring records are merged into cluster summaries.
//! Because a partition only sees a local slice of the global stream, records
//! close to a partition boundary are not merged locally: they are passed
//! through as raw records and left for a reconciliation pass across
//! partitions.
//!
//! ## Structure
//!
//! * [`data_structs`]: intervals ([`SvInterval`], [`ClusterLocus`]),
//!   evidence records ([`Evidence`]) and per-partition bounds metadata
//!   ([`PartitionBounds`], [`PartitionMetadata`]).
//! * [`tools`]: the clustering itself: [`PartitionEdges`] derives the
//!   boundary zones of a partition, [`EvidenceClusterer`] is the per-partition
//!   reducer, and [`cluster_partition`] / [`cluster_partitions`] drive it.
//! * [`utils`]: [`FlatMapGluer`], a lazy flat-map adapter with a one-shot
//!   terminal sentinel, used to flush the reducer at the end of a partition.
//!
//! ## Usage
//!
//! ```
//! use bpcluster::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let evidence = vec![
//!         Evidence::raw(SvInterval::new(0, 0, 10), 1),
//!         Evidence::raw(SvInterval::new(0, 12, 20), 2),
//!     ];
//!     let config = ClusterConfig::default().with_gap_size(5);
//!     let clusters: Vec<_> = cluster_single_shard(&config, evidence)?.collect();
//!
//!     assert_eq!(clusters, vec![Evidence::cluster_summary(
//!         SvInterval::new(0, 0, 20),
//!         3
//!     )]);
//!     Ok(())
//! }
//! ```
//!
//! Logging goes through the [`log`] facade; no logger is installed by the
//! crate.

pub mod data_structs;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
