//! Partition-aware clustering of breakpoint evidence.
//!
//! A sorted evidence stream is split into partitions that are processed
//! independently. Inside one partition, [`EvidenceClusterer`] merges
//! neighbouring evidence into cluster summaries, except near the partition
//! boundaries described by [`PartitionEdges`]: evidence there is passed
//! through untouched so a later pass can merge clusters spanning two
//! partitions.
//!
//! The clusterer is driven by [`FlatMapGluer`](crate::utils::FlatMapGluer)
//! with [`StreamItem::EndOfPartition`](crate::data_structs::StreamItem) as the
//! sentinel; [`cluster_partition`] and [`cluster_partitions`] wire this up.

mod config;
mod edges;
mod reducer;
mod runner;

pub use config::ClusterConfig;
pub use edges::PartitionEdges;
pub use reducer::{
    ClusterOutput,
    EvidenceClusterer,
    ReducerState,
};
pub use runner::{
    cluster_partition,
    cluster_partitions,
    cluster_single_shard,
};
