use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use super::{
    ClusterConfig,
    EvidenceClusterer,
    PartitionEdges,
};
use crate::data_structs::{
    ClusterLocus,
    Evidence,
    PartitionBoundsSource,
    StreamItem,
};
use crate::utils::GlueExt;

impl<L: ClusterLocus> EvidenceClusterer<L> {
    /// Lazily clusters `evidence`, pushing [`StreamItem::EndOfPartition`]
    /// after the last record so the final cluster is flushed.
    pub fn cluster_stream<I>(
        mut self,
        evidence: I,
    ) -> impl Iterator<Item = Evidence<L>>
    where
        I: IntoIterator<Item = Evidence<L>>, {
        evidence
            .into_iter()
            .map(StreamItem::Evidence)
            .glue_flat_map_with_sentinel(
                move |item| self.apply(item),
                StreamItem::EndOfPartition,
            )
    }
}

/// Clusters the sorted evidence of partition `partition_idx`.
///
/// Evidence within `config.edge_width` of a neighbouring partition is passed
/// through as raw records.
pub fn cluster_partition<L, M, I>(
    partition_idx: usize,
    metadata: &M,
    config: &ClusterConfig,
    evidence: I,
) -> anyhow::Result<impl Iterator<Item = Evidence<L>>>
where
    L: ClusterLocus,
    M: PartitionBoundsSource + ?Sized,
    I: IntoIterator<Item = Evidence<L>>, {
    config.validate()?;
    anyhow::ensure!(
        partition_idx < metadata.n_partitions(),
        "Partition index {} out of range ({} partitions)",
        partition_idx,
        metadata.n_partitions()
    );
    let edges = PartitionEdges::new(partition_idx, metadata, config.edge_width);
    Ok(EvidenceClusterer::new(config.gap_size, edges).cluster_stream(evidence))
}

/// Clusters a stream that was not split into partitions.
pub fn cluster_single_shard<L, I>(
    config: &ClusterConfig,
    evidence: I,
) -> anyhow::Result<impl Iterator<Item = Evidence<L>>>
where
    L: ClusterLocus,
    I: IntoIterator<Item = Evidence<L>>, {
    config.validate()?;
    Ok(EvidenceClusterer::single_shard(config.gap_size).cluster_stream(evidence))
}

/// Clusters every partition in parallel, one clusterer per partition.
///
/// `partitions[i]` must hold the sorted evidence of partition `i` as
/// described by `metadata`.
pub fn cluster_partitions<L, M>(
    metadata: &M,
    config: &ClusterConfig,
    partitions: Vec<Vec<Evidence<L>>>,
) -> anyhow::Result<Vec<Vec<Evidence<L>>>>
where
    L: ClusterLocus + Send,
    M: PartitionBoundsSource + Sync + ?Sized, {
    config.validate()?;
    if partitions.len() != metadata.n_partitions() {
        anyhow::bail!(
            "Got {} partitions but metadata describes {}",
            partitions.len(),
            metadata.n_partitions()
        );
    }

    let result = partitions
        .into_par_iter()
        .enumerate()
        .map(|(idx, evidence)| {
            let n_input = evidence.len();
            let edges = PartitionEdges::new(idx, metadata, config.edge_width);
            let output = EvidenceClusterer::new(config.gap_size, edges)
                .cluster_stream(evidence)
                .collect_vec();
            debug!(
                "Partition {}: {} records in, {} records out ({} unreconciled)",
                idx,
                n_input,
                output.len(),
                output
                    .iter()
                    .filter(|ev| ev.needs_reconciliation())
                    .count()
            );
            output
        })
        .collect();
    Ok(result)
}
