pub use crate::data_structs::typedef::{
    ContigId,
    PosType,
    WeightType,
};
pub use crate::data_structs::{
    ClusterLocus,
    Evidence,
    EvidenceKind,
    GenomicPosition,
    PartitionBounds,
    PartitionBoundsSource,
    PartitionMetadata,
    StreamItem,
    SvInterval,
};
pub use crate::tools::cluster::{
    cluster_partition,
    cluster_partitions,
    cluster_single_shard,
    ClusterConfig,
    EvidenceClusterer,
    PartitionEdges,
    ReducerState,
};
pub use crate::utils::{
    FlatMapGluer,
    GlueExt,
};
