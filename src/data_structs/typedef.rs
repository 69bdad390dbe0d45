/// Numeric identifier of a reference contig (chromosome). Contigs are
/// ordered by their identifier in the globally sorted evidence stream.
pub type ContigId = u32;
pub type PosType = u32;
pub type WeightType = u32;
