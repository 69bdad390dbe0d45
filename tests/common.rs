#![allow(dead_code)]

use bpcluster::prelude::*;
use rand::{
    Rng,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

/// Generates sorted raw evidence on `n_contigs` contigs.
pub fn generate_evidence(
    seed: u64,
    n_contigs: u32,
    per_contig: usize,
) -> Vec<Evidence> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut evidence = Vec::with_capacity(n_contigs as usize * per_contig);
    for contig in 0..n_contigs {
        let mut start = rng.gen_range(0..1_000u32);
        for _ in 0..per_contig {
            start += rng.gen_range(0..300u32);
            let length = rng.gen_range(1..100u32);
            let weight = rng.gen_range(1..6u32);
            evidence.push(Evidence::raw(
                SvInterval::new(contig, start, start + length),
                weight,
            ));
        }
    }
    evidence
}

/// Straightforward clustering of a whole stream. Returns each cluster with
/// the index of the first record it contains.
pub fn reference_clusters(
    evidence: &[Evidence],
    gap_size: PosType,
) -> Vec<(Evidence, usize)> {
    let mut clusters: Vec<(SvInterval, WeightType, usize)> = Vec::new();
    for (idx, ev) in evidence.iter().enumerate() {
        if let Some((interval, weight, _)) = clusters.last_mut() {
            if interval.contig() == ev.location().contig()
                && interval.gap_len(ev.location()) < gap_size
            {
                *interval = interval.join(ev.location());
                *weight += ev.weight();
                continue;
            }
        }
        clusters.push((*ev.location(), ev.weight(), idx));
    }
    clusters
        .into_iter()
        .map(|(interval, weight, idx)| (Evidence::cluster_summary(interval, weight), idx))
        .collect()
}

/// Splits `evidence` before each of the given (sorted) indices.
pub fn split_at_indices(
    evidence: Vec<Evidence>,
    cuts: &[usize],
) -> Vec<Vec<Evidence>> {
    let mut partitions = Vec::with_capacity(cuts.len() + 1);
    let mut rest = evidence;
    let mut offset = 0;
    for &cut in cuts {
        let tail = rest.split_off(cut - offset);
        partitions.push(rest);
        rest = tail;
        offset = cut;
    }
    partitions.push(rest);
    partitions
}

pub fn total_weight(evidence: &[Evidence]) -> u64 {
    evidence.iter().map(|ev| u64::from(ev.weight())).sum()
}
