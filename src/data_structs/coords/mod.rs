//! This module defines data structures for representing genomic coordinates.
//!
//! It provides:
//!
//! - [`GenomicPosition`]: a single point on a genome, specified by a contig
//!   identifier and a position.
//! - [`SvInterval`]: a closed-open range `[start, end)` on a single contig.
//! - [`ClusterLocus`]: the contract a location type has to satisfy to be
//!   clustered. [`SvInterval`] is the implementation shipped with the crate.
//!
//! Contigs are identified by a numeric [`ContigId`](super::typedef::ContigId)
//! only; no further coordinate-system semantics are attached to them.

mod gpos;
mod interval;

pub use gpos::GenomicPosition;
pub use interval::{
    ClusterLocus,
    SvInterval,
};

#[cfg(test)]
mod tests;
