//! This module provides the analysis tools of the bpcluster crate.
//!
//! - [`cluster`]: streaming, partition-aware clustering of breakpoint
//!   evidence into candidate structural-variant intervals.
pub mod cluster;
