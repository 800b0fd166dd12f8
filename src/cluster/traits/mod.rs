//! Cluster validity trait definitions.

pub mod cdbw;
