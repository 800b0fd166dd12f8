//! Generic implementations of cluster validity metrics.

pub mod cdbw;

pub use cdbw::cdbw_impl;
