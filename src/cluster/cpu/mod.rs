//! CPU implementations of cluster validity metrics.

mod cdbw;
