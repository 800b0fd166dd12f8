//! CUDA implementations of cluster validity metrics.

mod cdbw;
