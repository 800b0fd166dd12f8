//! Cluster validity.
//!
//! Scores a partition of planar points with the CDbw (Composing Density
//! Between and With clusters) index. The tensor-facing entry point is
//! [`CdbwAlgorithms`], implemented for every backend; the host-side engine
//! lives in [`cdbw`].

pub mod cdbw;
mod cpu;
mod error;
pub mod impl_generic;
pub mod traits;
mod validation;

#[cfg(feature = "cuda")]
mod cuda;
#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{CdbwError, CdbwResult};
pub use traits::cdbw::{CdbwAlgorithms, CdbwOptions, CdbwScore, SingletonPolicy};
pub use validation::*;
