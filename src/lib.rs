//! cdbw - Density-based cluster validity for planar point sets
//!
//! Computes the CDbw (Composing Density Between and With clusters) index of a
//! clustering. Each cluster is described by a handful of well-scattered
//! representative points; the index rewards clusters that are far apart with
//! sparse space between them (separation) and that stay dense as their
//! representatives are shrunk toward the centroid (compactness, cohesion).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  cluster::CdbwAlgorithms  (CPU, CUDA, WebGPU clients)    │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ host transfer
//! ┌──────────────────────────▼──────────────────────────────┐
//! │  cluster::cdbw::CdbwEngine                               │
//! │    aggregates → representatives → RCR pairs → density   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ radius queries
//! ┌──────────────────────────▼──────────────────────────────┐
//! │  spatial::SpatialIndex  (KD-tree)                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cluster`] - CDbw engine, tensor trait, options and errors
//! - [`spatial`] - KD-tree radius search over planar points
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Accept tensors living on CUDA devices | numr/cuda |
//! | `wgpu`  | Accept tensors living on WebGPU devices | numr/wgpu |
//!
//! # Example
//!
//! ```ignore
//! use cdbw::cluster::{CdbwAlgorithms, CdbwOptions};
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let data = Tensor::<CpuRuntime>::from_slice(
//!     &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 10.0, 0.0, 11.0, 0.0, 10.0, 1.0],
//!     &[6, 2],
//!     &device,
//! );
//! let labels = Tensor::<CpuRuntime>::from_slice(&[0i64, 0, 0, 1, 1, 1], &[6], &device);
//!
//! let score = client.cdbw(&data, &labels, &CdbwOptions::default())?;
//! let value: f64 = score.cdbw.item()?;
//! ```

pub mod cluster;
pub mod spatial;
