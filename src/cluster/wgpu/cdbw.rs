//! WebGPU implementation of CDbw.

use crate::cluster::impl_generic::cdbw_impl;
use crate::cluster::traits::cdbw::{CdbwAlgorithms, CdbwOptions, CdbwScore};
use numr::error::Result;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl CdbwAlgorithms<WgpuRuntime> for WgpuClient {
    fn cdbw(
        &self,
        data: &Tensor<WgpuRuntime>,
        labels: &Tensor<WgpuRuntime>,
        options: &CdbwOptions,
    ) -> Result<CdbwScore<WgpuRuntime>> {
        cdbw_impl(self, data, labels, options)
    }
}
