//! CPU implementation of CDbw.

use crate::cluster::impl_generic::cdbw_impl;
use crate::cluster::traits::cdbw::{CdbwAlgorithms, CdbwOptions, CdbwScore};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl CdbwAlgorithms<CpuRuntime> for CpuClient {
    fn cdbw(
        &self,
        data: &Tensor<CpuRuntime>,
        labels: &Tensor<CpuRuntime>,
        options: &CdbwOptions,
    ) -> Result<CdbwScore<CpuRuntime>> {
        cdbw_impl(self, data, labels, options)
    }
}
