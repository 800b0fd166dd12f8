//! CUDA implementation of CDbw.

use crate::cluster::impl_generic::cdbw_impl;
use crate::cluster::traits::cdbw::{CdbwAlgorithms, CdbwOptions, CdbwScore};
use numr::error::Result;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl CdbwAlgorithms<CudaRuntime> for CudaClient {
    fn cdbw(
        &self,
        data: &Tensor<CudaRuntime>,
        labels: &Tensor<CudaRuntime>,
        options: &CdbwOptions,
    ) -> Result<CdbwScore<CudaRuntime>> {
        cdbw_impl(self, data, labels, options)
    }
}
