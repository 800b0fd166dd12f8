//! Generic CDbw implementation.
//!
//! The index is driven by data-dependent control flow (farthest-first picks,
//! mutual nearest matching, per-point radius queries), so the O(n) point
//! set and labels are transferred to the host once and scored there.

use crate::cluster::cdbw::{CdbwEngine, Partition, points_from_interleaved};
use crate::cluster::traits::cdbw::{CdbwOptions, CdbwScore};
use crate::cluster::validation::{validate_cluster_dtype, validate_data_planar, validate_labels};
use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Generic CDbw implementation.
pub fn cdbw_impl<R, C>(
    _client: &C,
    data: &Tensor<R>,
    labels: &Tensor<R>,
    options: &CdbwOptions,
) -> Result<CdbwScore<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    validate_cluster_dtype(data.dtype(), "cdbw")?;
    validate_data_planar(data.shape(), "cdbw")?;
    let n = data.shape()[0];
    validate_labels(labels.shape(), labels.dtype(), n, "cdbw")?;

    let dtype = data.dtype();
    let device = data.device();

    let coords: Vec<f64> = match dtype {
        DType::F64 => data.contiguous().to_vec::<f64>(),
        DType::F32 => data
            .contiguous()
            .to_vec::<f32>()
            .into_iter()
            .map(f64::from)
            .collect(),
        _ => return Err(Error::UnsupportedDType { dtype, op: "cdbw" }),
    };
    let label_vec: Vec<i64> = labels.contiguous().to_vec::<i64>();

    let points = points_from_interleaved(&coords);
    let partition = Partition::from_labels(&label_vec);
    let n_clusters = partition.cluster_count();

    let mut engine = CdbwEngine::new(&partition, &points, options.clone())?;
    let cdbw = engine.compute(options.n_representatives)?;

    let (separation, compactness, cohesion) = match engine.scores() {
        Some(s) => (s.separation, s.compactness, s.cohesion),
        None => (f64::NAN, f64::NAN, f64::NAN),
    };

    let scalar = |v: f64| Tensor::<R>::full_scalar(&[], dtype, v, device);
    Ok(CdbwScore {
        cdbw: scalar(cdbw),
        separation: scalar(separation),
        compactness: scalar(compactness),
        cohesion: scalar(cohesion),
        n_clusters,
    })
}
