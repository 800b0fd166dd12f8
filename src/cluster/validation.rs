//! Validation helpers for cluster validity metrics.

use numr::dtype::DType;
use numr::error::{Error, Result};

/// Validate point set dtype (must be F32 or F64).
pub fn validate_cluster_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate that data is a non-empty planar point set [n, 2].
pub fn validate_data_planar(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires 2D data [n, 2], got {}-D", shape.len()),
        });
    }
    if shape[1] != 2 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} only supports planar points, got {} columns", shape[1]),
        });
    }
    if shape[0] == 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires at least 1 data point"),
        });
    }
    Ok(())
}

/// Validate labels tensor is 1D I64 with one label per point.
pub fn validate_labels(
    shape: &[usize],
    dtype: DType,
    n_points: usize,
    op: &'static str,
) -> Result<()> {
    if shape.len() != 1 {
        return Err(Error::InvalidArgument {
            arg: "labels",
            reason: format!("{op} requires 1D labels, got {}-D", shape.len()),
        });
    }
    if dtype != DType::I64 {
        return Err(Error::InvalidArgument {
            arg: "labels",
            reason: format!("{op} requires I64 labels, got {dtype:?}"),
        });
    }
    if shape[0] != n_points {
        return Err(Error::InvalidArgument {
            arg: "labels",
            reason: format!("{op}: {} labels for {n_points} points", shape[0]),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cluster_dtype() {
        assert!(validate_cluster_dtype(DType::F32, "test").is_ok());
        assert!(validate_cluster_dtype(DType::F64, "test").is_ok());
        assert!(validate_cluster_dtype(DType::I32, "test").is_err());
    }

    #[test]
    fn test_validate_data_planar() {
        assert!(validate_data_planar(&[10, 2], "test").is_ok());
        assert!(validate_data_planar(&[10, 3], "test").is_err());
        assert!(validate_data_planar(&[10], "test").is_err());
        assert!(validate_data_planar(&[0, 2], "test").is_err());
    }

    #[test]
    fn test_validate_labels() {
        assert!(validate_labels(&[10], DType::I64, 10, "test").is_ok());
        assert!(validate_labels(&[10], DType::I32, 10, "test").is_err());
        assert!(validate_labels(&[10, 1], DType::I64, 10, "test").is_err());
        assert!(validate_labels(&[9], DType::I64, 10, "test").is_err());
    }
}
