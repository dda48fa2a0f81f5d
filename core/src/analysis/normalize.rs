use crate::error::{CtSliceError, Result};
use crate::types::RawSlice;
use ndarray::Array2;

/// Converts a raw slice into calibrated intensities
///
/// Applies `raw * slope + intercept` to every sample and reshapes the result
/// to `rows x columns`.
///
/// # Errors
///
/// Returns a shape error if the pixel buffer is empty or its length does not
/// match the declared dimensions.
pub fn normalize(raw: &RawSlice) -> Result<Array2<f32>> {
    if raw.samples.is_empty() {
        return Err(CtSliceError::ShapeError("empty pixel buffer".to_string()));
    }

    let calibration = raw.calibration;
    let values: Vec<f32> = raw
        .samples
        .iter()
        .map(|&v| calibration.apply(v as f32))
        .collect();

    Ok(Array2::from_shape_vec((raw.rows, raw.columns), values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Calibration;

    #[test]
    fn test_identity_calibration() {
        let raw = RawSlice::new(2, 2, vec![-1000, 0, 40, 1000]);
        let hu = normalize(&raw).unwrap();
        assert_eq!(hu.dim(), (2, 2));
        assert_eq!(hu[[0, 0]], -1000.0);
        assert_eq!(hu[[1, 1]], 1000.0);
    }

    #[test]
    fn test_slope_and_intercept() {
        let raw = RawSlice::new(1, 3, vec![0, 24, 1024])
            .with_calibration(Calibration::new(1.0, -1024.0));
        let hu = normalize(&raw).unwrap();
        assert_eq!(hu.iter().copied().collect::<Vec<_>>(), vec![-1024.0, -1000.0, 0.0]);

        let raw = RawSlice::new(1, 2, vec![10, -10]).with_calibration(Calibration::new(2.5, 1.0));
        let hu = normalize(&raw).unwrap();
        assert_eq!(hu.iter().copied().collect::<Vec<_>>(), vec![26.0, -24.0]);
    }

    #[test]
    fn test_fractional_slope_uses_single_precision() {
        let calibration = Calibration::new(0.3, -1024.7);
        let samples: Vec<i32> = (0..2000).collect();
        let raw = RawSlice::new(40, 50, samples.clone()).with_calibration(calibration);
        let hu = normalize(&raw).unwrap();

        for (value, stored) in hu.iter().zip(samples) {
            assert_eq!(*value, stored as f32 * 0.3_f32 + (-1024.7_f32));
        }
    }

    #[test]
    fn test_row_major_layout() {
        let raw = RawSlice::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let hu = normalize(&raw).unwrap();
        assert_eq!(hu[[0, 2]], 3.0);
        assert_eq!(hu[[1, 0]], 4.0);
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        let raw = RawSlice::new(4, 4, vec![0; 15]);
        assert!(matches!(normalize(&raw), Err(CtSliceError::ShapeError(_))));
    }

    #[test]
    fn test_empty_buffer_is_error() {
        let raw = RawSlice::new(0, 0, Vec::new());
        assert!(matches!(normalize(&raw), Err(CtSliceError::ShapeError(_))));
    }
}
