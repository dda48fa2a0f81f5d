use crate::types::IntensityBand;
use ndarray::{Array1, Array2};

/// Pathology-likelihood score of a calibrated slice
///
/// Variance (population, `ddof = 0`) of the pixels strictly inside
/// `band`. Returns 0 when fewer than `min_pixels` pixels fall in the band or
/// when the result is not finite. A 0 score means "unscored" and sorts last.
pub fn pathology_score(intensities: &Array2<f32>, band: IntensityBand, min_pixels: usize) -> f64 {
    let values: Array1<f64> = intensities
        .iter()
        .copied()
        .filter(|&v| band.contains(v))
        .map(f64::from)
        .collect();

    if values.is_empty() || values.len() < min_pixels {
        return 0.0;
    }

    let variance = values.var(0.0);
    if variance.is_finite() {
        variance
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE_BAND: IntensityBand = IntensityBand {
        lower: -1000.0,
        upper: -200.0,
    };

    #[test]
    fn test_too_few_pixels_scores_zero() {
        // 99 masked pixels with high spread
        let image = Array2::from_shape_fn((10, 10), |(r, c)| match r * 10 + c {
            0 => 500.0,
            i if i % 2 == 0 => -900.0,
            _ => -300.0,
        });
        assert_eq!(pathology_score(&image, SCORE_BAND, 100), 0.0);
    }

    #[test]
    fn test_variance_of_masked_pixels() {
        // 200 masked pixels split evenly between -800 and -400, 56 excluded
        let image = Array2::from_shape_fn((16, 16), |(r, c)| match r * 16 + c {
            i if i < 100 => -800.0,
            i if i < 200 => -400.0,
            _ => 1000.0,
        });
        let score = pathology_score(&image, SCORE_BAND, 100);
        assert!((score - 40_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_region_scores_zero_variance() {
        let image = Array2::from_elem((12, 12), -700.0_f32);
        assert_eq!(pathology_score(&image, SCORE_BAND, 100), 0.0);
    }

    #[test]
    fn test_band_edges_are_excluded() {
        let image = Array2::from_shape_fn((20, 20), |(r, _)| if r % 2 == 0 { -1000.0 } else { -200.0 });
        assert_eq!(pathology_score(&image, SCORE_BAND, 100), 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = Array2::<f32>::zeros((0, 0));
        assert_eq!(pathology_score(&empty, SCORE_BAND, 100), 0.0);
        assert_eq!(pathology_score(&empty, SCORE_BAND, 0), 0.0);

        let nan = Array2::from_elem((20, 20), f32::NAN);
        assert_eq!(pathology_score(&nan, SCORE_BAND, 100), 0.0);
    }

    #[test]
    fn test_wider_spread_scores_higher() {
        let narrow = Array2::from_shape_fn((20, 20), |(r, c)| if (r + c) % 2 == 0 { -650.0 } else { -550.0 });
        let wide = Array2::from_shape_fn((20, 20), |(r, c)| if (r + c) % 2 == 0 { -900.0 } else { -300.0 });
        assert!(
            pathology_score(&wide, SCORE_BAND, 100) > pathology_score(&narrow, SCORE_BAND, 100)
        );
    }
}
