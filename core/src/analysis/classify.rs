use crate::types::IntensityBand;
use ndarray::Array2;

/// Fraction of pixels strictly inside `band`
///
/// Returns `None` for an empty grid.
pub fn band_fraction(intensities: &Array2<f32>, band: IntensityBand) -> Option<f64> {
    let total = intensities.len();
    if total == 0 {
        return None;
    }
    let inside = intensities.iter().filter(|&&v| band.contains(v)).count();
    Some(inside as f64 / total as f64)
}

/// Coarse lung presence test
///
/// A slice qualifies when the fraction of pixels inside the lung band is at
/// least `min_area_fraction`. This is a threshold test, not a segmentation.
pub fn contains_lung(intensities: &Array2<f32>, band: IntensityBand, min_area_fraction: f64) -> bool {
    band_fraction(intensities, band)
        .map(|fraction| fraction >= min_area_fraction)
        .unwrap_or(false)
}
