//! Per-slice calibration, lung detection and scoring
//!
//! Every slice is assessed independently, so the series-level entry point
//! maps slices in parallel and keeps results keyed by position.

pub mod classify;
pub mod normalize;
pub mod score;

pub use classify::{band_fraction, contains_lung};
pub use normalize::normalize;
pub use score::pathology_score;

use crate::types::{RawSlice, SelectorConfig, SliceAssessment};
use log::debug;
use rayon::prelude::*;

/// Assesses a single slice
///
/// Absent input or a buffer that cannot be normalized yields
/// [`SliceAssessment::Absent`]. Non-qualifying slices are not scored.
pub fn assess_slice(slice: Option<&RawSlice>, config: &SelectorConfig) -> SliceAssessment {
    let Some(raw) = slice else {
        return SliceAssessment::Absent;
    };

    let intensities = match normalize(raw) {
        Ok(intensities) => intensities,
        Err(e) => {
            debug!("Slice could not be normalized: {}", e);
            return SliceAssessment::Absent;
        }
    };

    let qualifies = contains_lung(&intensities, config.lung_band, config.min_area_fraction);
    let score = if qualifies {
        pathology_score(&intensities, config.score_band, config.min_scored_pixels)
    } else {
        0.0
    };

    SliceAssessment::Present { qualifies, score }
}

/// Assesses every slice of a series in parallel, preserving order
pub fn assess_series(series: &[Option<RawSlice>], config: &SelectorConfig) -> Vec<SliceAssessment> {
    series
        .par_iter()
        .enumerate()
        .map(|(index, slice)| {
            let assessment = assess_slice(slice.as_ref(), config);
            debug!("Slice {}: {:?}", index, assessment);
            assessment
        })
        .collect()
}
