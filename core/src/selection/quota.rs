use crate::types::{RegionCoverage, REGION_BANDS};
use std::collections::{BTreeSet, HashSet};

/// A qualifying slice entering quota allocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Original series index
    pub index: usize,
    /// Pathology-likelihood score
    pub score: f64,
}

impl Candidate {
    /// Creates a new Candidate
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// Splits the qualifying slices into the five bands and samples each one
///
/// Each band receives `target / 5` slices; the `target % 5` leftover units go
/// one at a time, in table order, to non-empty bands flagged
/// `receives_remainder`. Units left after those bands are not redistributed.
///
/// # Arguments
///
/// * `qualifying` - Lung-positive slices in series order
/// * `target` - Requested total number of slices
/// * `high_score_share` - Fraction of each band quota filled by top scores
///
/// # Returns
///
/// One coverage entry per region, in apex-to-base order. Empty bands carry a
/// zero quota.
pub fn allocate(qualifying: &[Candidate], target: usize, high_score_share: f64) -> Vec<RegionCoverage> {
    let base_quota = target / REGION_BANDS.len();
    let mut remainder = target % REGION_BANDS.len();

    REGION_BANDS
        .iter()
        .map(|band| {
            let candidates = &qualifying[band.range(qualifying.len())];
            if candidates.is_empty() {
                return RegionCoverage {
                    region: band.region,
                    quota: 0,
                    candidates: 0,
                    selected: Vec::new(),
                };
            }

            let mut quota = base_quota;
            if remainder > 0 && band.receives_remainder {
                quota += 1;
                remainder -= 1;
            }

            RegionCoverage {
                region: band.region,
                quota,
                candidates: candidates.len(),
                selected: sample_region(candidates, quota, high_score_share),
            }
        })
        .collect()
}

/// Hybrid sampling within one band
///
/// A band that fits its quota is taken whole. Otherwise
/// `floor(quota * high_score_share)` top-scoring candidates are kept and the
/// rest of the quota is filled by fixed-stride picks over the remaining
/// candidates in band order.
///
/// # Arguments
///
/// * `candidates` - Band members in series order
/// * `quota` - Number of slices to keep
/// * `high_score_share` - Fraction of the quota taken by descending score
///
/// # Returns
///
/// Ascending series indices, at most `quota` of them
pub fn sample_region(candidates: &[Candidate], quota: usize, high_score_share: f64) -> Vec<usize> {
    if candidates.len() <= quota {
        return candidates.iter().map(|c| c.index).collect();
    }

    let high_count = ((quota as f64 * high_score_share) as usize).min(quota);
    let uniform_count = quota - high_count;

    // Stable sort: equal scores keep band order
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let high: HashSet<usize> = ranked[..high_count].iter().map(|c| c.index).collect();

    let remaining: Vec<usize> = candidates
        .iter()
        .map(|c| c.index)
        .filter(|index| !high.contains(index))
        .collect();

    let mut selected: BTreeSet<usize> = high.into_iter().collect();
    if !remaining.is_empty() && uniform_count > 0 {
        let stride = (remaining.len() / uniform_count).max(1);
        let picks = uniform_count.min(remaining.len());
        selected.extend((0..picks).map(|i| remaining[i * stride]));
    }

    selected.into_iter().collect()
}
