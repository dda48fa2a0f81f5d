//! Quota-based slice selection
//!
//! Turns per-slice assessments into the final index list. Three paths exist,
//! checked in order:
//! 1. no qualifying slices: the first `target` present slices (fallback)
//! 2. at most `passthrough_limit` qualifying slices: all of them (passthrough)
//! 3. otherwise five-region quota sampling (stratified)

mod aggregate;
mod quota;

pub use aggregate::aggregate;
pub use quota::{allocate, sample_region, Candidate};

use crate::types::{SelectionResult, SelectionStrategy, SelectorConfig, SliceAssessment};

/// Selects slice indices from a fully assessed series
pub fn select_from_assessments(
    assessments: &[SliceAssessment],
    target: usize,
    config: &SelectorConfig,
) -> SelectionResult {
    let total_slices = assessments.len();
    let qualifying: Vec<Candidate> = assessments
        .iter()
        .enumerate()
        .filter(|(_, assessment)| assessment.qualifies())
        .map(|(index, assessment)| Candidate::new(index, assessment.score()))
        .collect();

    if qualifying.is_empty() {
        let selected_indices = assessments
            .iter()
            .enumerate()
            .filter(|(_, assessment)| assessment.is_present())
            .map(|(index, _)| index)
            .take(target)
            .collect();
        return SelectionResult {
            selected_indices,
            total_slices,
            qualifying_count: 0,
            strategy: SelectionStrategy::Fallback,
            coverage: Vec::new(),
        };
    }

    if qualifying.len() <= config.passthrough_limit {
        return SelectionResult {
            selected_indices: qualifying.iter().map(|c| c.index).collect(),
            total_slices,
            qualifying_count: qualifying.len(),
            strategy: SelectionStrategy::Passthrough,
            coverage: Vec::new(),
        };
    }

    let coverage = allocate(&qualifying, target, config.high_score_share);
    aggregate(coverage, total_slices, qualifying.len())
}
