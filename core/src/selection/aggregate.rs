use crate::types::{RegionCoverage, SelectionResult, SelectionStrategy};
use std::collections::BTreeSet;

/// Merges per-region selections into the final result
///
/// Region selections are unioned as a set and emitted in ascending series
/// order, so the result never depends on per-region iteration order.
pub fn aggregate(
    coverage: Vec<RegionCoverage>,
    total_slices: usize,
    qualifying_count: usize,
) -> SelectionResult {
    let selected: BTreeSet<usize> = coverage
        .iter()
        .flat_map(|c| c.selected.iter().copied())
        .collect();

    SelectionResult {
        selected_indices: selected.into_iter().collect(),
        total_slices,
        qualifying_count,
        strategy: SelectionStrategy::Stratified,
        coverage,
    }
}
