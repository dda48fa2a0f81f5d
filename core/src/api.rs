use crate::analysis::assess_series;
use crate::selection::select_from_assessments;
use crate::types::{RawSlice, SelectionResult, SelectorConfig};
use log::info;

/// Main entry point for CT slice selection
///
/// Runs the per-slice assessment stage in parallel, then the sequential
/// quota stage, and returns the sorted selection.
///
/// # Example
///
/// ```
/// use ctslice_core::{RawSlice, SelectionStrategy, SliceSelector};
///
/// // Twelve lung slices with increasing spread, one undecodable slice
/// let mut series: Vec<Option<RawSlice>> = (0..12)
///     .map(|i| {
///         let samples = (0..400)
///             .map(|p| if p % 2 == 0 { -700 - i * 10 } else { -700 + i * 10 })
///             .collect();
///         Some(RawSlice::new(20, 20, samples))
///     })
///     .collect();
/// series.insert(3, None);
///
/// let result = SliceSelector::default().select(&series, 5);
///
/// assert_eq!(result.strategy, SelectionStrategy::Stratified);
/// assert_eq!(result.total_slices, 13);
/// assert_eq!(result.qualifying_count, 12);
/// assert_eq!(result.selected_count(), 5);
/// assert!(!result.selected_indices.contains(&3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SliceSelector {
    config: SelectorConfig,
}

impl SliceSelector {
    /// Creates a selector with the given configuration
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Selects up to `target` representative slices from a series
    ///
    /// `None` entries are slices that failed to decode; they keep their index
    /// and are never selected.
    pub fn select(&self, series: &[Option<RawSlice>], target: usize) -> SelectionResult {
        let assessments = assess_series(series, &self.config);
        let result = select_from_assessments(&assessments, target, &self.config);

        info!(
            "Selected {} of {} slices ({} with lung tissue, {} strategy)",
            result.selected_count(),
            result.total_slices,
            result.qualifying_count,
            result.strategy
        );

        result
    }
}

/// Selects slices with the default configuration
pub fn select(series: &[Option<RawSlice>], target: usize) -> SelectionResult {
    SliceSelector::default().select(series, target)
}
