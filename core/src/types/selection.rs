use super::Region;
use std::fmt;

/// Which path produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SelectionStrategy {
    /// No lung slices found; first valid slices in series order
    Fallback,
    /// Too few lung slices to stratify; all of them returned
    Passthrough,
    /// Five-region quota sampling
    Stratified,
}

impl SelectionStrategy {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SelectionStrategy::Fallback => "fallback",
            SelectionStrategy::Passthrough => "passthrough",
            SelectionStrategy::Stratified => "stratified",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Per-region outcome of quota sampling
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RegionCoverage {
    pub region: Region,
    /// Slices the region was allowed to contribute
    pub quota: usize,
    /// Qualifying slices that fell into the band
    pub candidates: usize,
    /// Original series indices chosen, ascending
    pub selected: Vec<usize>,
}

impl RegionCoverage {
    /// Number of slices chosen from this region
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

/// Final output of slice selection
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SelectionResult {
    /// Original series indices, strictly ascending
    pub selected_indices: Vec<usize>,
    /// Length of the input series, absent slices included
    pub total_slices: usize,
    /// Slices in which target tissue was detected
    pub qualifying_count: usize,
    pub strategy: SelectionStrategy,
    /// Per-region breakdown; empty unless `strategy` is `Stratified`
    pub coverage: Vec<RegionCoverage>,
}

impl SelectionResult {
    /// Number of selected slices
    pub fn selected_count(&self) -> usize {
        self.selected_indices.len()
    }

    /// Coverage entry for a region, if stratified sampling ran
    pub fn region(&self, region: Region) -> Option<&RegionCoverage> {
        self.coverage.iter().find(|c| c.region == region)
    }
}
