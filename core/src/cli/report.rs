use crate::types::{SelectionResult, SelectionStrategy, REGION_BANDS};
use std::fmt;

/// Text report of region coverage for a selection
///
/// Written to stderr by the binary; never part of the JSON output.
pub struct CoverageReport<'a> {
    result: &'a SelectionResult,
}

impl<'a> CoverageReport<'a> {
    /// Creates a new coverage report
    pub fn new(result: &'a SelectionResult) -> Self {
        Self { result }
    }
}

impl<'a> fmt::Display for CoverageReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slice Coverage")?;
        writeln!(f, "==============")?;
        writeln!(f, "Strategy:   {}", self.result.strategy)?;

        match self.result.strategy {
            SelectionStrategy::Stratified => {
                for band in REGION_BANDS.iter() {
                    let selected = self
                        .result
                        .region(band.region)
                        .map(|c| c.selected_count())
                        .unwrap_or(0);
                    writeln!(
                        f,
                        "  {:<8} ({:>7}): {:>4} slices - {}",
                        band.region,
                        band.percent_label(),
                        selected,
                        band.region.typical_findings()
                    )?;
                }
            }
            SelectionStrategy::Passthrough => {
                writeln!(f, "  Too few lung slices to stratify; all returned")?;
            }
            SelectionStrategy::Fallback => {
                writeln!(f, "  No lung slices detected; first valid slices returned")?;
            }
        }

        write!(
            f,
            "Total:      {} slices from {} lung slices ({} in series)",
            self.result.selected_count(),
            self.result.qualifying_count,
            self.result.total_slices
        )
    }
}
