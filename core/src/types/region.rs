use std::fmt;
use std::ops::Range;

/// Anatomical band of the chest, apex to base
///
/// Bands are defined over the positional index space of the qualifying
/// (lung-positive) slices, not over the full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "UPPERCASE"))]
pub enum Region {
    Apex,
    Upper,
    Central,
    Lower,
    Base,
}

impl Region {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Region::Apex => "APEX",
            Region::Upper => "UPPER",
            Region::Central => "CENTRAL",
            Region::Lower => "LOWER",
            Region::Base => "BASE",
        }
    }

    /// Findings typically located in this band
    pub fn typical_findings(&self) -> &'static str {
        match self {
            Region::Apex => "TB, apical nodules",
            Region::Upper => "COPD, upper masses",
            Region::Central => "hilar findings",
            Region::Lower => "ILD, pneumonia",
            Region::Base => "effusions, atelectasis",
        }
    }

    /// Returns the band definition for this region
    pub fn band(&self) -> &'static RegionBand {
        match self {
            Region::Apex => &REGION_BANDS[0],
            Region::Upper => &REGION_BANDS[1],
            Region::Central => &REGION_BANDS[2],
            Region::Lower => &REGION_BANDS[3],
            Region::Base => &REGION_BANDS[4],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.simple_name())
    }
}

/// Fractional interval of one region plus its remainder priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBand {
    pub region: Region,
    /// Inclusive start fraction
    pub start: f64,
    /// Exclusive end fraction (the last band ends at 1.0 and covers the tail)
    pub end: f64,
    /// Whether this region may absorb a unit of `target % 5`
    pub receives_remainder: bool,
}

impl RegionBand {
    /// Positional range `[floor(n * start), floor(n * end))` over `n` qualifying slices
    ///
    /// The products are evaluated in `f64` and truncated, so band edges follow
    /// IEEE rounding exactly (e.g. `15 * 0.2 == 3.0000000000000004` floors to 3).
    pub fn range(&self, qualifying: usize) -> Range<usize> {
        let n = qualifying as f64;
        (n * self.start) as usize..(n * self.end) as usize
    }

    /// Width of the interval as a percentage label, e.g. `0-20%`
    pub fn percent_label(&self) -> String {
        format!(
            "{}-{}%",
            (self.start * 100.0).round() as u32,
            (self.end * 100.0).round() as u32
        )
    }
}

/// The five-band partition, in evaluation order
pub static REGION_BANDS: [RegionBand; 5] = [
    RegionBand {
        region: Region::Apex,
        start: 0.0,
        end: 0.2,
        receives_remainder: true,
    },
    RegionBand {
        region: Region::Upper,
        start: 0.2,
        end: 0.4,
        receives_remainder: false,
    },
    RegionBand {
        region: Region::Central,
        start: 0.4,
        end: 0.6,
        receives_remainder: true,
    },
    RegionBand {
        region: Region::Lower,
        start: 0.6,
        end: 0.8,
        receives_remainder: true,
    },
    RegionBand {
        region: Region::Base,
        start: 0.8,
        end: 1.0,
        receives_remainder: false,
    },
];
