/// Default number of slices to select from a series
pub const DEFAULT_TARGET_COUNT: usize = 200;

/// Open intensity interval `(lower, upper)` in calibrated units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensityBand {
    pub lower: f32,
    pub upper: f32,
}

impl IntensityBand {
    /// Creates a new IntensityBand
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Strict containment on both bounds
    pub fn contains(&self, value: f32) -> bool {
        value > self.lower && value < self.upper
    }
}

/// Tunable thresholds for slice assessment and sampling
///
/// The lung band drives presence detection, the narrower score band drives
/// the pathology score. They are deliberately different intervals.
///
/// # Example
///
/// ```
/// use ctslice_core::SelectorConfig;
///
/// let config = SelectorConfig::default()
///     .with_lung_band(-950.0, -450.0)
///     .with_min_area_fraction(0.2);
///
/// assert_eq!(config.lung_band.lower, -950.0);
/// assert_eq!(config.min_area_fraction, 0.2);
/// assert_eq!(config.min_scored_pixels, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct SelectorConfig {
    /// Intensity band counted as lung tissue for presence detection
    pub lung_band: IntensityBand,

    /// Minimum fraction of lung-band pixels for a slice to qualify (inclusive)
    pub min_area_fraction: f64,

    /// Intensity band whose pixels feed the variance score
    pub score_band: IntensityBand,

    /// Minimum score-band pixel count below which a slice scores 0
    pub min_scored_pixels: usize,

    /// Qualifying counts at or below this are returned without stratification
    pub passthrough_limit: usize,

    /// Share of an oversubscribed region quota filled by top-scoring slices
    pub high_score_share: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            lung_band: IntensityBand::new(-1000.0, -400.0),
            min_area_fraction: 0.1,
            score_band: IntensityBand::new(-1000.0, -200.0),
            min_scored_pixels: 100,
            passthrough_limit: 10,
            high_score_share: 0.7,
        }
    }
}

impl SelectorConfig {
    /// Builder: Set the lung presence band
    pub fn with_lung_band(mut self, lower: f32, upper: f32) -> Self {
        self.lung_band = IntensityBand::new(lower, upper);
        self
    }

    /// Builder: Set the minimum lung area fraction
    pub fn with_min_area_fraction(mut self, fraction: f64) -> Self {
        self.min_area_fraction = fraction;
        self
    }

    /// Builder: Set the scoring band
    pub fn with_score_band(mut self, lower: f32, upper: f32) -> Self {
        self.score_band = IntensityBand::new(lower, upper);
        self
    }

    /// Builder: Set the minimum number of scored pixels
    pub fn with_min_scored_pixels(mut self, pixels: usize) -> Self {
        self.min_scored_pixels = pixels;
        self
    }

    /// Builder: Set the passthrough limit
    pub fn with_passthrough_limit(mut self, limit: usize) -> Self {
        self.passthrough_limit = limit;
        self
    }

    /// Builder: Set the high-score share of the hybrid split
    pub fn with_high_score_share(mut self, share: f64) -> Self {
        self.high_score_share = share;
        self
    }
}
