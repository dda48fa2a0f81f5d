/// Linear rescale from stored pixel values to calibrated intensity
///
/// Mirrors the DICOM RescaleSlope / RescaleIntercept pair. For CT the
/// calibrated unit is Hounsfield-like.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Calibration {
    pub slope: f64,
    pub intercept: f64,
}

impl Calibration {
    /// Creates a new Calibration
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Applies `raw * slope + intercept` in single precision
    ///
    /// Slope and intercept are narrowed to `f32` before the multiply-add.
    pub fn apply(&self, raw: f32) -> f32 {
        raw * self.slope as f32 + self.intercept as f32
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

/// One decoded cross-sectional image before calibration
///
/// `samples` is row-major and is expected to hold `rows * columns` values.
/// A mismatch is only detected at normalization time.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSlice {
    pub rows: usize,
    pub columns: usize,
    pub samples: Vec<i32>,
    pub calibration: Calibration,
}

impl RawSlice {
    /// Creates a new RawSlice with identity calibration
    pub fn new(rows: usize, columns: usize, samples: Vec<i32>) -> Self {
        Self {
            rows,
            columns,
            samples,
            calibration: Calibration::default(),
        }
    }

    /// Builder: Set the rescale calibration
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Declared pixel count (rows * columns)
    pub fn pixel_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Ordered slices in acquisition order; `None` marks a slice that failed to decode
///
/// A failed slice keeps its ordinal position so indices stay aligned with the
/// caller's buffer list.
pub type Series = Vec<Option<RawSlice>>;

/// Result of the per-slice mapping stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliceAssessment {
    /// Slice could not be decoded or normalized
    Absent,
    /// Slice was calibrated successfully
    Present {
        /// Target tissue detected
        qualifies: bool,
        /// Pathology-likelihood score, 0 when unscorable
        score: f64,
    },
}

impl SliceAssessment {
    /// Returns whether the slice was decoded and calibrated
    pub fn is_present(&self) -> bool {
        matches!(self, SliceAssessment::Present { .. })
    }

    /// Returns whether the slice contains target tissue
    pub fn qualifies(&self) -> bool {
        matches!(
            self,
            SliceAssessment::Present {
                qualifies: true,
                ..
            }
        )
    }

    /// Returns the score, 0 for absent slices
    pub fn score(&self) -> f64 {
        match self {
            SliceAssessment::Present { score, .. } => *score,
            SliceAssessment::Absent => 0.0,
        }
    }
}
