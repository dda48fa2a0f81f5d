//! Core type definitions for CT slice selection
//!
//! This module provides the fundamental types used throughout the ctslice library:
//! - [`RawSlice`] and [`Calibration`]: a decoded slice and its rescale parameters
//! - [`SliceAssessment`]: the per-slice outcome of presence detection and scoring
//! - [`Region`] and [`REGION_BANDS`]: the five anatomical bands and their quota rules
//! - [`SelectorConfig`]: thresholds for assessment and sampling
//! - [`SelectionResult`]: the sorted selection plus coverage statistics

mod config;
mod region;
mod selection;
mod slice;

pub use config::{IntensityBand, SelectorConfig, DEFAULT_TARGET_COUNT};
pub use region::{Region, RegionBand, REGION_BANDS};
pub use selection::{RegionCoverage, SelectionResult, SelectionStrategy};
pub use slice::{Calibration, RawSlice, Series, SliceAssessment};
