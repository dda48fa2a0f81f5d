//! Decoding of transport buffers into raw slices
//!
//! Each input buffer is a base64-encoded DICOM file. Only the fields needed
//! for selection are read: dimensions, bit depth, signedness, rescale
//! parameters and native (uncompressed) pixel data.

pub mod tags;

use crate::error::{CtSliceError, Result};
use crate::types::{Calibration, RawSlice, Series};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dicom_object::InMemDicomObject;
use log::{debug, warn};
use rayon::prelude::*;
use tags::{
    get_f64_value, get_string_value, get_u16_value, BITS_ALLOCATED, COLUMNS, MODALITY,
    PIXEL_DATA, PIXEL_REPRESENTATION, RESCALE_INTERCEPT, RESCALE_SLOPE, ROWS,
};

/// Length of the DICOM file preamble preceding the magic bytes
const PREAMBLE_LEN: usize = 128;

/// Checks whether a buffer starts with the 128-byte preamble and "DICM" magic
pub fn has_preamble(bytes: &[u8]) -> bool {
    bytes.len() >= PREAMBLE_LEN + 4 && &bytes[PREAMBLE_LEN..PREAMBLE_LEN + 4] == b"DICM"
}

/// Decodes one base64-encoded DICOM file
pub fn decode_base64(buffer: &str) -> Result<RawSlice> {
    let bytes = STANDARD.decode(buffer.trim())?;
    decode_bytes(&bytes)
}

/// Decodes an in-memory DICOM file
///
/// Accepts files with the standard preamble, and streams that start
/// directly at the "DICM" magic.
pub fn decode_bytes(bytes: &[u8]) -> Result<RawSlice> {
    let stream = if has_preamble(bytes) {
        &bytes[PREAMBLE_LEN..]
    } else {
        bytes
    };
    let dcm = dicom_object::from_reader(stream)?;
    decode_object(&dcm)
}

/// Extracts the raw pixel grid and rescale parameters from a DICOM object
///
/// # Errors
///
/// Returns an error if:
/// - Rows, Columns or PixelData are missing
/// - Pixel data is encapsulated (compressed)
/// - Bits allocated is neither 8 nor 16
pub fn decode_object(dcm: &InMemDicomObject) -> Result<RawSlice> {
    if let Some(modality) = get_string_value(dcm, MODALITY) {
        if modality != "CT" {
            debug!("Expected modality=CT, found {}", modality);
        }
    }

    let rows = get_u16_value(dcm, ROWS).ok_or_else(|| CtSliceError::TagNotFound("Rows".into()))?;
    let columns =
        get_u16_value(dcm, COLUMNS).ok_or_else(|| CtSliceError::TagNotFound("Columns".into()))?;
    let bits_allocated = get_u16_value(dcm, BITS_ALLOCATED).unwrap_or(16);
    // Absent PixelRepresentation is read as signed, the common CT layout
    let signed = get_u16_value(dcm, PIXEL_REPRESENTATION)
        .map(|v| v == 1)
        .unwrap_or(true);

    let calibration = Calibration::new(
        get_f64_value(dcm, RESCALE_SLOPE).unwrap_or(1.0),
        get_f64_value(dcm, RESCALE_INTERCEPT).unwrap_or(0.0),
    );

    let pixel_data = dcm
        .element(PIXEL_DATA)
        .map_err(|_| CtSliceError::TagNotFound("PixelData".into()))?;
    let bytes = pixel_data.to_bytes()?;

    let samples = unpack_samples(&bytes, bits_allocated, signed)?;
    let mut slice = RawSlice::new(usize::from(rows), usize::from(columns), samples)
        .with_calibration(calibration);
    // Drop trailing padding; short buffers are left for normalization to reject
    let declared = slice.pixel_count();
    slice.samples.truncate(declared);

    Ok(slice)
}

/// Interprets little-endian pixel bytes as integer samples
pub fn unpack_samples(bytes: &[u8], bits_allocated: u16, signed: bool) -> Result<Vec<i32>> {
    let samples: Vec<i32> = match (bits_allocated, signed) {
        (8, false) => bytes.iter().map(|&b| i32::from(b)).collect(),
        (8, true) => bytes.iter().map(|&b| i32::from(b as i8)).collect(),
        (16, false) => bytes
            .chunks_exact(2)
            .map(|pair| i32::from(u16::from_le_bytes([pair[0], pair[1]])))
            .collect(),
        (16, true) => bytes
            .chunks_exact(2)
            .map(|pair| i32::from(i16::from_le_bytes([pair[0], pair[1]])))
            .collect(),
        (bits, _) => {
            return Err(CtSliceError::UnsupportedFormat(format!(
                "{} bits allocated",
                bits
            )))
        }
    };
    Ok(samples)
}

/// Decodes every buffer of a request in parallel
///
/// Failed buffers become `None` and keep their position in the series.
pub fn decode_series(buffers: &[String]) -> Series {
    buffers
        .par_iter()
        .enumerate()
        .map(|(index, buffer)| match decode_base64(buffer) {
            Ok(slice) => Some(slice),
            Err(e) => {
                warn!("Skipping slice {}: {}", index, e);
                None
            }
        })
        .collect()
}
