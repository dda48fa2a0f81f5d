use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Core Image Tags
pub use dicom_dictionary_std::tags::{MODALITY, PIXEL_DATA};

// Image Geometry Tags
pub use dicom_dictionary_std::tags::{BITS_ALLOCATED, COLUMNS, PIXEL_REPRESENTATION, ROWS};

// Rescale Tags
pub use dicom_dictionary_std::tags::{RESCALE_INTERCEPT, RESCALE_SLOPE};

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get u16 value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to u16
pub fn get_u16_value(dcm: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<u16>().ok())
}

/// Helper to get floating-point value from DICOM tag
///
/// Handles decimal strings (DS) as well as binary floats.
/// Returns `None` if the tag is not present or cannot be converted to f64
pub fn get_f64_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}
