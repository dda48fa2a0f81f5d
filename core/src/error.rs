use thiserror::Error;

/// Result type for ctslice operations
pub type Result<T> = std::result::Result<T, CtSliceError>;

/// Error types for ctslice operations
#[derive(Error, Debug)]
pub enum CtSliceError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Tag not found in DICOM file
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Pixel layout the decoder does not handle
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// Pixel buffer does not match the declared dimensions
    #[error("Shape error: {0}")]
    ShapeError(String),

    /// Transport encoding error
    #[error("Base64 error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// Malformed or empty request envelope
    #[error("{0}")]
    RequestError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for CtSliceError {
    fn from(e: dicom_object::ReadError) -> Self {
        CtSliceError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for CtSliceError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        CtSliceError::InvalidValue(format!("{}", e))
    }
}

impl From<ndarray::ShapeError> for CtSliceError {
    fn from(e: ndarray::ShapeError) -> Self {
        CtSliceError::ShapeError(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for CtSliceError {
    fn from(e: serde_json::Error) -> Self {
        CtSliceError::RequestError(format!("Invalid request: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message_is_verbatim() {
        let err = CtSliceError::RequestError("No DICOM buffers provided".to_string());
        assert_eq!(err.to_string(), "No DICOM buffers provided");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_error_becomes_invalid_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CtSliceError::from(parse_err);
        assert!(matches!(err, CtSliceError::RequestError(_)));
        assert!(err.to_string().starts_with("Invalid request: "));
    }

    #[test]
    fn test_library_errors_keep_their_category() {
        let shape = ndarray::Array2::<f32>::from_shape_vec((2, 2), vec![0.0; 3]).unwrap_err();
        assert!(matches!(CtSliceError::from(shape), CtSliceError::ShapeError(_)));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(CtSliceError::from(io).to_string().starts_with("IO error: "));
    }
}
