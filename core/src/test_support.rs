//! Synthetic slices and in-memory DICOM files for unit tests

use crate::types::RawSlice;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};

const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

/// 20x20 slice fully inside the lung band with a checkerboard of `-700 +/- spread`
///
/// The score (population variance) is `spread^2`. `spread` must stay below 300.
pub fn lung_slice(spread: i32) -> RawSlice {
    let samples = (0..400)
        .map(|i| if (i / 20 + i % 20) % 2 == 0 { -700 - spread } else { -700 + spread })
        .collect();
    RawSlice::new(20, 20, samples)
}

/// 20x20 slice that qualifies (12.5% lung) but has too few pixels to score
pub fn sparse_lung_slice() -> RawSlice {
    let samples = (0..400).map(|i| if i < 50 { -700 } else { 40 }).collect();
    RawSlice::new(20, 20, samples)
}

/// 20x20 slice of soft tissue only
pub fn soft_tissue_slice() -> RawSlice {
    RawSlice::new(20, 20, vec![40; 400])
}

/// Parameters of a minimal single-frame 16-bit signed CT file
pub struct DicomFixture {
    pub rows: u16,
    pub columns: u16,
    pub samples: Vec<i16>,
    pub rescale: Option<(&'static str, &'static str)>,
}

impl DicomFixture {
    pub fn new(rows: u16, columns: u16, samples: Vec<i16>) -> Self {
        Self {
            rows,
            columns,
            samples,
            rescale: Some(("1", "0")),
        }
    }

    pub fn with_rescale(mut self, slope: &'static str, intercept: &'static str) -> Self {
        self.rescale = Some((slope, intercept));
        self
    }

    pub fn without_rescale(mut self) -> Self {
        self.rescale = None;
        self
    }

    /// Fixture holding the stored values of a raw slice, with intercept 0
    pub fn from_raw(raw: &RawSlice) -> Self {
        let samples = raw.samples.iter().map(|&v| v as i16).collect();
        Self::new(raw.rows as u16, raw.columns as u16, samples)
    }
}

/// Serializes a fixture as a complete DICOM file (preamble, meta group, data set)
pub fn dicom_file_bytes(fixture: &DicomFixture) -> Vec<u8> {
    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(CT_IMAGE_STORAGE),
    ));
    dcm.put(DataElement::new(tags::MODALITY, VR::CS, PrimitiveValue::from("CT")));
    dcm.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)));
    dcm.put(DataElement::new(
        tags::PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        PrimitiveValue::from("MONOCHROME2"),
    ));
    dcm.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(fixture.rows)));
    dcm.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(fixture.columns)));
    dcm.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(16_u16)));
    dcm.put(DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(16_u16)));
    dcm.put(DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(15_u16)));
    dcm.put(DataElement::new(
        tags::PIXEL_REPRESENTATION,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    if let Some((slope, intercept)) = fixture.rescale {
        dcm.put(DataElement::new(tags::RESCALE_SLOPE, VR::DS, PrimitiveValue::from(slope)));
        dcm.put(DataElement::new(
            tags::RESCALE_INTERCEPT,
            VR::DS,
            PrimitiveValue::from(intercept),
        ));
    }

    let pixel_bytes: Vec<u8> = fixture.samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    dcm.put(DataElement::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::from(pixel_bytes)));

    let file = dcm
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(CT_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("1.2.826.0.1.3680043.2.1125.1"),
        )
        .unwrap();

    let mut out = Vec::new();
    file.write_all(&mut out).unwrap();
    out
}

/// Base64 transport form of a fixture
pub fn encode_dicom(fixture: &DicomFixture) -> String {
    STANDARD.encode(dicom_file_bytes(fixture))
}
