use super::OrientationVector;
use std::fmt;

/// MRI sequence protocol acquired per BraTS21 study
///
/// Each patient directory holds one subdirectory per scan type, named
/// exactly as [`ScanType::dir_name`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize)]
pub enum ScanType {
    /// Fluid-attenuated inversion recovery
    #[serde(rename = "FLAIR")]
    Flair,
    /// T1-weighted
    #[serde(rename = "T1w")]
    T1w,
    /// T1-weighted, contrast enhanced
    #[serde(rename = "T1wCE")]
    T1wCe,
    /// T2-weighted
    #[serde(rename = "T2w")]
    T2w,
}

/// Scan types in aggregation order
pub const SCAN_TYPES: [ScanType; 4] = [
    ScanType::Flair,
    ScanType::T1w,
    ScanType::T1wCe,
    ScanType::T2w,
];

impl ScanType {
    /// Returns the subdirectory name used in the competition layout
    pub fn dir_name(&self) -> &'static str {
        match self {
            ScanType::Flair => "FLAIR",
            ScanType::T1w => "T1w",
            ScanType::T1wCe => "T1wCE",
            ScanType::T2w => "T2w",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Anatomical plane of an MRI slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePlane {
    Coronal,
    Axial,
    Sagittal,
}

impl ImagePlane {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ImagePlane::Coronal => "coronal",
            ImagePlane::Axial => "axial",
            ImagePlane::Sagittal => "sagittal",
        }
    }

    /// Classifies parsed direction cosines
    pub fn from_orientation(orientation: &OrientationVector) -> Option<Self> {
        Self::from_signature(orientation.signature())
    }

    /// Looks up the plane for a rounded `[x1, y1, x2, y2]` signature
    ///
    /// The table is not exhaustive: oblique or flipped orientations
    /// yield `None`.
    pub fn from_signature(signature: [i64; 4]) -> Option<Self> {
        match signature {
            [1, 0, 0, 0] => Some(ImagePlane::Coronal),
            [1, 0, 0, 1] => Some(ImagePlane::Axial),
            [0, 1, 0, 0] => Some(ImagePlane::Sagittal),
            _ => None,
        }
    }
}

impl fmt::Display for ImagePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
