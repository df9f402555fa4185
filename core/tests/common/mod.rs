#![allow(dead_code)]

use bratsmeta_core::SCAN_TYPES;
use dicom_core::value::PrimitiveValue;
use dicom_core::{DataElement, Tag, VR};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::fs;
use std::path::{Path, PathBuf};

pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

pub const AXIAL: [&str; 6] = ["1", "0", "0", "0", "1", "0"];
pub const CORONAL: [&str; 6] = ["1", "0", "0", "0", "0", "-1"];
pub const SAGITTAL: [&str; 6] = ["0", "1", "0", "0", "0", "-1"];

/// Writes a minimal MR slice with a description and orientation
pub fn write_slice(path: &Path, description: &str, orientation: [&str; 6]) {
    let sop_instance_uid = format!("1.2.826.0.1.3680043.8.498.{}", description.len());
    let obj = InMemDicomObject::from_element_iter([
        DataElement::new(
            Tag(0x0008, 0x0016),
            VR::UI,
            PrimitiveValue::from(MR_IMAGE_STORAGE),
        ),
        DataElement::new(
            Tag(0x0008, 0x0018),
            VR::UI,
            PrimitiveValue::from(sop_instance_uid.as_str()),
        ),
        DataElement::new(Tag(0x0008, 0x0060), VR::CS, PrimitiveValue::from("MR")),
        DataElement::new(
            Tag(0x0008, 0x103E),
            VR::LO,
            PrimitiveValue::from(description),
        ),
        DataElement::new(
            Tag(0x0020, 0x0037),
            VR::DS,
            PrimitiveValue::Strs(orientation.iter().map(|s| s.to_string()).collect()),
        ),
        DataElement::new(Tag(0x0028, 0x0010), VR::US, PrimitiveValue::from(256_u16)),
    ]);

    let file_obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LE)
                .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(sop_instance_uid.as_str()),
        )
        .unwrap();
    file_obj.write_to_file(path).unwrap();
}

/// Creates `root/<00000-id>/<scan>/Image-{1,2,10}.dcm` for one patient
///
/// Descriptions follow `"<scan> p<id> slice <n>"`.
pub fn write_patient(root: &Path, id: u32) -> PathBuf {
    let patient_dir = root.join(format!("{:05}", id));
    for scan in SCAN_TYPES {
        let scan_dir = patient_dir.join(scan.dir_name());
        fs::create_dir_all(&scan_dir).unwrap();
        for n in [10, 2, 1] {
            write_slice(
                &scan_dir.join(format!("Image-{}.dcm", n)),
                &format!("{} p{} slice {}", scan, id, n),
                AXIAL,
            );
        }
    }
    patient_dir
}
