//! BraTS21 patient identifier formatting
//!
//! Patient directories in the competition data are named by the
//! zero-padded `BraTS21ID` (`00012`, `00581`, ...).

/// Minimum width of a formatted patient identifier
pub const PATIENT_ID_WIDTH: usize = 5;

/// Formats a patient id by prepending 4, 3, 2 or 1 zeros
///
/// Five characters for ids below 10000. Larger ids still get a single
/// leading zero, so `12345` becomes `"012345"`.
///
/// ```
/// use bratsmeta_core::format_patient_id;
///
/// assert_eq!(format_patient_id(7), "00007");
/// assert_eq!(format_patient_id(1010), "01010");
/// assert_eq!(format_patient_id(12345), "012345");
/// ```
pub fn format_patient_id(patient_id: u32) -> String {
    let zeros = match patient_id {
        0..=9 => "0000",
        10..=99 => "000",
        100..=999 => "00",
        _ => "0",
    };
    format!("{}{}", zeros, patient_id)
}

/// Formats a patient id zero-padded to at least 5 digits
///
/// Ids wider than 5 digits are kept whole. This is the rule used to
/// derive patient directory names.
///
/// ```
/// use bratsmeta_core::format_patient_id_padded;
///
/// assert_eq!(format_patient_id_padded(7), "00007");
/// assert_eq!(format_patient_id_padded(12345), "12345");
/// ```
pub fn format_patient_id_padded(patient_id: u32) -> String {
    format!("{:0width$}", patient_id, width = PATIENT_ID_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "00000")]
    #[case(9, "00009")]
    #[case(10, "00010")]
    #[case(99, "00099")]
    #[case(100, "00100")]
    #[case(999, "00999")]
    #[case(1000, "01000")]
    #[case(9999, "09999")]
    fn test_formats_agree_below_10000(#[case] id: u32, #[case] expected: &str) {
        assert_eq!(format_patient_id(id), expected);
        assert_eq!(format_patient_id_padded(id), expected);
    }

    #[test]
    fn test_width_is_five_below_10000() {
        for id in 0..10_000 {
            let formatted = format_patient_id(id);
            assert_eq!(formatted.len(), PATIENT_ID_WIDTH);
            assert!(formatted.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(formatted.parse::<u32>().unwrap(), id);
        }
    }

    #[rstest]
    #[case(10000, "010000")]
    #[case(12345, "012345")]
    #[case(1234567, "01234567")]
    fn test_above_10000_gets_single_zero(#[case] id: u32, #[case] expected: &str) {
        assert_eq!(format_patient_id(id), expected);
        assert_eq!(format_patient_id(id), format!("0{}", id));
    }

    #[test]
    fn test_padded_never_truncates() {
        assert_eq!(format_patient_id_padded(10000), "10000");
        assert_eq!(format_patient_id_padded(12345), "12345");
        assert_eq!(format_patient_id_padded(u32::MAX), u32::MAX.to_string());
    }
}
