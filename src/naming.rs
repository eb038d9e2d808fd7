//! Filename synthesis for ranked images.
//!
//! Every renamed file starts with its zero-based rank, zero-padded to a width
//! shared by the whole run. The rest of the name depends on [`NamingOptions`]:
//!
//! | Options | `dawn.png`, rank 3 of 12, L = 100, 640×480 |
//! |---|---|
//! | default | `03_dawn.png` |
//! | `numeric_only` | `03.png` |
//! | `append_luminance` | `03_dawn_057.png` |
//! | `append_dimensions` | `03_dawn_640x480.png` |
//! | all three | `03_057_640x480.png` |

use crate::config::NamingOptions;
use crate::imaging::brightness_percent;
use crate::score::ImageRecord;
use std::ffi::OsString;

/// Width of the rank prefix: digits of `found`, but never below `amount_digits_min`.
///
/// `found` is the number of PNG files listed, including ones that later fail
/// to score.
pub fn digit_width(found: usize, amount_digits_min: u8) -> usize {
    found
        .to_string()
        .len()
        .max(amount_digits_min as usize)
}

/// Zero-padded rank prefix.
pub fn rank_prefix(index: usize, width: usize) -> String {
    format!("{index:0>width$}")
}

/// Brightness percentage, always three digits.
pub fn percent3digits(luminance: f32) -> String {
    format!("{:03}", brightness_percent(luminance))
}

/// Build the new filename for `record` at rank `index`.
///
/// The stem is copied as raw OS bytes, so names that are not valid UTF-8
/// survive unchanged behind the prefix.
pub fn new_filename(
    record: &ImageRecord,
    index: usize,
    width: usize,
    options: &NamingOptions,
) -> OsString {
    let mut name = OsString::from(rank_prefix(index, width));

    if !options.numeric_only {
        name.push("_");
        name.push(record.stem());
    }
    if options.append_luminance {
        name.push("_");
        name.push(percent3digits(record.luminance));
    }
    if let (true, Some(w), Some(h)) = (options.append_dimensions, record.width, record.height) {
        name.push(format!("_{w}x{h}"));
    }

    name.push(".png");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dawn() -> ImageRecord {
        ImageRecord {
            original_path: PathBuf::from("/d/dawn.png"),
            filename: "dawn.png".into(),
            luminance: 100.0,
            width: Some(640),
            height: Some(480),
        }
    }

    fn options(numeric_only: bool, luminance: bool, dimensions: bool) -> NamingOptions {
        NamingOptions {
            numeric_only,
            append_luminance: luminance,
            append_dimensions: dimensions,
            ..NamingOptions::default()
        }
    }

    #[test]
    fn width_seven_files() {
        assert_eq!(digit_width(7, 1), 1);
    }

    #[test]
    fn width_twelve_files() {
        assert_eq!(digit_width(12, 1), 2);
    }

    #[test]
    fn width_raised_by_minimum() {
        assert_eq!(digit_width(3, 3), 3);
    }

    #[test]
    fn width_counts_digits_of_total_not_last_index() {
        // Ten files use indices 0..=9 but still get two digits
        assert_eq!(digit_width(10, 1), 2);
    }

    #[test]
    fn width_of_zero_files() {
        assert_eq!(digit_width(0, 0), 1);
    }

    #[test]
    fn prefix_is_zero_padded() {
        assert_eq!(rank_prefix(3, 2), "03");
        assert_eq!(rank_prefix(0, 4), "0000");
        assert_eq!(rank_prefix(123, 2), "123");
    }

    #[test]
    fn percent_is_three_digits() {
        assert_eq!(percent3digits(0.0), "000");
        assert_eq!(percent3digits(255.0), "100");
        assert_eq!(percent3digits(100.0), "057");
    }

    #[test]
    fn default_keeps_stem() {
        assert_eq!(new_filename(&dawn(), 3, 2, &options(false, false, false)), "03_dawn.png");
    }

    #[test]
    fn numeric_only_drops_stem() {
        assert_eq!(new_filename(&dawn(), 3, 2, &options(true, false, false)), "03.png");
    }

    #[test]
    fn luminance_suffix() {
        assert_eq!(
            new_filename(&dawn(), 3, 2, &options(false, true, false)),
            "03_dawn_057.png"
        );
    }

    #[test]
    fn dimensions_suffix() {
        assert_eq!(
            new_filename(&dawn(), 3, 2, &options(false, false, true)),
            "03_dawn_640x480.png"
        );
    }

    #[test]
    fn all_options_combined() {
        assert_eq!(
            new_filename(&dawn(), 3, 2, &options(true, true, true)),
            "03_057_640x480.png"
        );
    }

    #[test]
    fn unknown_dimensions_are_omitted() {
        let record = ImageRecord {
            width: None,
            height: None,
            ..dawn()
        };
        assert_eq!(
            new_filename(&record, 0, 1, &options(false, false, true)),
            "0_dawn.png"
        );
    }

    #[test]
    fn stem_keeps_inner_dots() {
        let record = ImageRecord {
            filename: "a.b.png".into(),
            ..dawn()
        };
        assert_eq!(new_filename(&record, 1, 1, &options(false, false, false)), "1_a.b.png");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_stem_is_copied_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let record = ImageRecord {
            filename: OsStr::from_bytes(b"caf\xe9.png").to_os_string(),
            ..dawn()
        };
        let name = new_filename(&record, 0, 1, &options(false, true, false));
        assert_eq!(name.as_bytes(), b"0_caf\xe9_057.png");
    }
}
