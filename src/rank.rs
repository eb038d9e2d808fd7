//! Ordering of scored images.
//!
//! Images are ordered by luminance; equal luminance falls back to a bytewise
//! filename comparison. Descending order mirrors both keys, so a tie group
//! flips its internal filename order too.

use crate::score::ImageRecord;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

fn ascending(a: &ImageRecord, b: &ImageRecord) -> Ordering {
    a.luminance
        .partial_cmp(&b.luminance)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.filename
                .as_encoded_bytes()
                .cmp(b.filename.as_encoded_bytes())
        })
}

/// Compare two records under `order`.
pub fn compare(a: &ImageRecord, b: &ImageRecord, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ascending(a, b),
        SortOrder::Descending => ascending(b, a),
    }
}

/// Sort `records` into rank order.
pub fn rank(mut records: Vec<ImageRecord>, order: SortOrder) -> Vec<ImageRecord> {
    records.sort_by(|a, b| compare(a, b, order));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn record(filename: &str, luminance: f32) -> ImageRecord {
        ImageRecord {
            original_path: PathBuf::from("/d").join(filename),
            filename: filename.into(),
            luminance,
            width: None,
            height: None,
        }
    }

    fn names(records: &[ImageRecord]) -> Vec<&OsStr> {
        records.iter().map(|r| r.filename.as_os_str()).collect()
    }

    fn sample() -> Vec<ImageRecord> {
        vec![
            record("b.png", 10.0),
            record("a.png", 10.0),
            record("c.png", 200.0),
        ]
    }

    #[test]
    fn ascending_breaks_ties_by_filename() {
        let ranked = rank(sample(), SortOrder::Ascending);
        assert_eq!(names(&ranked), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn descending_flips_tie_break_too() {
        let ranked = rank(sample(), SortOrder::Descending);
        assert_eq!(names(&ranked), vec!["c.png", "b.png", "a.png"]);
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let records = vec![
            record("x.png", 5.0),
            record("m.png", 5.0),
            record("q.png", 0.5),
            record("a.png", 99.0),
            record("k.png", 5.0),
        ];
        let mut asc = rank(records.clone(), SortOrder::Ascending);
        asc.reverse();
        assert_eq!(asc, rank(records, SortOrder::Descending));
    }

    #[test]
    fn ranking_ignores_input_order() {
        let mut shuffled = sample();
        shuffled.reverse();
        assert_eq!(
            rank(shuffled, SortOrder::Ascending),
            rank(sample(), SortOrder::Ascending)
        );
    }

    #[test]
    fn tie_break_is_bytewise() {
        let ranked = rank(
            vec![record("a.png", 1.0), record("B.png", 1.0), record("_.png", 1.0)],
            SortOrder::Ascending,
        );
        assert_eq!(names(&ranked), vec!["B.png", "_.png", "a.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn tie_break_uses_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        // Both invalid bytes decode to U+FFFD, so only a raw compare orders them
        let mut high = record("x", 1.0);
        high.filename = OsStr::from_bytes(b"caf\xe9.png").to_os_string();
        let mut low = record("x", 1.0);
        low.filename = OsStr::from_bytes(b"caf\x80.png").to_os_string();
        let plain = record("cafz.png", 1.0);

        let ranked = rank(vec![high, plain, low], SortOrder::Ascending);
        let bytes: Vec<&[u8]> = ranked.iter().map(|r| r.filename.as_bytes()).collect();
        assert_eq!(
            bytes,
            vec![&b"cafz.png"[..], &b"caf\x80.png"[..], &b"caf\xe9.png"[..]]
        );
    }

    #[test]
    fn compare_is_mirrored() {
        let dark = record("z.png", 1.0);
        let bright = record("a.png", 2.0);
        assert_eq!(compare(&dark, &bright, SortOrder::Ascending), Ordering::Less);
        assert_eq!(
            compare(&dark, &bright, SortOrder::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank(Vec::new(), SortOrder::Descending).is_empty());
    }
}
