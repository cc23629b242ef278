//! Byte-order mark sniffing
//!
//! [`BOMS`] is scanned in order and every entry whose signature prefixes the input
//! is reported. Table order is the tie-break policy: the UTF-32-LE signature
//! `FF FE 00 00` starts with the UTF-16-LE signature `FF FE`, so UTF-32-LE is
//! listed first and wins when a single answer is wanted.

use crate::encoding::Encoding;

/// A BOM signature and the encoding it declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BomEntry {
    /// Literal byte prefix
    pub signature: &'static [u8],
    /// Encoding the prefix declares
    pub encoding: Encoding,
}

impl BomEntry {
    /// Length of the signature in bytes
    pub const fn len(&self) -> usize {
        self.signature.len()
    }

    /// Signatures are never empty
    pub const fn is_empty(&self) -> bool {
        self.signature.is_empty()
    }

    /// Whether `data` starts with this signature
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.signature)
    }
}

/// Known BOMs in tie-break order.
///
/// UTF-32-BE also precedes UTF-16-BE, although `00 00 FE FF` and `FE FF` do not overlap.
pub static BOMS: [BomEntry; 5] = [
    BomEntry {
        signature: &[0xEF, 0xBB, 0xBF],
        encoding: Encoding::Utf8,
    },
    BomEntry {
        signature: &[0x00, 0x00, 0xFE, 0xFF],
        encoding: Encoding::Utf32Be,
    },
    BomEntry {
        signature: &[0xFF, 0xFE, 0x00, 0x00],
        encoding: Encoding::Utf32Le,
    },
    BomEntry {
        signature: &[0xFE, 0xFF],
        encoding: Encoding::Utf16Be,
    },
    BomEntry {
        signature: &[0xFF, 0xFE],
        encoding: Encoding::Utf16Le,
    },
];

/// Every encoding whose BOM prefixes `data`, in table order.
///
/// More than one match is possible. See [`preferred_bom`] for picking one.
pub fn detect_boms(data: &[u8]) -> Vec<Encoding> {
    let matches: Vec<Encoding> = BOMS
        .iter()
        .filter(|entry| entry.matches(data))
        .map(|entry| entry.encoding)
        .collect();

    if !matches.is_empty() {
        log::trace!("BOM matches: {:?}", matches);
    }
    matches
}

/// First matching table entry, if any
pub fn preferred_bom(data: &[u8]) -> Option<&'static BomEntry> {
    BOMS.iter().find(|entry| entry.matches(data))
}

/// Split off the preferred BOM.
///
/// Returns the remaining bytes and the declared encoding. If there is no BOM, the
/// input is returned unchanged with `None`.
pub fn strip_bom(data: &[u8]) -> (&[u8], Option<Encoding>) {
    match preferred_bom(data) {
        Some(entry) => (&data[entry.len()..], Some(entry.encoding)),
        None => (data, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(encodings: &[Encoding]) -> Vec<&'static str> {
        encodings.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_table_order() {
        let order: Vec<Encoding> = BOMS.iter().map(|e| e.encoding).collect();
        assert_eq!(
            order,
            vec![
                Encoding::Utf8,
                Encoding::Utf32Be,
                Encoding::Utf32Le,
                Encoding::Utf16Be,
                Encoding::Utf16Le,
            ]
        );
    }

    #[test]
    fn test_utf32_le_is_ambiguous_with_utf16_le() {
        assert_eq!(
            names(&detect_boms(&[0xFF, 0xFE, 0x00, 0x00])),
            vec!["UTF-32-LE", "UTF-16-LE"]
        );
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(names(&detect_boms(&[0xEF, 0xBB, 0xBF])), vec!["UTF-8"]);
        assert_eq!(names(&detect_boms(&[0xFE, 0xFF])), vec!["UTF-16-BE"]);
        assert_eq!(names(&detect_boms(&[0xFF, 0xFE])), vec!["UTF-16-LE"]);
        assert_eq!(
            names(&detect_boms(&[0x00, 0x00, 0xFE, 0xFF])),
            vec!["UTF-32-BE"]
        );
    }

    #[test]
    fn test_bom_followed_by_content() {
        assert_eq!(detect_boms(b"\xEF\xBB\xBFhello"), vec![Encoding::Utf8]);
        // UTF-16-LE "A" after the BOM, not a UTF-32-LE BOM
        assert_eq!(detect_boms(&[0xFF, 0xFE, 0x41, 0x00]), vec![Encoding::Utf16Le]);
    }

    #[test]
    fn test_no_bom() {
        assert!(detect_boms(b"ABC").is_empty());
        assert!(detect_boms(b"").is_empty());
        // Partial signatures do not match
        assert!(detect_boms(&[0xEF, 0xBB]).is_empty());
        assert!(detect_boms(&[0xFF]).is_empty());
        assert!(detect_boms(&[0x00, 0x00, 0xFE]).is_empty());
    }

    #[test]
    fn test_preferred_bom() {
        let entry = preferred_bom(&[0xFF, 0xFE, 0x00, 0x00]).unwrap();
        assert_eq!(entry.encoding, Encoding::Utf32Le);
        assert_eq!(entry.len(), 4);

        assert_eq!(
            preferred_bom(&[0xFF, 0xFE, 0x41, 0x00]).map(|e| e.encoding),
            Some(Encoding::Utf16Le)
        );
        assert!(preferred_bom(b"plain").is_none());
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(
            strip_bom(b"\xEF\xBB\xBFhi"),
            (&b"hi"[..], Some(Encoding::Utf8))
        );
        assert_eq!(
            strip_bom(&[0xFF, 0xFE, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00]),
            (&[0x41, 0x00, 0x00, 0x00][..], Some(Encoding::Utf32Le))
        );
        assert_eq!(strip_bom(b"hi"), (&b"hi"[..], None));
        assert_eq!(strip_bom(b""), (&b""[..], None));
    }

    #[test]
    fn test_entry_helpers() {
        for entry in BOMS.iter() {
            assert!(!entry.is_empty());
            assert!(entry.matches(entry.signature));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Property: sniffing is total, repeatable, and agrees with the preferred entry.
        #[test]
        fn prop_detect_boms_consistent(data in prop::collection::vec(any::<u8>(), 0..8)) {
            let first = detect_boms(&data);
            prop_assert_eq!(&first, &detect_boms(&data));
            prop_assert_eq!(first.first().copied(), preferred_bom(&data).map(|e| e.encoding));
            prop_assert!(first.len() <= 2);
        }

        /// Property: every signature followed by arbitrary content is still detected.
        #[test]
        fn prop_signature_prefix_detected(
            index in 0usize..BOMS.len(),
            tail in prop::collection::vec(any::<u8>(), 0..16),
        ) {
            let entry = &BOMS[index];
            let mut data = entry.signature.to_vec();
            data.extend_from_slice(&tail);
            prop_assert!(detect_boms(&data).contains(&entry.encoding));
        }
    }
}
