//! Strict validation of a byte sequence against a single encoding
//!
//! Validation walks the input once and stops at the first byte or code unit that
//! cannot be mapped to a Unicode scalar value. Nothing is replaced or skipped, and
//! no text is produced. A failed decode is reported as a [`DecodeError`] value, never
//! as a panic, so [`validate`] and [`is_valid`] are defined for every input.
//!
//! A byte-order mark is ordinary content here: `EF BB BF` is a valid UTF-8
//! encoding of U+FEFF, and `FF FE` is a valid UTF-16-LE unit.

use crate::encoding::Encoding;
use std::fmt;

/// Error describing where strict decoding stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    encoding: Encoding,
    valid_up_to: usize,
    error_len: Option<usize>,
}

impl DecodeError {
    /// Encoding the data was checked against
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Length of the longest valid prefix
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the invalid byte group at `valid_up_to`.
    ///
    /// `None` means the input ended in the middle of a code unit or multi-unit
    /// sequence.
    pub fn error_len(&self) -> Option<usize> {
        self.error_len
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_len {
            Some(len) => write!(
                f,
                "invalid {} sequence of {} bytes from index {}",
                self.encoding, len, self.valid_up_to
            ),
            None => write!(
                f,
                "incomplete {} sequence from index {}",
                self.encoding, self.valid_up_to
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Strictly decode `data` under `encoding`, discarding the text.
pub fn validate(data: &[u8], encoding: Encoding) -> Result<(), DecodeError> {
    let result = match encoding {
        Encoding::Ascii => validate_ascii(data),
        Encoding::Utf8 => validate_utf8(data),
        Encoding::Utf16Be => validate_utf16(data, u16::from_be_bytes),
        Encoding::Utf16Le => validate_utf16(data, u16::from_le_bytes),
        Encoding::Utf32Be => validate_utf32(data, u32::from_be_bytes),
        Encoding::Utf32Le => validate_utf32(data, u32::from_le_bytes),
    };

    result.map_err(|(valid_up_to, error_len)| {
        let err = DecodeError {
            encoding,
            valid_up_to,
            error_len,
        };
        log::trace!("{} validation failed: {}", encoding, err);
        err
    })
}

/// Whether `data` decodes under `encoding` without any error
pub fn is_valid(data: &[u8], encoding: Encoding) -> bool {
    validate(data, encoding).is_ok()
}

/// Whether every byte has bit 7 unset
pub fn is_ascii(data: &[u8]) -> bool {
    is_valid(data, Encoding::Ascii)
}

/// Whether `data` is well-formed UTF-8
pub fn is_utf8(data: &[u8]) -> bool {
    is_valid(data, Encoding::Utf8)
}

// Internal failure: (valid_up_to, error_len)
type Failure = (usize, Option<usize>);

fn validate_ascii(data: &[u8]) -> Result<(), Failure> {
    match data.iter().position(|&b| b > 0x7F) {
        Some(index) => Err((index, Some(1))),
        None => Ok(()),
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Well-formed UTF-8 per Unicode Table 3-7.
///
/// The reported `error_len` is the maximal invalid subpart, so results line up with
/// `std::str::from_utf8`.
fn validate_utf8(data: &[u8]) -> Result<(), Failure> {
    let len = data.len();
    let mut index = 0;

    while index < len {
        let first = data[index];
        if first < 0x80 {
            index += 1;
            continue;
        }

        let start = index;
        // Byte at `start + offset`, or an incomplete-sequence failure
        let at = |offset: usize| -> Result<u8, Failure> {
            data.get(start + offset).copied().ok_or((start, None))
        };

        let width = match first {
            0xC2..=0xDF => {
                if !is_continuation(at(1)?) {
                    return Err((start, Some(1)));
                }
                2
            }
            0xE0..=0xEF => {
                match (first, at(1)?) {
                    (0xE0, 0xA0..=0xBF)
                    | (0xE1..=0xEC, 0x80..=0xBF)
                    | (0xED, 0x80..=0x9F)
                    | (0xEE..=0xEF, 0x80..=0xBF) => {}
                    _ => return Err((start, Some(1))),
                }
                if !is_continuation(at(2)?) {
                    return Err((start, Some(2)));
                }
                3
            }
            0xF0..=0xF4 => {
                match (first, at(1)?) {
                    (0xF0, 0x90..=0xBF) | (0xF1..=0xF3, 0x80..=0xBF) | (0xF4, 0x80..=0x8F) => {}
                    _ => return Err((start, Some(1))),
                }
                if !is_continuation(at(2)?) {
                    return Err((start, Some(2)));
                }
                if !is_continuation(at(3)?) {
                    return Err((start, Some(3)));
                }
                4
            }
            // Stray continuation bytes, overlong leads C0/C1, and F5..FF
            _ => return Err((start, Some(1))),
        };

        index += width;
    }

    Ok(())
}

fn validate_utf16(data: &[u8], unit: fn([u8; 2]) -> u16) -> Result<(), Failure> {
    let len = data.len();
    let mut index = 0;

    while index < len {
        if len - index < 2 {
            return Err((index, None));
        }
        let first = unit([data[index], data[index + 1]]);

        match first {
            0xD800..=0xDBFF => {
                // High surrogate must be followed by a low surrogate
                if len - index < 4 {
                    return Err((index, None));
                }
                let second = unit([data[index + 2], data[index + 3]]);
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err((index, Some(2)));
                }
                index += 4;
            }
            0xDC00..=0xDFFF => return Err((index, Some(2))),
            _ => index += 2,
        }
    }

    Ok(())
}

fn validate_utf32(data: &[u8], unit: fn([u8; 4]) -> u32) -> Result<(), Failure> {
    let mut chunks = data.chunks_exact(4);

    for (i, chunk) in chunks.by_ref().enumerate() {
        let value = unit([chunk[0], chunk[1], chunk[2], chunk[3]]);
        if char::from_u32(value).is_none() {
            return Err((i * 4, Some(4)));
        }
    }

    if chunks.remainder().is_empty() {
        Ok(())
    } else {
        Err((data.len() - chunks.remainder().len(), None))
    }
}
