//! Encoding identifiers

use std::fmt;
use std::str::FromStr;

/// A character encoding this crate knows how to sniff or validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 7-bit US-ASCII
    Ascii,
    /// UTF-8
    Utf8,
    /// UTF-16, big-endian
    Utf16Be,
    /// UTF-16, little-endian
    Utf16Le,
    /// UTF-32, big-endian
    Utf32Be,
    /// UTF-32, little-endian
    Utf32Le,
}

impl Encoding {
    /// Every known encoding
    pub const ALL: [Encoding; 6] = [
        Encoding::Ascii,
        Encoding::Utf8,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
    ];

    /// Canonical name, e.g. `"UTF-16-LE"`
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ASCII",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16-BE",
            Encoding::Utf16Le => "UTF-16-LE",
            Encoding::Utf32Be => "UTF-32-BE",
            Encoding::Utf32Le => "UTF-32-LE",
        }
    }

    /// Size in bytes of one code unit
    pub const fn code_unit_len(self) -> usize {
        match self {
            Encoding::Ascii | Encoding::Utf8 => 1,
            Encoding::Utf16Be | Encoding::Utf16Le => 2,
            Encoding::Utf32Be | Encoding::Utf32Le => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized encoding name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown encoding name: '{}'", self.0)
    }
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    /// Accepts canonical names case-insensitively, with `_` or `-` as separator
    /// and an optional separator after `UTF` (`utf8`, `UTF_16_LE`, `utf16-le`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalize to upper case without separators: "UTF16LE"
        let key: String = s
            .trim()
            .chars()
            .filter(|&c| c != '-' && c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match key.as_str() {
            "ASCII" => Ok(Encoding::Ascii),
            "UTF8" => Ok(Encoding::Utf8),
            "UTF16BE" => Ok(Encoding::Utf16Be),
            "UTF16LE" => Ok(Encoding::Utf16Le),
            "UTF32BE" => Ok(Encoding::Utf32Be),
            "UTF32LE" => Ok(Encoding::Utf32Le),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}
