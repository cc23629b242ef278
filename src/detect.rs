//! Combined BOM and validation detection

use crate::bom::{detect_boms, preferred_bom};
use crate::encoding::Encoding;
use crate::validate::{validate, DecodeError};

/// Configuration for encoding detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectConfig {
    /// Whether a leading byte-order mark decides the encoding
    pub check_bom: bool,
    /// Whether to try strict ASCII
    pub check_ascii: bool,
    /// Whether to try strict UTF-8
    pub check_utf8: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            check_bom: true,
            check_ascii: true,
            check_utf8: true,
        }
    }
}

/// Result of encoding detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingDetection {
    /// Data starts with a byte-order mark
    Bom {
        /// Encoding of the first matching table entry
        encoding: Encoding,
        /// Signature length, i.e. where the content starts
        bom_len: usize,
        /// Other table entries that also matched, in table order
        alternatives: Vec<Encoding>,
    },
    /// Data strictly decodes under `encoding`
    Valid { encoding: Encoding },
    /// No rule matched
    Unknown {
        /// Last validation failure, `None` if no validation ran
        error: Option<DecodeError>,
    },
}

impl EncodingDetection {
    /// Detected encoding, if any
    pub fn encoding(&self) -> Option<Encoding> {
        match self {
            EncodingDetection::Bom { encoding, .. } | EncodingDetection::Valid { encoding } => {
                Some(*encoding)
            }
            EncodingDetection::Unknown { .. } => None,
        }
    }

    /// Whether more than one BOM matched
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, EncodingDetection::Bom { alternatives, .. } if !alternatives.is_empty())
    }
}

/// Detects the encoding of a byte buffer.
///
/// Rules, in order:
/// 1. A byte-order mark wins; when several match, the first table entry is chosen
/// 2. Strict ASCII
/// 3. Strict UTF-8
/// 4. Otherwise [`EncodingDetection::Unknown`]
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectConfig,
}

impl Detector {
    /// Create a detector with every rule enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom config
    pub fn with_config(config: DetectConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Detect the encoding of `data`
    pub fn detect(&self, data: &[u8]) -> EncodingDetection {
        if self.config.check_bom {
            if let Some(entry) = preferred_bom(data) {
                let alternatives: Vec<Encoding> = detect_boms(data)
                    .into_iter()
                    .filter(|&e| e != entry.encoding)
                    .collect();

                log::debug!(
                    "Detected {} from BOM (alternatives: {:?})",
                    entry.encoding,
                    alternatives
                );
                return EncodingDetection::Bom {
                    encoding: entry.encoding,
                    bom_len: entry.len(),
                    alternatives,
                };
            }
        }

        let mut last_error = None;
        let candidates = [
            (self.config.check_ascii, Encoding::Ascii),
            (self.config.check_utf8, Encoding::Utf8),
        ];

        for (enabled, encoding) in candidates {
            if !enabled {
                continue;
            }
            match validate(data, encoding) {
                Ok(()) => {
                    log::debug!("Detected {} by validation ({} bytes)", encoding, data.len());
                    return EncodingDetection::Valid { encoding };
                }
                Err(e) => last_error = Some(e),
            }
        }

        log::debug!("No encoding detected: {:?}", last_error);
        EncodingDetection::Unknown { error: last_error }
    }
}
