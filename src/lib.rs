//! # emx-encdetect
//!
//! Character encoding detection for raw byte buffers.
//!
//! This crate answers one question: which encoding is this byte sequence in? It
//! never decodes, transcodes, or normalizes the content.
//!
//! ## Byte-Order Marks
//!
//! [`detect_boms`] reports every encoding whose BOM prefixes the input, in the
//! order of the [`BOMS`] table:
//!
//! | Order | Signature     | Encoding    |
//! |-------|---------------|-------------|
//! | 1     | `EF BB BF`    | `UTF-8`     |
//! | 2     | `00 00 FE FF` | `UTF-32-BE` |
//! | 3     | `FF FE 00 00` | `UTF-32-LE` |
//! | 4     | `FE FF`       | `UTF-16-BE` |
//! | 5     | `FF FE`       | `UTF-16-LE` |
//!
//! The UTF-32-LE BOM starts with the UTF-16-LE BOM, so `FF FE 00 00` matches both.
//! Callers wanting a single answer take the first match ([`preferred_bom`]).
//!
//! ## Strict Validation
//!
//! [`is_valid`] checks that a buffer decodes under one encoding with no replacement
//! and no skipping. [`validate`] reports where it stopped. Both are total: invalid
//! input is a `false`/[`DecodeError`] result, never a panic.
//!
//! ## Detection Rules
//!
//! [`Detector`] combines the two (in order, each can be disabled in [`DetectConfig`]):
//! 1. Leading BOM → [`EncodingDetection::Bom`]
//! 2. Valid ASCII → [`EncodingDetection::Valid`] (`ASCII`)
//! 3. Valid UTF-8 → [`EncodingDetection::Valid`] (`UTF-8`)
//! 4. Otherwise → [`EncodingDetection::Unknown`]
//!
//! ```
//! use emx_encdetect::{detect_boms, is_valid, Detector, Encoding};
//!
//! assert_eq!(
//!     detect_boms(&[0xFF, 0xFE, 0x00, 0x00]),
//!     vec![Encoding::Utf32Le, Encoding::Utf16Le]
//! );
//! assert!(is_valid("héllo".as_bytes(), Encoding::Utf8));
//! assert!(!is_valid(&[0x80], Encoding::Utf8));
//! assert_eq!(Detector::new().detect(b"ABC").encoding(), Some(Encoding::Ascii));
//! ```

pub mod bom;
pub mod detect;
pub mod encoding;
pub mod validate;

pub use bom::{detect_boms, preferred_bom, strip_bom, BomEntry, BOMS};
pub use detect::{DetectConfig, Detector, EncodingDetection};
pub use encoding::{Encoding, UnknownEncoding};
pub use validate::{is_ascii, is_utf8, is_valid, validate, DecodeError};
