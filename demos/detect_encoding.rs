//! Example demonstrating BOM sniffing, strict validation and combined detection
//!
//! Run with `cargo run --example detect_encoding`.

use emx_encdetect::{detect_boms, validate, Detector, Encoding, EncodingDetection};

fn main() -> anyhow::Result<()> {
    println!("=== Encoding Detection Example ===\n");

    let samples: Vec<(&str, Vec<u8>)> = vec![
        ("plain ascii", b"Hello, world!".to_vec()),
        ("utf-8 text", "héllo 世界".as_bytes().to_vec()),
        ("utf-8 with BOM", b"\xEF\xBB\xBFhello".to_vec()),
        ("utf-16-be with BOM", vec![0xFE, 0xFF, 0x00, 0x41]),
        ("utf-32-le BOM (ambiguous)", vec![0xFF, 0xFE, 0x00, 0x00]),
        ("binary", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]),
    ];

    // Codec names come in as strings and are parsed once
    let codecs: Vec<Encoding> = ["ASCII", "UTF-8", "utf16-le"]
        .iter()
        .map(|name| name.parse::<Encoding>())
        .collect::<Result<_, _>>()?;

    let detector = Detector::new();

    for (i, (label, data)) in samples.iter().enumerate() {
        println!("{}. {} - {} bytes", i + 1, label, data.len());

        let boms: Vec<&str> = detect_boms(data).iter().map(|e| e.name()).collect();
        println!("   BOMs:      {:?}", boms);

        for codec in &codecs {
            match validate(data, *codec) {
                Ok(()) => println!("   {:<10} valid", codec.name()),
                Err(e) => println!("   {:<10} {}", codec.name(), e),
            }
        }

        let summary = match detector.detect(data) {
            EncodingDetection::Bom {
                encoding,
                bom_len,
                alternatives,
            } if alternatives.is_empty() => format!("{} (BOM, {} bytes)", encoding, bom_len),
            EncodingDetection::Bom {
                encoding,
                bom_len,
                alternatives,
            } => format!(
                "{} (BOM, {} bytes; also matches {:?})",
                encoding, bom_len, alternatives
            ),
            EncodingDetection::Valid { encoding } => format!("{} (validated)", encoding),
            EncodingDetection::Unknown { error: Some(e) } => format!("unknown ({})", e),
            EncodingDetection::Unknown { error: None } => "unknown".to_string(),
        };
        println!("   Detected:  {}\n", summary);
    }

    println!("✓ All samples processed");

    Ok(())
}
