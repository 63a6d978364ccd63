use std::env;
use trickplay::{parse_bif, parse_bif_header, ImageCrateDecoder};

fn main() {
    println!("🔍 BIF Scanner - Trickplay Index Analysis");
    println!("=========================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: bif_scanner <file.bif> [--decode]");
        println!("Example: bif_scanner downloads/0f2a1c.bif --decode");
        return;
    }
    let file_path = &args[1];
    let decode = args.iter().skip(2).any(|a| a == "--decode");

    match scan_bif(file_path, decode) {
        Ok(_) => println!("\n✅ Scan completed successfully"),
        Err(e) => println!("\n❌ Scan failed: {}", e),
    }
}

fn scan_bif(path: &str, decode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;

    println!("📄 File: {}", path);
    println!("📏 Size: {} bytes", bytes.len());
    println!();

    let (header, index) = parse_bif_header(&bytes)?;
    println!("📦 Version: {}", header.version);
    println!("🖼️  Images: {}", header.image_count);
    println!("⏱️  Timestamp multiplier: {}", header.timestamp_multiplier);
    println!();

    for (i, entry) in index.iter().enumerate() {
        let end = index
            .get(i + 1)
            .map(|next| next.offset as usize)
            .unwrap_or(bytes.len());
        let size = end as i64 - entry.offset as i64;
        let marker = if size <= 0 || end > bytes.len() {
            "⚠️ "
        } else {
            "  "
        };
        println!(
            "{}#{:<5} frame {:<6} @ {:>8} ms [offset: {}, size: {}]",
            marker,
            i,
            entry.timestamp,
            u64::from(entry.timestamp) * u64::from(header.timestamp_multiplier),
            entry.offset,
            size
        );
    }

    if decode {
        let data = parse_bif(&bytes, 0, &ImageCrateDecoder)?;
        println!();
        println!(
            "🧩 Decoded {} of {} images",
            data.decoded_count(),
            data.image_count
        );
    }

    Ok(())
}
