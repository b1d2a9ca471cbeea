/// Implementation of `vacmap inspect`.
///
/// Loads the payload, runs the decoder for its classification, and
/// prints header fields followed by a hex dump of the payload bytes.
///
/// # Output format
///
/// ```text
/// Header: magic=0xaa00 version=1 strategy=path
/// Size:   121 bytes, 5 path points, 0 rooms
/// Hex dump (first 256 bytes):
///   0000  aa 00 01 17 17 00 aa 00  1b 05 aa 00 ff 46 00 18  .............F..
///   0010  04 00 00 fa 05 00 04 00  ...                      ........
/// ```
///
/// The dump covers the whole payload as supplied, header included, so
/// offsets line up with what a wire capture shows.
use anyhow::Result;
use vacmap_decoder::decode_bytes;

use crate::InspectArgs;
use crate::payload;

/// Run the `vacmap inspect` command.
///
/// # Errors
///
/// Returns an error only for input acquisition problems; any payload
/// that loads gets inspected, classifiable or not.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = payload::load(&args.input)?;
    let model = decode_bytes(&bytes);

    let magic = model
        .magic
        .map_or_else(|| "none".to_string(), |m| format!("{m:#06x}"));
    let version = model
        .version
        .map_or_else(|| "none".to_string(), |v| v.to_string());
    println!(
        "Header: magic={magic} version={version} strategy={}",
        model.strategy_label()
    );
    if let Some(reason) = &model.reason {
        println!("Reason: {reason:?}");
    }
    println!(
        "Size:   {} bytes, {} path points, {} rooms",
        model.raw_size,
        model.path.len(),
        model.room_count()
    );

    let shown = if args.limit == 0 {
        bytes.len()
    } else {
        bytes.len().min(args.limit)
    };
    if shown == bytes.len() {
        println!("Hex dump:");
    } else {
        println!("Hex dump (first {shown} bytes):");
    }
    print_hex_dump(&bytes[..shown]);

    Ok(())
}

/// 16 bytes per line: offset, hex column, ASCII column.
fn print_hex_dump(raw: &[u8]) {
    for (i, chunk) in raw.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("  {offset:04x}  {hex:<47}  {ascii}");
    }
}
