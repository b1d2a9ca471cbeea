/// Implementation of `vacmap decode`.
///
/// Loads the payload (raw file, base64 text, or a status dump's DPS
/// table), decodes it, and prints the map model as one JSON object on
/// stdout:
///
/// ```text
/// {"magic":"0xaa00","version":1,"type":"path","rooms":[],
///  "path":[[5911,170],...],"raw_size":121,"header_hex_preview":"aa0001..."}
/// ```
///
/// With `--summary`, a one-line human digest goes to stderr so the
/// JSON on stdout stays pipeable:
///
/// ```text
/// path payload v1: 5 points, 0 rooms (121 bytes)
/// ```
///
/// Unclassifiable payloads are not an error — they print with
/// `"type": "unclassified"` and a `reason`, and the exit code stays 0.
use anyhow::{Context, Result};
use vacmap_decoder::decode_bytes;
use vacmap_types::MapModel;

use crate::DecodeArgs;
use crate::payload;

/// Run the `vacmap decode` command.
///
/// # Errors
///
/// Returns an error only for input acquisition problems: unreadable
/// file, invalid base64, or a status dump with no usable DPS entry.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = payload::load(&args.input)?;
    let model = decode_bytes(&bytes);

    if args.summary {
        eprintln!("{}", summary_line(&model));
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&model)
    } else {
        serde_json::to_string(&model)
    }
    .context("cannot serialize map model")?;

    println!("{json}");
    Ok(())
}

/// One-line digest: strategy chain, version, point and room counts.
fn summary_line(model: &MapModel) -> String {
    let version = model
        .version
        .map_or_else(|| "?".to_string(), |v| v.to_string());
    let mut line = format!(
        "{} payload v{version}: {} points, {} rooms ({} bytes)",
        model.strategy_label(),
        model.path.len(),
        model.room_count(),
        model.raw_size,
    );
    if model.room_count() > 0 {
        use std::fmt::Write as _;
        let _ = write!(line, ", {:.1} m²", model.total_area_m2());
    }
    line
}
