/// Payload acquisition shared by every sub-command.
///
/// Resolves the [`InputArgs`] flags to raw payload bytes:
///
/// - default: the file's bytes are the payload as-is;
/// - `--base64`: the file (or stdin via `-`) holds a base64 transport
///   string, decoded here;
/// - `--status`: the file holds a device status JSON dump; the payload
///   is lifted from its `dps` table, base64-decoded.
///
/// Status dumps look like:
///
/// ```json
/// { "devId": "...", "dps": { "15": "qgAB...", "101": true } }
/// ```
///
/// Firmware revisions disagree on which DPS key carries the map, so
/// without `--dps` the known keys are probed in a fixed order and the
/// first string-valued entry wins.
use std::fs;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::InputArgs;

/// DPS keys observed carrying map payloads, probed in order. 15 is
/// the documented map key; the rest come from vendor firmware dumps.
pub const MAP_DPS_KEYS: [&str; 8] = ["15", "107", "110", "111", "112", "121", "122", "123"];

/// Resolve the input flags to raw payload bytes.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the base64 is
/// invalid, the status JSON is malformed, or no candidate DPS key
/// holds a string value.
pub fn load(args: &InputArgs) -> Result<Vec<u8>> {
    if args.status {
        return load_from_status(&args.file, args.dps.as_deref());
    }

    if args.base64 {
        let text = read_text(&args.file)?;
        return BASE64
            .decode(text.trim())
            .with_context(|| format!("{} is not valid base64", args.file.display()));
    }

    fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))
}

fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn load_from_status(path: &Path, dps_key: Option<&str>) -> Result<Vec<u8>> {
    let text = read_text(path)?;
    let status: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let dps = status
        .get("dps")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| anyhow!("{} has no \"dps\" object", path.display()))?;

    let (key, encoded) = match dps_key {
        Some(key) => {
            let value = dps
                .get(key)
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| anyhow!("dps key {key:?} is missing or not a string"))?;
            (key, value)
        }
        None => MAP_DPS_KEYS
            .iter()
            .find_map(|&key| dps.get(key).and_then(serde_json::Value::as_str).map(|v| (key, v)))
            .ok_or_else(|| {
                anyhow!(
                    "no candidate dps key holds a payload (tried {})",
                    MAP_DPS_KEYS.join(", ")
                )
            })?,
    };

    BASE64
        .decode(encoded.trim())
        .with_context(|| format!("dps key {key:?} is not valid base64"))
}
