/// Implementation of `vacmap grid`.
///
/// Loads the payload, peels any compression layer, probes the bytes
/// for an occupancy-grid layout, and writes the grid as a binary PGM
/// (P5) image. PGM opens in any netpbm-aware viewer, which is the
/// fastest way to check whether the probe found a real floor map.
///
/// ```text
/// $ vacmap grid capture.bin -o map.pgm
/// wrote 160x120 grid to map.pgm
/// ```
///
/// Unlike `decode`, finding no grid here *is* an error: the command's
/// whole job is producing an image.
use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result, anyhow};
use vacmap_decoder::{GridBitmap, peel_compression};

use crate::GridArgs;
use crate::payload;

/// Run the `vacmap grid` command.
///
/// # Errors
///
/// Returns an error when the input cannot be loaded, no grid layout is
/// detected in the payload, or the output file cannot be written.
pub fn run(args: &GridArgs) -> Result<()> {
    let bytes = payload::load(&args.input)?;
    let inner = peel_compression(&bytes);

    let grid = GridBitmap::detect(&inner)
        .ok_or_else(|| anyhow!("no occupancy grid detected in payload"))?;

    let file = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    grid.write_pgm(&mut out)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!(
        "wrote {}x{} grid to {}",
        grid.width,
        grid.height,
        args.output.display()
    );
    Ok(())
}
