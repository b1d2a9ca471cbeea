/// Vacmap command-line tool — decode, inspect, and render the map
/// payloads a Tuya-based robot vacuum publishes through its DPS
/// (data point) status table.
///
/// # Command overview
///
/// ```text
/// vacmap <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a payload and print the map model as JSON
///   inspect    Print header fields and a hex dump of a payload
///   grid       Probe a payload for an occupancy grid, write a PGM image
///   help       Print help information
///
/// Global options:
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, bad base64, etc.)    |
///
/// All error details are written to stderr so stdout can be piped cleanly.
/// A payload that decodes to `unclassified` is still exit code 0 — the
/// tool decoded it, the heuristics just had nothing to say.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_grid;
mod cmd_inspect;
mod payload;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The vacmap command-line tool.
///
/// Decode, inspect, and render robot-vacuum map payloads.
#[derive(Parser)]
#[command(name = "vacmap", version, about = "Robot vacuum map payload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload and print the resulting map model as JSON.
    Decode(DecodeArgs),
    /// Print header fields and a hex dump of a payload.
    Inspect(InspectArgs),
    /// Probe a payload for an occupancy grid and write it as a PGM image.
    Grid(GridArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Input-source flags shared by every sub-command.
///
/// A payload can arrive three ways, resolved in this order:
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────────┐
/// │ Flag       │ Input                                                 │
/// ├────────────┼───────────────────────────────────────────────────────┤
/// │ (default)  │ FILE holds raw payload bytes                          │
/// │ --base64   │ FILE holds a base64 transport string ("-" = stdin)    │
/// │ --status   │ FILE holds a device status JSON dump; the payload is  │
/// │            │ pulled from its "dps" table (see --dps)               │
/// └────────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to the payload file, or `-` for stdin with `--base64`.
    pub file: PathBuf,

    /// Treat the input as a base64 transport string.
    #[arg(long)]
    pub base64: bool,

    /// Treat the input as a device status JSON dump and extract the
    /// map payload from its `dps` table.
    #[arg(long, conflicts_with = "base64")]
    pub status: bool,

    /// DPS key to read with `--status`. Without this, the known map
    /// keys are probed in order (15, 107, 110, 111, 112, 121, 122, 123)
    /// and the first present one wins.
    #[arg(long, requires = "status")]
    pub dps: Option<String>,
}

/// Arguments for `vacmap decode`.
///
/// Decodes the payload and prints the map model as a single JSON
/// object: magic, version, strategy chain, rooms, path, raw size, and
/// a hex preview. Unknown payloads print as `"type": "unclassified"`
/// with a `reason` field rather than failing.
#[derive(clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Print a one-line human summary to stderr alongside the JSON.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for `vacmap inspect`.
///
/// Prints the classified header (magic, version, strategy) followed by
/// a hex dump of the payload body, 16 bytes per line with an ASCII
/// column. Meant for staring at payloads the decoder cannot place.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Limit the hex dump to the first N bytes (0 = no limit).
    #[arg(long, default_value_t = 256)]
    pub limit: usize,
}

/// Arguments for `vacmap grid`.
///
/// Probes the payload (after peeling any compression layer) for an
/// occupancy-grid layout and writes it as a binary PGM image. Fails
/// when no grid is detected.
#[derive(clap::Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output `.pgm` file path.
    #[arg(short, long)]
    pub output: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Grid(args) => cmd_grid::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
