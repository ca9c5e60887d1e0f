// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, LevelFilter};

use detector::csv_export::write_conflicts_to_csv;
use internal::{buffer_sensitivity, export_visits, load_visits, run, Source};
use model::base_types::{LineId, StopName};
use model::config::{Config, ConflictMode, TimeBuffer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Detects platform conflicts in a timetable.", long_about = None)]
struct Args {
    /// Timetable as delimited table, or json instance if the name ends in .json
    #[arg(value_name = "INPUT", required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Use the built-in demonstration timetable instead of INPUT
    #[arg(long)]
    sample: bool,

    /// YAML config (time_buffer, mode, capacity_policy, time_parsing, overlap_strategy)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time buffer in minutes (1 to 10); overrides the config
    #[arg(short, long)]
    buffer: Option<i64>,

    /// "anchored" or "grouped"; overrides the config
    #[arg(long)]
    mode: Option<ConflictMode>,

    /// Column delimiter of the input table
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Only consider these lines (comma separated)
    #[arg(long, value_delimiter = ',')]
    lines: Option<Vec<String>>,

    /// Only consider these stops (comma separated)
    #[arg(long, value_delimiter = ',')]
    stops: Option<Vec<String>>,

    /// Write the conflicts to this file (csv, or json together with --json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the timetable after filtering by --lines and --stops to this csv file
    #[arg(long, value_name = "FILE")]
    export_visits: Option<PathBuf>,

    /// Write the output as json report instead of csv
    #[arg(long)]
    json: bool,

    /// Also report the number of conflicts for every time buffer
    #[arg(long)]
    sweep_buffers: bool,

    /// Activate debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();
    debug!("{:#?}", args);

    if !args.delimiter.is_ascii() {
        bail!("delimiter '{}' is not a single byte", args.delimiter);
    }
    let source = match (&args.input, args.sample) {
        (_, true) => Source::Sample,
        (Some(path), false) => Source::File(path),
        (None, false) => bail!("no input given"),
    };
    let (visits, instance_config) = load_visits(source, args.delimiter as u8)?;

    let mut config = match &args.config {
        Some(path) => Config::from_yaml(&path.to_string_lossy())?,
        None => instance_config.unwrap_or_default(),
    };
    if let Some(minutes) = args.buffer {
        config = config.with_time_buffer(TimeBuffer::new(minutes)?);
    }
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }

    let lines: Option<Vec<LineId>> = args
        .lines
        .clone()
        .map(|l| l.into_iter().map(LineId::from).collect());
    let stops: Option<Vec<StopName>> = args
        .stops
        .clone()
        .map(|s| s.into_iter().map(StopName::from).collect());
    let visits = visits.filter(lines.as_deref(), stops.as_deref());

    let overview = visits.overview();
    println!(
        "\n---------- {} trips, {} stops, {} platforms, {} lines ----------",
        overview.trips, overview.stops, overview.platforms, overview.lines
    );

    if let Some(path) = &args.export_visits {
        ensure_parent_dir(path)?;
        export_visits(&visits, path)?;
    }

    let (conflicts, report) = run(&visits, config)?;
    if conflicts.is_empty() {
        println!("No conflicts detected.");
    } else {
        println!("{} conflicts detected:", conflicts.len());
        for conflict in conflicts.iter() {
            println!("  {}", conflict);
        }
    }

    if args.sweep_buffers {
        println!("\nConflicts per time buffer:");
        for (buffer, count) in buffer_sensitivity(&visits, config)? {
            println!("  {:>5}: {}", buffer.to_string(), count);
        }
    }

    if let Some(path) = &args.output {
        ensure_parent_dir(path)?;
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        if args.json {
            serde_json::to_writer_pretty(file, &report)?;
        } else {
            write_conflicts_to_csv(&conflicts, file)?;
        }
        println!("\nConflicts written to {}", path.display());
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() {
            fs::create_dir_all(parent_dir)
                .with_context(|| format!("cannot create {}", parent_dir.display()))?;
        }
    }
    Ok(())
}
