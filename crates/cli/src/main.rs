//! CLI for inspecting and exporting Kin rosters.
//!
//! A roster is a JSON array of people; see `roster` for the layout.

mod roster;
mod sink;

use clap::{Parser, Subcommand};
use kin_core::{Address, Person};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kin", version, about = "People and their postal addresses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every person in a roster.
    Show {
        #[arg(short, long, env = "KIN_ROSTER")]
        input: PathBuf,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a roster as NDJSON, one person per line.
    Export {
        #[arg(short, long, env = "KIN_ROSTER")]
        input: PathBuf,

        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an example person as JSON.
    Sample,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn sample_person() -> Person<String> {
    Person::new(
        "Jane",
        "Doe",
        Address::new("Main St", 12, "90210", "Springfield"),
        [],
    )
}

/// Execute one command, writing its primary output to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { input, json } => {
            let people = roster::load(&input)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&people)?)?;
            } else {
                write!(out, "{}", roster::render(&people))?;
            }
        }
        Commands::Export { input, output } => {
            let people = roster::load(&input)?;

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)?;
                    let mut s = sink::NdjsonSink::new(file);
                    s.write_all(&people)?;
                    tracing::debug!(rows = s.rows_written(), "ndjson sink: flushing");
                    let n = s.finish()?;
                    tracing::info!(rows = n, path = %path.display(), "ndjson sink: wrote to file");
                }
                None => {
                    let mut s = sink::NdjsonSink::new(&mut *out);
                    s.write_all(&people)?;
                    tracing::debug!(rows = s.rows_written(), "ndjson sink: flushing");
                    let n = s.finish()?;
                    tracing::info!(rows = n, "ndjson sink: wrote to stdout");
                }
            }
        }
        Commands::Sample => {
            writeln!(out, "{}", serde_json::to_string_pretty(&sample_person())?)?;
        }
    }

    out.flush()?;
    Ok(())
}
