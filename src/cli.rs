use clap::{Parser, Subcommand};
use clipboard::{ClipboardContext, ClipboardProvider};
use serde::Serialize;
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chord_intervals::chord::{self, ChordAddition, ChordAlteration, ChordError, ChordSpec, ChordType};
use chord_intervals::config::{self, Config, OutputFormat};
use chord_intervals::interval::{self, Interval, IntervalError};
use chord_intervals::note::Note;

/// Chord interval analysis tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the intervals and notes of a chord
    Chord(ChordArgs),

    /// Show a single interval from the catalog
    Interval(IntervalArgs),
}

/// List the intervals and notes of a chord
#[derive(Parser)]
struct ChordArgs {
    /// Chord type: maj, min, dim, dom, sus2, sus4, aug, dimSus2, dimSus4, augSus2, augSus4
    #[arg(required = true)]
    chord_type: ChordType,

    /// Root note, e.g. C, F#, Bb
    #[arg(short, long)]
    root: Option<Note>,

    /// Highest stacked third to include (1-13)
    #[arg(short, long)]
    extension: Option<u8>,

    /// Added degrees: add2, add4, add6, add9, add11, add13
    #[arg(short, long = "add", value_delimiter = ',', value_name = "TAG")]
    additions: Vec<ChordAddition>,

    /// Altered degrees: b5, #5, b9, #9, #11, b13
    #[arg(short = 'l', long = "alter", value_delimiter = ',', value_name = "TAG")]
    alterations: Vec<ChordAlteration>,

    /// Bass note when it differs from the root
    #[arg(short, long)]
    slash: Option<Note>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Copy output to clipboard instead of console
    #[arg(short, long)]
    copy: bool,
}

/// Show a single interval from the catalog
#[derive(Parser)]
struct IntervalArgs {
    /// Interval name, short name or length in semitones
    #[arg(required = true)]
    key: String,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Copy output to clipboard instead of console
    #[arg(short, long)]
    copy: bool,
}

#[derive(Serialize)]
struct ChordReport {
    chord: String,
    notes: Vec<String>,
    intervals: Vec<Interval>,
}

fn format_interval_row(interval: &Interval) -> String {
    format!(
        "{:>2}  {:<3} {:<15} tension {}",
        interval.length, interval.short_name, interval.name, interval.tension
    )
}

fn render_chord(report: &ChordReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Table => {
            let mut lines = vec![
                format!("Chord: {}", report.chord),
                format!("Notes: {}", report.notes.join(" ")),
            ];
            lines.extend(report.intervals.iter().map(format_interval_row));
            lines.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Short => report
            .intervals
            .iter()
            .map(|i| i.short_name)
            .collect::<Vec<&str>>()
            .join(" "),
    })
}

fn render_interval(interval: &Interval, format: OutputFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Table => {
            let mut row = format_interval_row(interval);
            if !interval.alternate_names.is_empty() {
                row.push_str(&format!("\n    also: {}", interval.alternate_names.join(", ")));
            }
            row
        }
        OutputFormat::Json => serde_json::to_string_pretty(interval)?,
        OutputFormat::Short => interval.short_name.to_string(),
    })
}

/// Write output to the console, or the clipboard when requested
fn emit(output: String, copy: bool) -> Result<(), Box<dyn std::error::Error>> {
    if copy {
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(output))
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;
        println!("Successfully copied to clipboard!");
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn run_chord_command(args: &ChordArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Fall back to config.toml for anything left off the command line
    let root = match args.root {
        Some(root) => root,
        None => config.chord.default_root.parse::<Note>()?,
    };

    let mut spec = ChordSpec::new(args.chord_type)
        .root(root)
        .extension(args.extension.unwrap_or(config.chord.default_extension))
        .additions(args.additions.clone())
        .alterations(args.alterations.clone());
    if let Some(slash) = args.slash {
        spec = spec.slash(slash);
    }
    debug!(?spec, "chord spec from arguments");

    let resolved = chord::set_defaults(&spec)?;
    let report = ChordReport {
        chord: resolved.to_string(),
        notes: resolved.notes()?.iter().map(|n| n.to_string()).collect(),
        intervals: resolved.intervals()?,
    };

    let output = render_chord(&report, args.format.unwrap_or(config.output.format))?;
    emit(output, args.copy)
}

fn run_interval_command(args: &IntervalArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let key = interval::parse_key(&args.key)?;
    let data = interval::get_interval_data(&key)?;
    let output = render_interval(data, args.format.unwrap_or(config.output.format))?;
    emit(output, args.copy)
}

fn init_tracing(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    init_tracing(&config, cli.verbose);

    match &cli.command {
        Commands::Chord(args) => run_chord_command(args, &config)?,
        Commands::Interval(args) => run_interval_command(args, &config)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(err) => {
            eprintln!("\nERROR: {}\n", err);
            match err.downcast_ref::<ChordError>() {
                Some(ChordError::InvalidChord { kind: "note", .. }) => {
                    eprintln!("Notes are a letter A-G followed by any number of # or b.");
                }
                Some(ChordError::InvalidExtension(_)) => {
                    eprintln!("Extensions run from 1 (root only) to 13.");
                }
                _ => {}
            }
            if let Some(IntervalError::NotFound(_)) = err.downcast_ref::<IntervalError>() {
                eprintln!("Valid short names:");
                for interval in interval::INTERVALS.iter() {
                    eprintln!("  {:<3} {}", interval.short_name, interval.name);
                }
            }
            process::exit(1);
        }
    }
}
