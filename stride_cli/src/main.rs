use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Activity record summaries: distance, speed and calories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the profile name
    #[arg(long, global = true)]
    name: Option<String>,

    /// Override the profile weight (kg)
    #[arg(long, global = true)]
    weight: Option<f64>,

    /// Override the profile height (m)
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Do not print the profile banner before the reports
    #[arg(long, global = true)]
    no_banner: bool,

    /// Log per-record progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize training records ("3456,Ходьба,3h00m")
    Training(RecordInput),

    /// Summarize daily step records ("678,0h50m")
    Steps(RecordInput),

    /// Summarize records of the given (or configured) kind
    Run {
        /// Record kind (training, day-steps)
        #[arg(long)]
        kind: Option<String>,

        #[command(flatten)]
        input: RecordInput,
    },

    /// Print the profile banner
    Profile,
}

#[derive(Args)]
struct RecordInput {
    /// Raw records; read from --file or stdin when omitted
    #[arg(allow_hyphen_values = true)]
    records: Vec<String>,

    /// Read records from a file, one per line
    #[arg(long, conflicts_with = "records")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    stride_core::logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?,
    };
    let profile = build_profile(&cli, &config);
    let show_banner = config.batch.show_banner && !cli.no_banner;

    match cli.command {
        Commands::Training(input) => cmd_summarize(RecordKind::Training, input, &profile, show_banner),
        Commands::Steps(input) => cmd_summarize(RecordKind::DaySteps, input, &profile, show_banner),
        Commands::Run { kind, input } => {
            let kind = match kind {
                Some(k) => k.parse()?,
                None => config.batch.default_kind,
            };
            cmd_summarize(kind, input, &profile, show_banner)
        }
        Commands::Profile => {
            println!("{}", profile.banner());
            Ok(())
        }
    }
}

fn build_profile(cli: &Cli, config: &Config) -> PersonalProfile {
    let mut profile = config.personal_profile();
    if let Some(name) = &cli.name {
        profile.name = name.clone();
    }
    if let Some(weight) = cli.weight {
        profile.weight = weight;
    }
    if let Some(height) = cli.height {
        profile.height = height;
    }
    profile
}

fn cmd_summarize(
    kind: RecordKind,
    input: RecordInput,
    profile: &PersonalProfile,
    show_banner: bool,
) -> Result<()> {
    let records = collect_records(input)?;

    if show_banner {
        println!("{}", profile.banner());
        println!();
    }

    let report = process_kind(kind, profile, &records);
    report.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())?;

    if report.failed() > 0 {
        tracing::info!(
            "{} of {} records could not be summarized",
            report.failed(),
            report.outcomes.len()
        );
    }

    Ok(())
}

fn collect_records(input: RecordInput) -> Result<Vec<String>> {
    if !input.records.is_empty() {
        return Ok(input.records);
    }

    match input.file {
        Some(path) => read_records_from_file(&path),
        None => read_records(io::stdin().lock()),
    }
}

fn read_records_from_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    tracing::info!("Reading records from {:?}", path);
    read_records(BufReader::new(file))
}

/// One record per line; blank lines are skipped
fn read_records<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            records.push(line.to_string());
        }
    }
    Ok(records)
}
