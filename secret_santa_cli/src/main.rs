mod config;
mod draw;
mod export;
mod import;
mod report;

use std::path::Path;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use secret_santa_entities::mock::{make_mock_roster_with_options, MockRosterOptions};

use crate::config::{read_config, Config};
use crate::draw::ExchangeDrawGenerator;
use crate::export::save_assignments;
use crate::import::{load_roster, HeaderMatching};
use crate::report::display_assignments;

#[derive(clap::Parser)]
#[command(about = "Draws a Secret Santa gift exchange from a participant roster")]
struct Cli {
    /// Roster file with Name and Email columns.
    #[arg(long)]
    input: Option<String>,
    /// Where the assignment file is written.
    #[arg(long)]
    output: Option<String>,
    /// Fixes the draw to a reproducible outcome.
    #[arg(long)]
    seed: Option<u64>,
    /// Upper bound on reshuffles before the draw is abandoned.
    #[arg(long)]
    attempts: Option<usize>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Writes a sample roster to try the exchange with.
    GenerateRoster {
        path: String,
        #[arg(long, default_value_t = 9)]
        count: usize,
    },
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Command::GenerateRoster { path, count } => {
                let roster = make_mock_roster_with_options(MockRosterOptions {
                    size: *count,
                    use_random_names: true,
                });

                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(["Name", "Email"])?;
                for participant in roster.iter() {
                    writer.write_record([participant.name.as_str(), participant.email.as_str()])?;
                }
                writer.flush()?;

                println!("Wrote sample roster to {}.", path);
                Ok(())
            }
        }
    }
}

fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging_config));

    // Assignments go to stdout, so diagnostics stay on stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_exchange<R>(config: &Config, rng: &mut R) -> anyhow::Result<()>
where
    R: Rng,
{
    let matching = if config.lenient_headers {
        HeaderMatching::Lenient
    } else {
        HeaderMatching::Exact
    };

    let participants = match load_roster(Path::new(&config.input_path), matching) {
        Ok(participants) => participants,
        Err(e) => {
            println!("Could not read roster: {}", e);
            return Ok(());
        }
    };

    if participants.is_empty() {
        println!("No participants loaded. Exiting program.");
        return Ok(());
    }

    let generator = ExchangeDrawGenerator {
        max_attempts: config.max_shuffle_attempts,
    };

    let assignments = match generator.generate(&participants, rng) {
        Ok(assignments) => assignments,
        Err(e) => {
            println!("{}", e);
            vec![]
        }
    };

    display_assignments(&assignments);
    save_assignments(&assignments, Path::new(&config.output_path))?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = read_config();
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(attempts) = cli.attempts {
        config.max_shuffle_attempts = attempts;
    }

    setup_logging(&config);

    if let Some(command) = cli.command {
        return command.run();
    }

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    run_exchange(&config, &mut rng)
}
