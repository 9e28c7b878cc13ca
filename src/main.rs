use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use laudoscan::analysis::GeminiClient;
use laudoscan::batch;
use laudoscan::config::{self, Settings};

/// Directory scanned when none is given, created on first run.
const DEFAULT_REPORT_DIR: &str = "exames";

/// Batch analyzer for mammography exam reports.
#[derive(Parser, Debug)]
#[command(name = "laudoscan")]
#[command(about = "Structure free-text mammography reports into JSON findings via the Gemini API")]
#[command(version)]
struct Cli {
    /// Directory containing .txt report files
    #[arg(value_name = "DIRECTORY", default_value = DEFAULT_REPORT_DIR)]
    directory: PathBuf,

    /// Gemini model override (otherwise GEMINI_MODEL or the built-in default)
    #[arg(short, long)]
    model: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if let Some(model) = cli.model {
        settings.model = model;
    }

    if !cli.directory.exists() {
        // First-run convenience for the default directory only; any other
        // missing directory is an operator mistake.
        if cli.directory.as_os_str() == DEFAULT_REPORT_DIR {
            if let Err(e) = std::fs::create_dir_all(&cli.directory) {
                eprintln!("Error: cannot create {}: {e}", cli.directory.display());
                process::exit(1);
            }
            println!(
                "Created '{}'. Add the .txt report files there and run again.",
                cli.directory.display()
            );
            return;
        }
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    let client = GeminiClient::from_settings(&settings);

    match batch::run_batch(&client, &settings, &cli.directory) {
        Ok(summary) => {
            println!();
            print!("{summary}");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        format!("{}=debug", env!("CARGO_PKG_NAME"))
    } else {
        config::default_log_filter()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
