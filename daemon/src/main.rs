//! docverify — command-line entry point for the compliance engine.

use anyhow::Context;
use clap::Parser;
use docverify_engine::{ComplianceEngine, EngineConfig};
use docverify_types::DocumentType;
use docverify_utils::LogFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docverify", about = "Identity document verification")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "DOCVERIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "DOCVERIFY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "DOCVERIFY_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Simulated OCR latency in milliseconds.
    #[arg(long, env = "DOCVERIFY_OCR_LATENCY_MS")]
    ocr_latency_ms: Option<u64>,

    /// Refuse document verification requests.
    #[arg(long, env = "DOCVERIFY_DISABLE_VERIFICATION")]
    disable_verification: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Verify a `{ "request": ..., "customer": ... }` JSON body and print the envelope.
    Verify {
        /// File holding the JSON body; "-" reads stdin.
        #[arg(long, default_value = "-")]
        input: PathBuf,
    },
    /// Run OCR over a document image and print the extraction.
    Ocr {
        #[arg(long)]
        image: PathBuf,
    },
    /// Check a document number against the format for its type.
    CheckFormat {
        /// passport, national_id, or drivers_license.
        #[arg(long)]
        document_type: String,
        #[arg(long)]
        number: String,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let base = match cli.config {
        Some(ref path) => EngineConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(EngineConfig {
        document_verification_enabled: base.document_verification_enabled
            && !cli.disable_verification,
        ocr_latency_ms: cli.ocr_latency_ms.unwrap_or(base.ocr_latency_ms),
        log_format: cli.log_format.unwrap_or(base.log_format),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
    })
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("reading body from stdin")
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    docverify_utils::init_tracing(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Config => {
            print!("{}", config.to_toml_string());
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckFormat {
            document_type,
            number,
        } => {
            let engine = ComplianceEngine::new(config);
            let document_type = DocumentType::from(document_type);
            if engine.validate_document_format(&document_type, &number) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Verify { input } => {
            let body = read_input(&input)?;
            let engine = ComplianceEngine::new(config);
            let response = engine.submit_verification(&body);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(if response.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Ocr { image } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("reading image {}", image.display()))?;
            let engine = ComplianceEngine::new(config);
            let output = engine.perform_ocr(&bytes).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
