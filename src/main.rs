use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use edscribe::config::{self, PipelineConfig};
use edscribe::Pipeline;

/// Bundled demo note, used when no input is supplied.
const DEMO_NOTE: &str = "\
CC: chest pain
HPI: 58M presents with substernal chest pain x2h, radiating to left arm, diaphoretic.
Vitals: BP 152/90, HR 96, RR 18, SpO2 97% RA
Exam: uncomfortable, diaphoretic, lungs clear, no murmur
ECG: ST depression noted in V4-V6
Labs: Troponin 0.08 (repeat pending)
Assessment: chest pain, concerning for ACS
Plan: serial troponins, continuous monitoring, cardiology consult";

#[derive(Parser, Debug)]
#[command(
    name = "edscribe",
    version,
    about = "Draft/verify documentation assistant for ED chest-pain notes (not medical advice)"
)]
struct Cli {
    /// Note file to process. Use `-` for stdin; omit for the bundled demo note.
    note: Option<PathBuf>,

    /// Drafting model on the generative backend.
    #[arg(long, default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Backend base URL.
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Upper bound on generated tokens per draft.
    #[arg(long, default_value_t = config::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Per-request backend timeout in seconds.
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Skip backend resolution and draft with the deterministic baseline.
    #[arg(long)]
    offline: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();

    let note = match read_note(cli.note.as_deref()) {
        Ok(note) => note,
        Err(e) => {
            eprintln!("error: could not read note: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = if cli.offline {
        Pipeline::baseline_only()
    } else {
        let pipeline_config = PipelineConfig {
            model: cli.model,
            base_url: cli.base_url,
            max_tokens: cli.max_tokens,
            timeout_secs: cli.timeout_secs,
        };
        Pipeline::new(&pipeline_config)
    };

    let result = pipeline.run(&note);

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: could not serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_note(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        None => Ok(DEMO_NOTE.to_string()),
        Some(p) if p == Path::new("-") => {
            let mut note = String::new();
            std::io::stdin().read_to_string(&mut note)?;
            Ok(note)
        }
        Some(p) => std::fs::read_to_string(p),
    }
}
