//! contentgrade command-line client.
//!
//! Provides the `contentgrade` binary. The `grade` subcommand grades inline
//! text, a local file, or a web page and prints the result as JSON.
//!
//! Uses the same `GradingService` as the HTTP server endpoint, so a grade
//! from the command line goes through identical fetch, prompt, and parsing
//! steps.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contentgrade_core::GradeRequest;
use contentgrade_server::config::ServerConfig;
use contentgrade_server::error::ApiError;
use contentgrade_server::service::GradingService;

/// Grade written content with a language model.
#[derive(Parser)]
#[command(name = "contentgrade", about = "Grade written content with a language model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Score content out of 100 and list improvement suggestions.
    Grade {
        #[command(flatten)]
        input: InputArgs,

        /// Model identifier (overrides CONTENTGRADE_MODEL).
        #[arg(short, long)]
        model: Option<String>,

        /// Pretty-print the JSON result.
        #[arg(long)]
        pretty: bool,
    },
}

/// Exactly one source of content to grade.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Text to grade verbatim.
    #[arg(short, long)]
    content: Option<String>,

    /// Read the text to grade from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Fetch a web page, strip its markup, and grade the text.
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade {
            input,
            model,
            pretty,
        } => {
            let exit_code = run_grade(input, model, pretty).await;
            process::exit(exit_code);
        }
    }
}

/// Execute the grade subcommand.
///
/// Returns exit code: 0 = success, 1 = input error, 2 = configuration
/// error, 3 = upstream (fetch or model) failure.
async fn run_grade(input: InputArgs, model: Option<String>, pretty: bool) -> i32 {
    let request = match build_request(input) {
        Ok(req) => req,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };
    if let Some(model) = model {
        config.llm.model = model;
    }

    // Same service the HTTP handler uses
    let service = GradingService::with_http(&config.llm);
    match service.grade(&request).await {
        Ok(result) => {
            let json = if pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            };
            match json {
                Ok(json) => {
                    println!("{}", json);
                    0
                }
                Err(e) => {
                    eprintln!("Error: failed to serialize result: {}", e);
                    3
                }
            }
        }
        Err(err) => {
            let body = serde_json::to_string(&err.body())
                .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err));
            eprintln!("{}", body);
            exit_code(&err)
        }
    }
}

/// Turns the command-line input into a grading request.
fn build_request(input: InputArgs) -> Result<GradeRequest, String> {
    if let Some(path) = input.file {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
        return Ok(GradeRequest::from_content(content));
    }
    if let Some(content) = input.content {
        return Ok(GradeRequest::from_content(content));
    }
    if let Some(url) = input.url {
        return Ok(GradeRequest::from_url(url));
    }
    Err("one of --content, --file, or --url is required".to_string())
}

fn exit_code(err: &ApiError) -> i32 {
    match err {
        ApiError::MethodNotAllowed | ApiError::InvalidBody(_) | ApiError::NoContent => 1,
        ApiError::MissingApiKey => 2,
        ApiError::FetchFailed(_) | ApiError::AiRequestFailed(_) => 3,
    }
}
