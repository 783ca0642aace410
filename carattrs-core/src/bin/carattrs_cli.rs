//! Car Attributes CLI
//!
//! Commands: demo (default), assemble, check, self-check
//! Returns 2 when a value fails validation, 64 on a usage error, 1 on other failures

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use carattrs_core::{
    assemble, check_raw, render_car, render_report, run_self_check, AssemblyError,
    AttributeKind, CarRequest, OutputFormat, ValidationError,
};

#[derive(Parser)]
#[command(name = "carattrs-cli")]
#[command(about = "Car Attributes CLI - validated engine, body and wheel descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Run the built-in validation examples after the main output
    #[arg(long, global = true)]
    self_check: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstration car
    Demo,

    /// Assemble a car from a JSON payload
    Assemble {
        /// JSON payload (CarRequest)
        #[arg(short, long)]
        payload: String,

        /// Also print the car's fingerprint
        #[arg(long)]
        fingerprint: bool,
    },

    /// Validate a single raw attribute value
    Check {
        #[arg(short, long, value_enum)]
        attribute: AttributeKind,

        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
    },

    /// Run only the built-in validation examples
    SelfCheck,
}

/// Command line could not be parsed (EX_USAGE)
const EXIT_USAGE: u8 = 64;
const EXIT_VALIDATION: u8 = 2;
const EXIT_FAILURE: u8 = 1;

#[derive(Debug)]
enum Failure {
    Validation(ValidationError),
    Payload(String),
    Output(serde_json::Error),
    SelfCheck,
}

impl From<AssemblyError> for Failure {
    fn from(e: AssemblyError) -> Self {
        match e {
            AssemblyError::Validation(e) => Failure::Validation(e),
            AssemblyError::Payload(e) => Failure::Payload(e.to_string()),
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(e: ValidationError) -> Self {
        Failure::Validation(e)
    }
}

impl From<serde_json::Error> for Failure {
    fn from(e: serde_json::Error) -> Self {
        Failure::Output(e)
    }
}

impl Failure {
    fn exit_status(&self) -> u8 {
        match self {
            Failure::Validation(_) => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        }
    }

    fn report(&self, format: OutputFormat) {
        match (self, format) {
            (Failure::Validation(e), OutputFormat::Json) => {
                let output = serde_json::json!({
                    "valid": false,
                    "attribute": e.attribute,
                    "rejected": e.rejected,
                    "error": e.to_string(),
                });
                println!("{}", output);
            }
            (Failure::Validation(e), OutputFormat::Text) => {
                eprintln!("ValidationError: {}", e);
            }
            (Failure::Payload(e), _) => eprintln!("Invalid payload: {}", e),
            (Failure::Output(e), _) => eprintln!("Failed to render output: {}", e),
            // The report itself was already printed
            (Failure::SelfCheck, _) => {}
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Help and version requests are not errors.
fn parse_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_status(&e));
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            failure.report(cli.format);
            ExitCode::from(failure.exit_status())
        }
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let mut self_check = cli.self_check;

    match &cli.command {
        None | Some(Commands::Demo) => {
            let car = assemble(&CarRequest::default())?;
            print!("{}", render_car(&car, cli.format, false)?);
        }
        Some(Commands::Assemble { payload, fingerprint }) => {
            let request = CarRequest::from_json(payload)?;
            let car = assemble(&request)?;
            print!("{}", render_car(&car, cli.format, *fingerprint)?);
        }
        Some(Commands::Check { attribute, value }) => {
            let canonical = check_raw(*attribute, value)?;
            match cli.format {
                OutputFormat::Text => println!("{}: {}", attribute, canonical),
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "valid": true,
                        "attribute": attribute,
                        "value": canonical,
                    });
                    println!("{}", output);
                }
            }
        }
        Some(Commands::SelfCheck) => self_check = true,
    }

    if self_check {
        let report = run_self_check();
        println!("{}", render_report(&report, cli.format)?.trim_end());
        if !report.passed {
            return Err(Failure::SelfCheck);
        }
    }

    Ok(())
}
