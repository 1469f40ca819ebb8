use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod draft;

/// Build, query and verify EMVCo merchant-presented QR payloads.
#[derive(Parser, Debug)]
#[command(name = "emvqr", version, about)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides this).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode fields given as PATH=VALUE, e.g. `00=01 38.01.00=970415`.
    Build {
        /// Field in PATH=VALUE form; dotted paths create nested templates.
        #[arg(short, long = "field", value_name = "PATH=VALUE", required = true)]
        fields: Vec<String>,

        /// Leave out the trailing checksum field.
        #[arg(long)]
        no_crc: bool,
    },
    /// Print the value at a tag path; exits with 1 when not found.
    Get {
        payload: String,
        #[arg(required = true)]
        path: Vec<String>,
    },
    /// Print the checksum of an arbitrary input.
    Crc { input: String },
    /// Verify the trailing checksum; exits with 1 when invalid.
    Check { payload: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<bool, String> {
    match command {
        Command::Build { fields, no_crc } => {
            let fields = draft::parse_fields(&fields).map_err(|e| e.to_string())?;
            let encoded = if no_crc {
                emvqr::encode_fields(&fields)
            } else {
                emvqr::build_payload(&fields)
            };
            let payload = encoded.map_err(|e| e.to_string())?;
            println!("{}", payload);
            Ok(true)
        }
        Command::Get { payload, path } => match emvqr::get_in(&payload, path.as_slice()) {
            Some(value) => {
                println!("{}", value);
                Ok(true)
            }
            None => {
                tracing::info!(?path, "no value at path");
                Ok(false)
            }
        },
        Command::Crc { input } => {
            println!("{}", emvqr::compute_crc(&input));
            Ok(true)
        }
        Command::Check { payload } => {
            let valid = emvqr::check_crc(&payload);
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(valid)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(message) => {
            tracing::error!(%message, "command failed");
            eprintln!("error: {}", message);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_arguments() {
        let cli = Cli::parse_from(["emvqr", "build", "-f", "00=01", "--field", "58=VN", "--no-crc"]);
        match cli.command {
            Command::Build { fields, no_crc } => {
                assert_eq!(fields, vec!["00=01".to_string(), "58=VN".to_string()]);
                assert!(no_crc);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_run_commands() {
        assert_eq!(run(Command::Check { payload: "000".to_string() }), Ok(false));
        assert_eq!(
            run(Command::Get { payload: "0103333".to_string(), path: vec!["01".to_string()] }),
            Ok(true)
        );
        assert_eq!(
            run(Command::Get { payload: "0103333".to_string(), path: vec!["02".to_string()] }),
            Ok(false)
        );
        assert!(run(Command::Build { fields: vec!["6=x".to_string()], no_crc: false }).is_err());
    }
}
