use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for cr-render.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the sample CR YAML, or `-` to read from stdin.
    #[arg(value_name = "SAMPLE")]
    pub sample: String,

    /// Release name to inject.
    #[arg(value_name = "RELEASE")]
    pub release: String,

    /// Namespace to inject.
    #[arg(value_name = "NAMESPACE")]
    pub namespace: String,

    /// PostgreSQL password to inject.
    #[arg(value_name = "PG_PASSWORD")]
    pub pg_password: String,

    /// Optional storageClass override.
    #[arg(value_name = "STORAGE_CLASS")]
    pub storage_class: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_required_args() {
        let args =
            Args::parse_from(["cr-render", "sample.yaml", "prod", "prod-ns", "s3cr3t"]);
        assert_eq!(args.sample, "sample.yaml");
        assert_eq!(args.release, "prod");
        assert_eq!(args.namespace, "prod-ns");
        assert_eq!(args.pg_password, "s3cr3t");
        assert_eq!(args.storage_class, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_storage_class_and_verbosity() {
        let args = Args::parse_from([
            "cr-render",
            "sample.yaml",
            "prod",
            "prod-ns",
            "s3cr3t",
            "premium",
            "-vv",
        ]);
        assert_eq!(args.storage_class, Some("premium".to_string()));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_missing_required_args() {
        assert!(Args::try_parse_from(["cr-render", "sample.yaml", "prod"]).is_err());
    }
}
