use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pattern_demos::abstract_factory::FactoryVariant;
use pattern_demos::bridge::{AbstractionKind, Platform};
use pattern_demos::logger::init_logger;
use pattern_demos::{run_demos, DemoConfig, DemoKind, Result};

#[derive(Parser, Debug)]
#[command(name = "pattern-demos", about = "Run the Abstract Factory, Bridge and Singleton demos")]
struct Cli {
    /// TOML file selecting demos and variants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Demo to run (repeatable); overrides the config's list
    #[arg(short, long = "demo")]
    demos: Vec<DemoKind>,

    /// Factory variant for the Abstract Factory demo (1 or 2)
    #[arg(long)]
    factory: Option<FactoryVariant>,

    /// Implementation platform for the Bridge demo (a or b)
    #[arg(long)]
    platform: Option<Platform>,

    /// Abstraction for the Bridge demo (base or extended)
    #[arg(long)]
    abstraction: Option<AbstractionKind>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        if !self.demos.is_empty() {
            config.demos = self.demos.clone();
        }
        if let Some(factory) = self.factory {
            config.factory = factory;
        }
        if let Some(platform) = self.platform {
            config.platform = platform;
        }
        if let Some(abstraction) = self.abstraction {
            config.abstraction = abstraction;
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    for report in run_demos(&config)? {
        println!("{}", format!("=== {} ===", report.kind).bold());
        for line in &report.lines {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}

fn report_error(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("{} {}", "error:".bold().red(), message);
    ExitCode::FAILURE
}

/// Clap's rendered message without its own `error: ` prefix.
fn usage_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .strip_prefix("error: ")
        .unwrap_or(&rendered)
        .trim_end()
        .to_string()
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return report_error(usage_error_message(&err)),
    };
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = Cli::parse_from(["pattern-demos"]);
        assert_eq!(cli.resolve_config().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "pattern-demos",
            "--demo",
            "bridge",
            "--platform",
            "B",
            "--abstraction",
            "extended",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.demos, vec![DemoKind::Bridge]);
        assert_eq!(config.platform, Platform::B);
        assert_eq!(config.abstraction, AbstractionKind::Extended);
        assert_eq!(config.factory, FactoryVariant::One);
    }

    #[test]
    fn test_flags_override_only_their_field() {
        let file = config_file(
            r#"
demos = ["singleton", "bridge"]
factory = "2"
platform = "b"
"#,
        );
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["pattern-demos", "--config", path, "--factory", "1"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.demos, vec![DemoKind::Singleton, DemoKind::Bridge]);
        assert_eq!(config.factory, FactoryVariant::One);
        assert_eq!(config.platform, Platform::B);
        assert_eq!(config.abstraction, AbstractionKind::Base);
    }

    #[test]
    fn test_repeated_demo_flags_replace_file_list() {
        let file = config_file(r#"demos = ["singleton"]"#);
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from([
            "pattern-demos",
            "-c",
            path,
            "-d",
            "abstract-factory",
            "-d",
            "bridge",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.demos, vec![DemoKind::AbstractFactory, DemoKind::Bridge]);
    }

    #[test]
    fn test_missing_config_file_is_demo_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let cli = Cli::parse_from(["pattern-demos", "--config", path.to_str().unwrap()]);
        assert!(matches!(
            cli.resolve_config(),
            Err(pattern_demos::DemoError::Io { .. })
        ));
    }

    #[test]
    fn test_bad_selector_is_usage_error() {
        let err = Cli::try_parse_from(["pattern-demos", "--demo", "nope"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.use_stderr());

        let message = usage_error_message(&err);
        assert!(!message.starts_with("error:"));
        assert!(message.contains("Unknown demo variant: 'nope'"));
    }

    #[test]
    fn test_help_is_not_reported_as_error() {
        let err = Cli::try_parse_from(["pattern-demos", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}
