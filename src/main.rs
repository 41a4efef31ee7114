// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use scim2fcitx::app_config::{Config, LogLevel};
use scim2fcitx::{Controller, OutputTarget};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for scim2fcitx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// scim2fcitx - convert a SCIM table input method to fcitx table files
#[derive(Parser, Debug)]
#[command(name = "scim2fcitx")]
#[command(version)]
#[command(about = "Convert scim table file to fcitx table files")]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
#[command(long_about = "Reads a table-based SCIM input method source and writes the fcitx
configuration (<NAME>.conf) and code table data (<NAME>.txt).

EXAMPLES:
    scim2fcitx -n cangjie cangjie.txt.in          # Writes cangjie.conf and cangjie.txt
    scim2fcitx -n array30 -s array30.scim         # Print both documents to stdout
    scim2fcitx -n quick -o out/ quick.scim        # Write into out/
    scim2fcitx completions bash > scim2fcitx.bash # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input method short name
    #[arg(short, long, required = true)]
    name: Option<String>,

    /// Output to stdout instead of files
    #[arg(short, long)]
    stdout: bool,

    /// Directory for the output files (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Optional JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Input scim table file
    #[arg(value_name = "INFILE", required = true)]
    infile: Option<PathBuf>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Everything up to trace passes the logger; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scim2fcitx", &mut std::io::stdout());
            Ok(())
        }
        None => run_convert(cli),
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    let im_name = options.name
        .ok_or_else(|| anyhow!("--name is required"))?;
    let infile = options.infile
        .ok_or_else(|| anyhow!("INFILE is required"))?;

    let mut config = Config::load_or_default(options.config.as_deref())?;

    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.to_string_lossy().into_owned();
    }

    log::set_max_level(config.log_level.into());

    config.validate()
        .context("Configuration validation failed")?;

    debug!("Using configuration: {:?}", config);

    let target = if options.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::Directory(PathBuf::from(&config.output_dir))
    };

    let controller = Controller::with_config(config);
    controller.run(&infile, &im_name, &target)?;

    Ok(())
}
