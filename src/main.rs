use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rpe::config::Config;
use rpe::resource::get_registry;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Resolve cloud resource attributes into full resource names
#[derive(Parser, Debug)]
#[command(name = "rpe", version, about, long_about = None)]
struct Args {
    /// Provider namespace (defaults to config, then "gcp")
    #[arg(short, long)]
    provider: Option<String>,

    /// Attribute as key=value (repeatable, overrides --file)
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE")]
    attributes: Vec<String>,

    /// JSON or YAML file holding an attribute object
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// List the provider's resource types and exit
    #[arg(long)]
    list_types: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("rpe started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("rpe").join("rpe.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".rpe").join("rpe.log");
    }
    PathBuf::from("rpe.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let config = Config::load();
    let provider = config.effective_provider(args.provider.as_deref());
    let registry = get_registry();

    if args.list_types {
        for key in registry.provider_type_keys(&provider)? {
            println!("{}", key);
        }
        return Ok(());
    }

    let attributes = config.collect_attributes(args.file.as_deref(), &args.attributes)?;
    tracing::info!("Resolving {} attributes for provider {}", attributes.len(), provider);

    let resource = registry
        .resolve(&provider, attributes)
        .context("Failed to resolve resource")?;

    let output = if args.compact {
        serde_json::to_string(&resource)?
    } else {
        serde_json::to_string_pretty(&resource)?
    };
    println!("{}", output);

    Ok(())
}
