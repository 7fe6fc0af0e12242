use anyhow::{Context, Result};
use changenotes::{ChangenotesConfig, FeedTemplate, InputSource, parse_with};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "changenotes")]
#[command(version, about = "render bilingual changelogs as update feed descriptions", long_about = None)]
struct Cli {
    /// changelog file to read ('-' for stdin, built-in sample when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// configuration file (defaults to ./changenotes.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// output format (xml or json)
    #[arg(short, long, default_value = "xml")]
    format: OutputFormat,

    /// log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Xml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid output format: {}, use 'xml' or 'json'", s)),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ChangenotesConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => ChangenotesConfig::load_or_default("."),
    };

    let source = InputSource::from_arg(cli.input.as_deref());
    debug!(?source, "input source");
    let text = source.read().context("failed to read changelog input")?;

    let parsed = parse_with(&text, &config.changelog).context("failed to parse changelog")?;

    match cli.format {
        OutputFormat::Xml => {
            let template = FeedTemplate::new(config.feed);
            println!("{}", template.render_changelog(&parsed));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}
