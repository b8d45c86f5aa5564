use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use releve_core::Template;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod batch;
mod convert;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "releve", version, about = "Parse bank-statement PDFs into transactions")]
struct Cli {
    /// Template id selecting the institution layout
    #[arg(default_value = "sg_pro")]
    template: String,

    /// A PDF file, or a directory whose *.pdf files are all parsed
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    format: OutputFormat,

    /// Converter binary (default: pdftotext discovered on PATH)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Documents converted and parsed concurrently
    #[arg(long, default_value_t = 4)]
    jobs: usize,

    /// Per-document conversion timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Directory for CSV exports (default: next to each input file)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let template: Arc<dyn Template> = Arc::from(releve_templates::by_id(&cli.template)?);
    let converter = match &cli.converter {
        Some(path) => path.clone(),
        None => convert::locate_pdftotext()?,
    };

    let documents = batch::discover_documents(&cli.path)?;
    if documents.is_empty() {
        bail!("no PDF documents found at {}", cli.path.display());
    }
    info!(
        count = documents.len(),
        template = %template.configuration().name,
        "starting batch"
    );

    let report = batch::run(
        documents,
        Arc::clone(&template),
        converter,
        cli.jobs,
        Duration::from_secs(cli.timeout_secs),
    )
    .await?;

    for document in &report.parsed {
        output::write_document(
            cli.format,
            &document.path,
            &document.transactions,
            cli.output_dir.as_deref(),
        )?;
    }

    let total = report.parsed.len() + report.failures;
    if report.failures > 0 {
        warn!("{} of {total} documents failed", report.failures);
    }
    info!("parsed {} of {total} documents", report.parsed.len());
    Ok(())
}
