//! External PDF→text conversion.
//!
//! The converter is `pdftotext -layout`: it preserves the monospaced column
//! alignment the extraction engine depends on. The binary path is injected
//! (or discovered on PATH), never hardcoded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

/// Locate `pdftotext` on PATH.
pub fn locate_pdftotext() -> Result<PathBuf> {
    which::which("pdftotext")
        .context("pdftotext not found on PATH (install poppler-utils or pass --converter)")
}

/// Run the converter on one document and return the layout-preserving text.
///
/// The subprocess is bounded by `timeout`. A missing binary, a nonzero exit,
/// or a timeout is fatal for this document only; the batch driver isolates
/// the failure.
pub async fn pdf_to_text(converter: &Path, pdf: &Path, timeout: Duration) -> Result<String> {
    let workdir = tempfile::tempdir().context("creating temp dir for converter output")?;
    let txt_path = workdir.path().join("out.txt");

    info!(file = %pdf.display(), "running pdftotext");
    let status = tokio::time::timeout(
        timeout,
        tokio::process::Command::new(converter)
            .arg("-layout")
            .arg(pdf)
            .arg(&txt_path)
            .status(),
    )
    .await
    .map_err(|_| anyhow::anyhow!("conversion timed out after {}s", timeout.as_secs()))?
    .with_context(|| format!("spawning {}", converter.display()))?;

    if !status.success() {
        bail!("{} exited with {status}", converter.display());
    }

    std::fs::read_to_string(&txt_path)
        .with_context(|| format!("reading converter output for {}", pdf.display()))
}
