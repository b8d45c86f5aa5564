//! Batch driver: bounded-concurrency conversion and parsing.
//!
//! Documents are independent, so conversion and parsing fan out across a
//! semaphore-bounded worker pool. A failing document is logged and counted,
//! never allowed to stop the batch; results keep the input order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use glob::glob;
use releve_core::{Template, Transaction, extract_transactions};
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::convert;

pub struct DocumentResult {
    pub path: PathBuf,
    pub transactions: Vec<Transaction>,
}

pub struct BatchReport {
    pub parsed: Vec<DocumentResult>,
    pub failures: usize,
}

/// A single PDF, or every `*.pdf` directly under a directory.
pub fn discover_documents(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let pattern = path.join("*.pdf");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 input path {}", path.display()))?;
    let mut documents: Vec<PathBuf> = glob(pattern)
        .context("listing PDF documents")?
        .filter_map(|entry| entry.ok())
        .collect();
    documents.sort();
    Ok(documents)
}

/// Convert and parse every document with at most `jobs` in flight.
pub async fn run(
    documents: Vec<PathBuf>,
    template: Arc<dyn Template>,
    converter: PathBuf,
    jobs: usize,
    timeout: Duration,
) -> Result<BatchReport> {
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut handles = Vec::with_capacity(documents.len());

    for path in documents {
        let semaphore = Arc::clone(&semaphore);
        let template = Arc::clone(&template);
        let converter = converter.clone();

        handles.push(tokio::spawn(async move {
            let result = async {
                let _permit = semaphore.acquire().await.context("semaphore closed")?;
                parse_one(&converter, &path, template.as_ref(), timeout).await
            }
            .await;
            (path, result)
        }));
    }

    let mut parsed = Vec::new();
    let mut failures = 0usize;
    for handle in handles {
        let (path, result) = handle.await.context("joining batch worker")?;
        match result {
            Ok(transactions) => {
                info!(document = %path.display(), count = transactions.len(), "parsed");
                parsed.push(DocumentResult { path, transactions });
            }
            Err(err) => {
                failures += 1;
                error!(document = %path.display(), "skipped: {err:#}");
            }
        }
    }

    Ok(BatchReport { parsed, failures })
}

async fn parse_one(
    converter: &Path,
    path: &Path,
    template: &dyn Template,
    timeout: Duration,
) -> Result<Vec<Transaction>> {
    let text = convert::pdf_to_text(converter, path, timeout).await?;
    let transactions = extract_transactions(&text, template)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(transactions)
}
