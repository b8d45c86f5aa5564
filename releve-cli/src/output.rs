//! Transaction serialization: CSV export, JSON, YAML, console table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use prettytable::{Table, format, row};
use releve_core::Transaction;
use tracing::info;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Console,
    Csv,
    Json,
    Yaml,
}

/// Write one document's transactions in the selected format.
///
/// CSV goes to `export_<stem>.csv` next to the document (or into
/// `output_dir`); the other formats write to stdout.
pub fn write_document(
    output: OutputFormat,
    document: &Path,
    transactions: &[Transaction],
    output_dir: Option<&Path>,
) -> Result<()> {
    match output {
        OutputFormat::Csv => write_csv(document, transactions, output_dir),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(transactions)?;
            println!("{rendered}");
            Ok(())
        }
        OutputFormat::Yaml => {
            let rendered = serde_yaml::to_string(transactions)?;
            print!("{rendered}");
            Ok(())
        }
        OutputFormat::Console => {
            print_table(transactions);
            Ok(())
        }
    }
}

fn csv_export_path(document: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| document.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(format!("export_{stem}.csv"))
}

fn write_csv(
    document: &Path,
    transactions: &[Transaction],
    output_dir: Option<&Path>,
) -> Result<()> {
    let path = csv_export_path(document, output_dir);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for transaction in transactions {
        writer.serialize(transaction)?;
    }
    writer.flush()?;
    info!(file = %path.display(), rows = transactions.len(), "wrote CSV export");
    Ok(())
}

fn print_table(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("(no transactions)");
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(row!["date", "value_date", "label", "value", "debit"]);
    for t in transactions {
        table.add_row(row![
            t.date.map(|d| d.to_string()).unwrap_or_default(),
            t.value_date.map(|d| d.to_string()).unwrap_or_default(),
            t.label,
            format!("{:.2}", t.value),
            t.debit,
        ]);
    }
    table.printstd();
}
