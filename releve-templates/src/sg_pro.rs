//! Société Générale, professional current account.
//!
//! Expected extracted-text section:
//!   Date      Valeur     Nature de l'opération                      Débit      Crédit
//!   21/03/2024  21/03/2024 VIREMENT RECU CLIENT A                             1 500,00
//!   22/03/2024  22/03/2024 PRLV SEPA EDF                        1 234,56
//!
//! Statement pages carry balance/total lines and print codes between the
//! operations; those are filtered as noise tokens. Labels wrap onto
//! continuation lines with a blank date column.

use anyhow::Result;
use regex::Regex;
use releve_core::{Row, Template, TemplateConfig, Transaction, debit_credit_value, parse_slash_date};

pub struct SgPro {
    config: TemplateConfig,
}

impl SgPro {
    pub fn new() -> Result<Self> {
        let start_patterns = vec![Regex::new(r"Date\s+Valeur\s+")?];
        let end_patterns = vec![
            Regex::new(r"1 Depuis l'étranger")?,
            Regex::new(r"N° d'adhérent JAZZ")?,
            Regex::new(r"Société Générale\s+552 120 222 RCS Paris")?,
            Regex::new(r"Les écritures précédées du signe")?,
        ];
        let noise_tokens = [
            "pli",
            "Du",
            "ca",
            "ta",
            "SOLDE PRÉCÉDENT AU",
            "TOTAUX DES MOUVEMENTS",
            "NOUVEAU SOLDE AU",
            "RA4-01K",
            "RA4-01P",
            "RA419064",
            "RA419105",
            "RA419294",
            "RA419310",
            "RA419338",
            "RA420027",
            "RA420258",
            "RA420321",
            "RA421019",
            "RA421090",
            "suite >>>",
            "*** SOLDE AU",
            "Soit pour information, solde en francs de",
            "RELEVÉ DES OPÉRATIONS",
        ]
        .iter()
        .map(|token| token.to_string())
        .collect();

        Ok(Self {
            config: TemplateConfig {
                id: "sg_pro".to_string(),
                name: "Société Générale - Compte courant professionnel".to_string(),
                start_patterns,
                end_patterns,
                leading_rows_to_drop: vec![0],
                noise_tokens,
                anchor_columns: vec![0],
            },
        })
    }
}

impl Template for SgPro {
    fn configuration(&self) -> &TemplateConfig {
        &self.config
    }

    fn format(&self, rows: &[Row]) -> Vec<Transaction> {
        rows.iter().map(format_row).collect()
    }
}

fn format_row(row: &Row) -> Transaction {
    if row.len() < 4 {
        return Transaction::placeholder();
    }

    // Wider blocks carry an extra column ahead of the amount pair.
    let (debit_raw, credit_raw) = if row.len() > 5 {
        (row.cell(4), row.cell(5))
    } else {
        (row.cell(3), row.cell(4))
    };
    let (value, debit) = debit_credit_value(debit_raw, credit_raw);

    Transaction {
        date: parse_slash_date(row.cell(0)),
        value_date: parse_slash_date(row.cell(1)),
        label: row.cell(2).to_string(),
        value,
        debit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_short_row_becomes_placeholder() {
        let template = SgPro::new().unwrap();
        let txns = template.format(&[row(&["21/03/2024", "21/03/2024", "ORPHAN"])]);
        assert_eq!(txns, vec![Transaction::placeholder()]);
    }

    #[test]
    fn test_five_cell_row_reads_amounts_from_cells_3_and_4() {
        let template = SgPro::new().unwrap();
        let txns = template.format(&[row(&[
            "21/03/2024",
            "22/03/2024",
            "PRLV SEPA EDF",
            "1 234,56",
            "",
        ])]);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date.unwrap().to_string(), "2024-03-21");
        assert_eq!(txns[0].value_date.unwrap().to_string(), "2024-03-22");
        assert_eq!(txns[0].label, "PRLV SEPA EDF");
        assert_eq!(txns[0].value, -1234.56);
        assert!(txns[0].debit);
    }

    #[test]
    fn test_six_cell_row_reads_amounts_from_cells_4_and_5() {
        let template = SgPro::new().unwrap();
        let txns = template.format(&[row(&[
            "21/03/2024",
            "21/03/2024",
            "VIREMENT RECU",
            "REF 123",
            "",
            "500,00",
        ])]);
        assert_eq!(txns[0].value, 500.00);
        assert!(!txns[0].debit);
    }

    #[test]
    fn test_invalid_date_cell_yields_no_date() {
        let template = SgPro::new().unwrap();
        let txns = template.format(&[row(&["??", "21/03/2024", "X", "", "1,00"])]);
        assert_eq!(txns[0].date, None);
        assert_eq!(txns[0].value_date.unwrap().to_string(), "2024-03-21");
    }
}
